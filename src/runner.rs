//! Orchestration: flattens selected platforms into icon jobs and runs them
//! on a bounded worker pool, reporting each outcome as it settles.

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use crate::catalog::PlatformSpec;
use crate::generate::{self, GenerateError, IconJob};

/// Settings for one generation run, built from CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default source icon file.
    pub icon: PathBuf,
    /// Root directory the per-platform trees are written under.
    pub target: PathBuf,
    /// Worker thread count (clamped to at least 1).
    pub jobs: usize,
}

/// Outcome of a single icon job.
#[derive(Debug)]
pub struct IconReport {
    pub platform: &'static str,
    pub file_name: &'static str,
    pub result: Result<(), GenerateError>,
}

/// Aggregate counts for a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub failed: usize,
}

/// Errors that prevent a run from starting at all.
#[derive(Debug)]
pub enum RunError {
    /// The default source icon does not exist; nothing is generated.
    SourceMissing(PathBuf),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::SourceMissing(path) => {
                write!(f, "{} does not exist", path.display())
            }
        }
    }
}

impl std::error::Error for RunError {}

/// Generate every icon of the selected platforms.
///
/// Jobs run on `min(config.jobs, job count)` worker threads pulling from a
/// shared cursor. `on_report` is invoked on the calling thread once per icon,
/// in completion order. A failed icon is reported and counted but never
/// cancels the jobs still in flight; the call returns only after every job
/// has settled.
pub fn run<F>(
    config: &Config,
    platforms: &[&'static PlatformSpec],
    mut on_report: F,
) -> Result<RunSummary, RunError>
where
    F: FnMut(&IconReport),
{
    if !config.icon.exists() {
        return Err(RunError::SourceMissing(config.icon.clone()));
    }

    let jobs = flatten_jobs(config, platforms);
    let mut summary = RunSummary::default();
    if jobs.is_empty() {
        return Ok(summary);
    }

    let workers = config.jobs.max(1).min(jobs.len());
    let cursor = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel();

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            let jobs = &jobs;
            s.spawn(move || {
                loop {
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(job) = jobs.get(index) else { break };
                    let report = IconReport {
                        platform: job.platform,
                        file_name: job.file_name,
                        result: generate::generate(job),
                    };
                    if tx.send(report).is_err() {
                        break;
                    }
                }
            });
        }
        // The workers hold the remaining senders; dropping ours lets the
        // receive loop end once they finish.
        drop(tx);

        for report in rx {
            match report.result {
                Ok(()) => summary.generated += 1,
                Err(_) => summary.failed += 1,
            }
            on_report(&report);
        }
    });

    Ok(summary)
}

/// Expand platforms into concrete jobs, resolving each platform's source
/// override once.
fn flatten_jobs(config: &Config, platforms: &[&'static PlatformSpec]) -> Vec<IconJob> {
    let mut jobs = Vec::new();
    for platform in platforms {
        let source = generate::source_for_platform(&config.icon, platform.name);
        let dir = platform.output_dir(&config.target);
        for icon in platform.icons {
            jobs.push(IconJob {
                platform: platform.name,
                file_name: icon.file_name,
                width: icon.width,
                height: icon.height,
                source: source.clone(),
                dest: dir.join(icon.file_name),
            });
        }
    }
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_png(path: &Path, size: u32, color: [u8; 4]) {
        RgbaImage::from_pixel(size, size, Rgba(color))
            .save(path)
            .unwrap();
    }

    fn config(dir: &TempDir, jobs: usize) -> Config {
        Config {
            icon: dir.path().join("icon.png"),
            target: dir.path().join("icons"),
            jobs,
        }
    }

    #[test]
    fn missing_source_generates_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 4);

        let result = run(&config, &catalog::select("all"), |_| {
            panic!("no reports expected")
        });

        assert!(matches!(result, Err(RunError::SourceMissing(_))));
        assert!(!config.target.exists());
    }

    #[test]
    fn single_platform_generates_exactly_its_icons() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 4);
        write_png(&config.icon, 256, [200, 40, 40, 255]);

        let mut reports = 0;
        let summary = run(&config, &catalog::select("android"), |r| {
            assert_eq!(r.platform, "android");
            reports += 1;
        })
        .unwrap();

        assert_eq!(reports, 13);
        assert_eq!(
            summary,
            RunSummary {
                generated: 13,
                failed: 0
            }
        );
        assert!(config.target.join("android/drawable/icon.png").exists());
        assert!(config.target.join("android/mipmap-xxxhdpi/icon.png").exists());
        // No sibling platform trees
        assert!(!config.target.join("ios").exists());
        assert!(!config.target.join("osx").exists());
        assert!(!config.target.join("windows").exists());
    }

    #[test]
    fn all_platforms_generate_the_full_union() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 8);
        write_png(&config.icon, 128, [10, 20, 30, 255]);

        let summary = run(&config, &catalog::select("all"), |_| {}).unwrap();

        let total: usize = catalog::CATALOG.iter().map(|p| p.icons.len()).sum();
        assert_eq!(summary.generated, total);
        assert_eq!(summary.failed, 0);
        for platform in catalog::CATALOG {
            for icon in platform.icons {
                let path = config.target.join(platform.name).join(icon.file_name);
                assert!(path.exists(), "{} missing", path.display());
                let expected = (icon.width, icon.height.unwrap_or(icon.width));
                assert_eq!(image::image_dimensions(&path).unwrap(), expected);
            }
        }
    }

    #[test]
    fn unknown_platform_is_zero_work() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 4);
        write_png(&config.icon, 64, [0, 0, 0, 255]);

        let summary = run(&config, &catalog::select("symbian"), |_| {
            panic!("no reports expected")
        })
        .unwrap();

        assert_eq!(summary, RunSummary::default());
        assert!(!config.target.exists());
    }

    #[test]
    fn one_failure_does_not_abort_siblings() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 4);
        write_png(&config.icon, 128, [50, 50, 50, 255]);

        // A directory squatting on one destination path makes that single
        // icon unwritable while its siblings stay fine.
        fs::create_dir_all(config.target.join("osx/icon-16x16.png")).unwrap();

        let mut failed_files = Vec::new();
        let summary = run(&config, &catalog::select("osx"), |r| {
            if r.result.is_err() {
                failed_files.push(r.file_name);
            }
        })
        .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.generated, 5);
        assert_eq!(failed_files, vec!["icon-16x16.png"]);
        assert!(config.target.join("osx/icon-512x512.png").exists());
    }

    #[test]
    fn single_worker_settles_every_job() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 1);
        write_png(&config.icon, 64, [5, 5, 5, 255]);

        let mut reports = 0;
        let summary = run(&config, &catalog::select("osx"), |_| reports += 1).unwrap();

        assert_eq!(reports, 6);
        assert_eq!(summary.generated, 6);
    }

    #[test]
    fn platform_override_source_applies_to_that_platform_only() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 2);
        write_png(&config.icon, 64, [250, 0, 0, 255]);
        write_png(&dir.path().join("icon-android.png"), 64, [0, 0, 250, 255]);

        run(&config, &catalog::select("android"), |_| {}).unwrap();
        run(&config, &catalog::select("osx"), |_| {}).unwrap();

        let android = image::open(config.target.join("android/drawable/icon.png"))
            .unwrap()
            .to_rgba8();
        let osx = image::open(config.target.join("osx/icon-32x32.png"))
            .unwrap()
            .to_rgba8();
        // Solid-color sources survive resampling as the same solid color.
        assert!(android.get_pixel(10, 10)[2] > 200, "android should be blue");
        assert!(osx.get_pixel(10, 10)[0] > 200, "osx should be red");
    }

    #[test]
    fn zero_jobs_is_clamped_to_one_worker() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, 0);
        write_png(&config.icon, 32, [1, 2, 3, 255]);

        let summary = run(&config, &catalog::select("osx"), |_| {}).unwrap();

        assert_eq!(summary.generated, 6);
    }
}
