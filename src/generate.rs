//! Per-icon resize and crop pipeline.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use image::imageops::FilterType;

/// One icon to produce: resolved source, destination and target dimensions.
#[derive(Debug, Clone)]
pub struct IconJob {
    pub platform: &'static str,
    pub file_name: &'static str,
    pub width: u32,
    pub height: Option<u32>,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Errors from generating a single icon.
#[derive(Debug)]
pub enum GenerateError {
    /// Failed to create the destination's parent directory.
    DirectoryCreation(io::Error),
    /// Failed to open or decode the source image.
    ImageRead { path: PathBuf, reason: String },
    /// Failed to encode or write the destination image.
    ImageWrite { path: PathBuf, reason: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::DirectoryCreation(e) => {
                write!(f, "Failed to create directory: {}", e)
            }
            GenerateError::ImageRead { path, reason } => {
                write!(f, "Failed to read '{}': {}", path.display(), reason)
            }
            GenerateError::ImageWrite { path, reason } => {
                write!(f, "Failed to write '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::DirectoryCreation(e) => Some(e),
            _ => None,
        }
    }
}

/// Resolve the source image for a platform.
///
/// A file named `<stem>-<platform>.<ext>` next to the default source
/// overrides it for that platform only (e.g. `icon-ios.png` for "ios").
pub fn source_for_platform(default: &Path, platform: &str) -> PathBuf {
    let Some(stem) = default.file_stem().and_then(|s| s.to_str()) else {
        return default.to_path_buf();
    };
    let ext = default.extension().and_then(|s| s.to_str()).unwrap_or("png");

    let candidate = default.with_file_name(format!("{}-{}.{}", stem, platform, ext));
    if candidate.exists() {
        candidate
    } else {
        default.to_path_buf()
    }
}

/// Produce one icon file.
///
/// Resizes the source to a `width x width` PNG at the destination. For wide
/// assets (height present and different from width) the source is then
/// scaled to cover `width x height` and center-cropped, overwriting the
/// square output. The crop runs only after the square write has completed,
/// so the final file contents are deterministic.
pub fn generate(job: &IconJob) -> Result<(), GenerateError> {
    if let Some(parent) = job.dest.parent() {
        fs::create_dir_all(parent).map_err(GenerateError::DirectoryCreation)?;
    }

    let source = image::open(&job.source).map_err(|e| GenerateError::ImageRead {
        path: job.source.clone(),
        reason: e.to_string(),
    })?;

    let square = source.resize_exact(job.width, job.width, FilterType::Lanczos3);
    square
        .save_with_format(&job.dest, ImageFormat::Png)
        .map_err(|e| GenerateError::ImageWrite {
            path: job.dest.clone(),
            reason: e.to_string(),
        })?;

    if let Some(height) = job.height {
        if height != job.width {
            let cropped = source.resize_to_fill(job.width, height, FilterType::Lanczos3);
            cropped
                .save_with_format(&job.dest, ImageFormat::Png)
                .map_err(|e| GenerateError::ImageWrite {
                    path: job.dest.clone(),
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}
