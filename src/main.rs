use std::path::PathBuf;

use clap::Parser;

use iconset::runner::{Config, IconReport};
use iconset::{bundle, catalog, generate, runner};

#[derive(Parser)]
#[command(name = "iconset")]
#[command(about = "Generate platform icon sets from a single source image")]
#[command(version)]
struct Cli {
    /// Source icon file (square PNG)
    #[arg(long, default_value = "icon.png")]
    icon: PathBuf,

    /// Platform to generate for: ios, android, osx, windows, or all
    #[arg(long, default_value = "all")]
    platform: String,

    /// Root directory for the generated icon trees
    #[arg(long, default_value = "./icons")]
    target: PathBuf,

    /// Number of worker threads
    #[arg(long, default_value_t = 4)]
    jobs: usize,

    /// Also write icon.icns (osx) and icon.ico (windows) containers
    #[arg(long)]
    bundle: bool,
}

fn print_report(report: &IconReport) {
    match &report.result {
        Ok(()) => println!("  ✓  {}/{} created", report.platform, report.file_name),
        Err(e) => println!(
            "  ✗  {}/{} failed: {}",
            report.platform, report.file_name, e
        ),
    }
}

fn write_bundles(cli: &Cli, platforms: &[&'static catalog::PlatformSpec]) {
    for platform in platforms {
        let container = match platform.name {
            "osx" => "icon.icns",
            "windows" => "icon.ico",
            _ => continue,
        };
        let source = generate::source_for_platform(&cli.icon, platform.name);
        let dest = platform.output_dir(&cli.target).join(container);
        let result = match platform.name {
            "osx" => bundle::write_icns(&source, &dest),
            _ => bundle::write_ico(&source, &dest),
        };
        match result {
            Ok(()) => println!("  ✓  {}/{} created", platform.name, container),
            Err(e) => println!("  ✗  {}/{} failed: {}", platform.name, container, e),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = Config {
        icon: cli.icon.clone(),
        target: cli.target.clone(),
        jobs: cli.jobs,
    };
    let platforms = catalog::select(&cli.platform);

    if config.icon.exists() {
        println!("  ✓  {} exists", config.icon.display());
    }

    match runner::run(&config, &platforms, print_report) {
        Ok(summary) => {
            if cli.bundle {
                write_bundles(&cli, &platforms);
            }
            println!();
            println!("  {} created, {} failed", summary.generated, summary.failed);
        }
        // Per-icon failures are reported above without affecting the exit
        // status; a missing source is reported once and also exits normally.
        Err(e) => {
            eprintln!("  ✗  {}", e);
        }
    }
}
