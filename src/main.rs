use anyhow::Result;
use appreport::{ReportContext, report};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "appreport",
    version = appreport::VERSION,
    about = "Metadata reporter for the ImageSize Compress mobile app",
    long_about = "Prints the ImageSize Compress project's directory layout, feature \
                  checklist, screen list, and package.json dependency versions"
)]
struct Cli {
    /// Project root to inspect
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Manifest file, resolved relative to the project root unless absolute
    #[arg(long, default_value = appreport::MANIFEST_FILE)]
    manifest: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let manifest_path = if cli.manifest.is_absolute() {
        cli.manifest
    } else {
        cli.path.join(&cli.manifest)
    };
    let ctx = ReportContext::with_paths(cli.path, manifest_path);

    report::execute(&ctx)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
