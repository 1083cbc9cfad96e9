use anyhow::{Context, Result};
use clap::Parser;

use png_resizer::cli::Cli;
use png_resizer::converter::convert_dir;
use png_resizer::io::default_dir;
use png_resizer_core::config::ProcessingConfig;
use png_resizer_core::pipeline::Pipeline;

const DONE_MESSAGE: &str = "Image resize and compression complete.";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let dir = match cli.dir {
        Some(dir) => dir,
        None => default_dir().context("Failed to locate the executable's directory")?,
    };

    let config = ProcessingConfig::default();
    let pipeline = Pipeline::standard();

    let report = convert_dir(&dir, &pipeline, &config)
        .with_context(|| format!("Failed to convert images in {}", dir.display()))?;
    report.log_summary();

    println!("{DONE_MESSAGE}");
    Ok(())
}
