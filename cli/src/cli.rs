use std::path::PathBuf;

use clap::Parser;

/// Resize every PNG in a directory to 600x400, re-save it optimized and
/// write a WebP copy next to it
#[derive(Debug, Parser)]
#[command(name = "png_resizer", version, about)]
pub struct Cli {
    /// Directory to process (default: the directory holding this executable)
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
