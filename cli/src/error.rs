use std::path::PathBuf;
use thiserror::Error;

use png_resizer_core::error::ProcessingError;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to process {path}: {source}")]
    Process {
        path: PathBuf,
        source: ProcessingError,
    },

    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
