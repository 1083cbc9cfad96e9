use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use png_resizer_core::format::{is_png_name, ImageFormat};

use crate::error::BatchError;

/// Collect the PNG files that sit directly inside `dir`, sorted by name.
/// Subdirectories are not entered; symlinks are followed.
pub fn collect_pngs(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_png_name(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Same directory and stem, extension swapped for `format`'s.
pub fn sibling_path(path: &Path, format: ImageFormat) -> PathBuf {
    path.with_extension(format.extension())
}

/// Directory holding the running executable.
pub fn default_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable {} has no parent directory", exe.display()),
        )
    })
}

/// Read file contents.
pub fn read_file(path: &Path) -> Result<Vec<u8>, BatchError> {
    fs::read(path).map_err(|e| BatchError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write file contents, replacing whatever is there.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), BatchError> {
    fs::write(path, data).map_err(|e| BatchError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
