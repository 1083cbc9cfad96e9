use std::path::{Path, PathBuf};

use png_resizer_core::config::ProcessingConfig;
use png_resizer_core::format::ImageFormat;
use png_resizer_core::pipeline::Pipeline;

use crate::error::BatchError;
use crate::io::{collect_pngs, read_file, sibling_path, write_file};
use crate::report::{FileResult, Report, WrittenFile};

/// Convert every PNG directly inside `dir`, one file at a time.
///
/// The PNG output replaces the source file; every other format lands next
/// to it under the same stem. The first failure stops the batch; files
/// converted before it stay converted.
pub fn convert_dir(
    dir: &Path,
    pipeline: &Pipeline,
    config: &ProcessingConfig,
) -> Result<Report, BatchError> {
    let files = collect_pngs(dir)?;
    log::debug!("Found {} PNG file(s) in {}", files.len(), dir.display());

    let mut report = Report::new();
    for path in files {
        report.add(convert_file(&path, pipeline, config)?);
    }

    Ok(report)
}

/// Convert a single PNG in place and write its siblings.
pub fn convert_file(
    path: &Path,
    pipeline: &Pipeline,
    config: &ProcessingConfig,
) -> Result<FileResult, BatchError> {
    let data = read_file(path)?;
    let original_size = data.len() as u64;

    let encoded = pipeline
        .process(&data, config)
        .map_err(|source| BatchError::Process {
            path: path.to_path_buf(),
            source,
        })?;

    let mut outputs = Vec::with_capacity(encoded.len());
    for out in encoded {
        let target = output_path(path, out.format);
        write_file(&target, &out.data)?;
        log::debug!(
            "Wrote {} {} ({} bytes)",
            out.format.as_str(),
            target.display(),
            out.data.len()
        );

        outputs.push(WrittenFile {
            path: target,
            format: out.format,
            size: out.data.len() as u64,
        });
    }

    Ok(FileResult {
        path: path.to_path_buf(),
        original_size,
        outputs,
    })
}

fn output_path(source: &Path, format: ImageFormat) -> PathBuf {
    match format {
        ImageFormat::Png => source.to_path_buf(),
        other => sibling_path(source, other),
    }
}
