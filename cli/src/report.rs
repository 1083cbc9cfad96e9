use std::path::PathBuf;

use png_resizer_core::format::ImageFormat;

/// One file written for a source PNG.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub size: u64,
}

/// Result of converting a single source PNG.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub original_size: u64,
    pub outputs: Vec<WrittenFile>,
}

impl FileResult {
    pub fn output(&self, format: ImageFormat) -> Option<&WrittenFile> {
        self.outputs.iter().find(|o| o.format == format)
    }

    pub fn savings_pct(&self, format: ImageFormat) -> f64 {
        match self.output(format) {
            Some(out) => savings(self.original_size, out.size),
            None => 0.0,
        }
    }
}

/// Aggregate report for all converted files, in processing order.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn total_original(&self) -> u64 {
        self.results.iter().map(|r| r.original_size).sum()
    }

    pub fn total_written(&self, format: ImageFormat) -> u64 {
        self.results
            .iter()
            .filter_map(|r| r.output(format))
            .map(|o| o.size)
            .sum()
    }

    pub fn log_summary(&self) {
        for r in &self.results {
            for out in &r.outputs {
                log::debug!(
                    "{} → {} ({}, {:.1}% vs original)",
                    r.path.display(),
                    out.path.display(),
                    format_size(out.size),
                    r.savings_pct(out.format)
                );
            }
        }

        log::info!(
            "Converted {} file(s): {} → PNG {} / WebP {}",
            self.len(),
            format_size(self.total_original()),
            format_size(self.total_written(ImageFormat::Png)),
            format_size(self.total_written(ImageFormat::Webp))
        );
    }
}

fn savings(original: u64, written: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - written as f64 / original as f64) * 100.0
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
