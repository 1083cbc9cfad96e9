use std::io::Cursor;

use image::RgbImage;

use crate::config::ProcessingConfig;
use crate::error::ProcessingError;
use crate::format::ImageFormat;
use crate::processor::ImageEncoder;

/// oxipng preset used for the lossless pass. 2 is oxipng's own default.
const OPTIMIZE_PRESET: u8 = 2;

pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    // PNG is lossless: `config.quality` only applies to WebP.
    fn encode(&self, img: &RgbImage, _config: &ProcessingConfig) -> Result<Vec<u8>, ProcessingError> {
        let raw = encode_png(img)?;
        let optimized = optimize_lossless(&raw)?;

        log::debug!(
            "PNG {}x{}: {} bytes encoded, {} bytes after optimization",
            img.width(),
            img.height(),
            raw.len(),
            optimized.len()
        );

        Ok(optimized)
    }
}

fn encode_png(img: &RgbImage) -> Result<Vec<u8>, ProcessingError> {
    let mut output = Vec::new();
    img
        .write_to(&mut Cursor::new(&mut output), image::ImageFormat::Png)
        .map_err(|e| ProcessingError::Encode(format!("Failed to encode PNG: {}", e)))?;
    Ok(output)
}

/// Lossless DEFLATE re-compression via oxipng
fn optimize_lossless(png_data: &[u8]) -> Result<Vec<u8>, ProcessingError> {
    let mut opts = oxipng::Options::from_preset(OPTIMIZE_PRESET);
    opts.strip = oxipng::StripChunks::Safe;

    oxipng::optimize_from_memory(png_data, &opts)
        .map_err(|e| ProcessingError::Optimize(e.to_string()))
}
