use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::config::ProcessingConfig;
use crate::error::ProcessingError;
use crate::format::ImageFormat;
use crate::processor::png::PngEncoder;
use crate::processor::webp::WebpEncoder;
use crate::processor::ImageEncoder;

/// One encoded output of a processed image.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

/// Decode, flatten to 8-bit RGB and stretch to the configured size.
///
/// The container format is sniffed from the bytes. Alpha is dropped and the
/// aspect ratio is not kept.
pub fn prepare(input: &[u8], config: &ProcessingConfig) -> Result<RgbImage, ProcessingError> {
    let img = image::load_from_memory(input)
        .map_err(|e| ProcessingError::Decode(e.to_string()))?;

    let (width, height) = config.target_size();
    log::debug!(
        "Resizing {}x{} {:?} to {}x{}",
        img.width(),
        img.height(),
        img.color(),
        width,
        height
    );

    let rgb = img.to_rgb8();
    if rgb.dimensions() == (width, height) {
        return Ok(rgb);
    }
    Ok(imageops::resize(&rgb, width, height, FilterType::Lanczos3))
}

pub struct Pipeline {
    encoders: Vec<Box<dyn ImageEncoder>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            encoders: Vec::new(),
        }
    }

    /// PNG first, then WebP.
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(Box::new(PngEncoder));
        pipeline.register(Box::new(WebpEncoder));
        pipeline
    }

    pub fn register(&mut self, encoder: Box<dyn ImageEncoder>) {
        self.encoders.push(encoder);
    }

    pub fn formats(&self) -> Vec<ImageFormat> {
        self.encoders.iter().map(|e| e.format()).collect()
    }

    /// Prepare the image once and run every registered encoder over it,
    /// in registration order.
    pub fn process(
        &self,
        input: &[u8],
        config: &ProcessingConfig,
    ) -> Result<Vec<EncodedImage>, ProcessingError> {
        let prepared = prepare(input, config)?;

        self.encoders
            .iter()
            .map(|encoder| {
                Ok(EncodedImage {
                    format: encoder.format(),
                    data: encoder.encode(&prepared, config)?,
                })
            })
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
