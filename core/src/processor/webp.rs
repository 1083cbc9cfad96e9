use image::RgbImage;

use crate::config::ProcessingConfig;
use crate::error::ProcessingError;
use crate::format::ImageFormat;
use crate::processor::ImageEncoder;

pub struct WebpEncoder;

impl ImageEncoder for WebpEncoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Webp
    }

    fn encode(&self, img: &RgbImage, config: &ProcessingConfig) -> Result<Vec<u8>, ProcessingError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ProcessingError::Encode(format!(
                "cannot encode {}x{} image as WebP",
                width, height
            )));
        }

        let encoder = webp::Encoder::from_rgb(img.as_raw(), width, height);
        let encoded = encoder.encode(config.quality as f32);

        log::debug!(
            "WebP {}x{} at quality {}: {} bytes",
            width,
            height,
            config.quality,
            encoded.len()
        );

        Ok(encoded.to_vec())
    }
}
