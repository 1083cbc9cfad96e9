pub mod png;
pub mod webp;

use image::RgbImage;

use crate::config::ProcessingConfig;
use crate::error::ProcessingError;
use crate::format::ImageFormat;

/// Turns an already-resized RGB buffer into the bytes of one output file.
pub trait ImageEncoder: Send + Sync {
    fn format(&self) -> ImageFormat;
    fn encode(&self, img: &RgbImage, config: &ProcessingConfig) -> Result<Vec<u8>, ProcessingError>;
}
