/// Width every output image is forced to.
pub const TARGET_WIDTH: u32 = 600;
/// Height every output image is forced to.
pub const TARGET_HEIGHT: u32 = 400;
/// Lossy WebP quality 0-100.
pub const QUALITY: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Output width in pixels (aspect ratio is not preserved)
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// WebP quality 0-100 (lower = smaller file, worse quality)
    pub quality: u8,
}

impl ProcessingConfig {
    pub fn target_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            quality: QUALITY,
        }
    }
}
