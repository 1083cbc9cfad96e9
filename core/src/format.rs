#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Webp,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Webp => "WebP",
        }
    }
}

/// True when a file name ends in `.png`, ignoring case.
///
/// Matches on the whole name rather than [`std::path::Path::extension`], so a file
/// called just `.png` is picked up too.
pub fn is_png_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".png")
}
