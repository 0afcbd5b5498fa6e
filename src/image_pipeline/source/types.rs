//! Decoded source image types

use image::{ImageFormat, RgbaImage};

/// A decoded input, always canonicalised to four 8-bit channels.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Interleaved RGBA8 pixels; opaque alpha when the input had none
    pub pixels: RgbaImage,
    /// Container the bytes were decoded from
    pub format: ImageFormat,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
