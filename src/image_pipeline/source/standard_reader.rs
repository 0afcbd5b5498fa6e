//! Image reader backed by the `image` crate.
//!
//! Handles PNG, JPEG, BMP and TGA input. TGA files have no magic bytes, so
//! the caller's extension hint is consulted when content sniffing fails.

use image::ImageFormat;
use tracing::debug;

use crate::image_pipeline::common::error::{Result, TransformError};
use crate::image_pipeline::source::reader::ImageReader;
use crate::image_pipeline::source::types::SourceImage;

/// Input containers this reader accepts.
pub const SUPPORTED_INPUT_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Tga,
];

pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    /// Decodes any supported container and converts the result to RGBA8.
    ///
    /// Gray, RGB and 16-bit inputs are all widened or narrowed to RGBA8; an
    /// input without alpha gets a fully opaque alpha channel.
    ///
    /// # Errors
    ///
    /// * `TransformError::DecodeError` - unknown signature with no usable
    ///   hint, an unsupported container, or corrupt data
    fn read_image(&self, data: &[u8], hint: Option<ImageFormat>) -> Result<SourceImage> {
        debug!("Decoding image, {} bytes", data.len());

        let format = match image::guess_format(data) {
            Ok(format) => format,
            Err(guess_err) => hint.ok_or_else(|| {
                TransformError::DecodeError(format!("unrecognised image data: {}", guess_err))
            })?,
        };

        if !SUPPORTED_INPUT_FORMATS.contains(&format) {
            return Err(TransformError::DecodeError(format!(
                "{:?} input is not supported",
                format
            )));
        }

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| TransformError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{} ({:?})",
            format,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(SourceImage {
            pixels: decoded.into_rgba8(),
            format,
        })
    }
}
