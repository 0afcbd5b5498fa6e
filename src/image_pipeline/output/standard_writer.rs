use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::tga::TgaEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::image_pipeline::channels::RemappedImage;
use crate::image_pipeline::common::error::{Result, TransformError};
use crate::image_pipeline::config::{JPEG_QUALITY, OutputFormat};
use crate::image_pipeline::output::writer::ImageWriter;

pub struct StandardImageWriter;

impl ImageWriter for StandardImageWriter {
    fn write_image(
        &self,
        image: &RemappedImage,
        format: OutputFormat,
        output: &mut dyn Write,
    ) -> Result<()> {
        let (width, height) = (image.width(), image.height());
        debug!("Encoding {} image: {}x{}", format, width, height);

        let (samples, color) = if format.supports_alpha() {
            (image.to_rgba()?.into_raw(), ExtendedColorType::Rgba8)
        } else {
            (image.to_rgb()?.into_raw(), ExtendedColorType::Rgb8)
        };

        let mut buffer = Vec::new();
        let encoded = match format {
            OutputFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
                .write_image(&samples, width, height, color),
            OutputFormat::Png => {
                PngEncoder::new(&mut buffer).write_image(&samples, width, height, color)
            }
            OutputFormat::Tga => {
                TgaEncoder::new(&mut buffer).write_image(&samples, width, height, color)
            }
        };
        encoded.map_err(|e| TransformError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("{} encoding complete, {} bytes", format, buffer.len());
        Ok(())
    }
}
