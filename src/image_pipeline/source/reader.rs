use image::ImageFormat;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::source::types::SourceImage;

pub trait ImageReader {
    /// Decodes `data` into an RGBA8 image. `hint` is the format implied by the
    /// file name, used only when the bytes carry no recognisable signature.
    fn read_image(&self, data: &[u8], hint: Option<ImageFormat>) -> Result<SourceImage>;
}
