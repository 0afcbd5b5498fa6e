use std::io::Write;

use crate::image_pipeline::channels::RemappedImage;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::OutputFormat;

pub trait ImageWriter {
    fn write_image(
        &self,
        image: &RemappedImage,
        format: OutputFormat,
        output: &mut dyn Write,
    ) -> Result<()>;
}
