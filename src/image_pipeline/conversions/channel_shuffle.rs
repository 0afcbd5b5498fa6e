use std::io::Write;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    channels::{RemappedImage, shuffle_channels},
    common::error::{Result, TransformError},
    config::{OutputFormat, TransformConfig},
    output::{ImageWriter, StandardImageWriter, resolve_destination, write_to_path},
    resize::fit_long_side,
    source::{ImageReader, StandardImageReader},
    timing::{PipelineTimings, Stage},
};

/// Runs `f` inside a tracing span for `stage` and records how long it took.
fn timed<T>(
    timings: &mut PipelineTimings,
    stage: Stage,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let _span = tracing::info_span!("stage", name = stage.name()).entered();
    timings.measure(stage, f)
}

/// Decode, resize, channel shuffle and encode for one image at a time.
pub struct ChannelShufflePipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: TransformConfig,
}

impl ChannelShufflePipeline<StandardImageReader, StandardImageWriter> {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> ChannelShufflePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: TransformConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidDimensions(width, height));
        }
        Ok(())
    }

    fn transform_timed(
        &self,
        input_data: &[u8],
        hint: Option<ImageFormat>,
        timings: &mut PipelineTimings,
    ) -> Result<RemappedImage> {
        let source = timed(timings, Stage::Decode, || self.reader.read_image(input_data, hint))?;
        self.validate_dimensions(source.width(), source.height())?;

        let resized = timed(timings, Stage::Resize, || {
            Ok(fit_long_side(source.pixels, self.config.target_size))
        })?;

        timed(timings, Stage::Remap, || {
            Ok(shuffle_channels(&resized, &self.config.channel_map))
        })
    }

    /// The in-memory part of the pipeline: decode, resize and remap.
    ///
    /// `hint` is only consulted when the bytes have no recognisable signature.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn transform(
        &self,
        input_data: &[u8],
        hint: Option<ImageFormat>,
    ) -> Result<RemappedImage> {
        self.transform_timed(input_data, hint, &mut PipelineTimings::new())
    }

    /// Transforms `input_data` and encodes the result as `format` into `output`.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(
        &self,
        input_data: &[u8],
        hint: Option<ImageFormat>,
        format: OutputFormat,
        output: &mut dyn Write,
    ) -> Result<()> {
        let mut timings = PipelineTimings::new();
        let image = self.transform_timed(input_data, hint, &mut timings)?;
        timed(&mut timings, Stage::Encode, || {
            self.writer.write_image(&image, format, output)
        })?;

        debug!(
            width = image.width(),
            height = image.height(),
            "Conversion complete"
        );
        Ok(())
    }

    /// Processes one file end to end and returns the path written.
    pub fn process_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        self.process_file_with_timings(input_path).map(|(path, _)| path)
    }

    #[instrument(skip(self, input_path), fields(input = %input_path.as_ref().display()))]
    pub fn process_file_with_timings<P: AsRef<Path>>(
        &self,
        input_path: P,
    ) -> Result<(PathBuf, PipelineTimings)> {
        let input_path = input_path.as_ref();
        let mut timings = PipelineTimings::new();

        let destination = resolve_destination(input_path, &self.config)?;
        info!(
            input = %input_path.display(),
            output = %destination.path.display(),
            format = %destination.format,
            "Processing file"
        );

        let input_data = timed(&mut timings, Stage::Read, || {
            std::fs::read(input_path).map_err(|e| {
                TransformError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;
        let hint = ImageFormat::from_path(input_path).ok();

        let image = self.transform_timed(&input_data, hint, &mut timings)?;
        // The source bytes are no longer needed once decoded.
        drop(input_data);

        // The destination is not opened until encoding has succeeded.
        let mut encoded = Vec::new();
        timed(&mut timings, Stage::Encode, || {
            self.writer.write_image(&image, destination.format, &mut encoded)
        })?;
        timed(&mut timings, Stage::Write, || {
            write_to_path(&destination.path, self.config.atomic_write, &encoded)
        })?;

        info!(
            width = image.width(),
            height = image.height(),
            "Wrote {}",
            destination.path.display()
        );
        Ok((destination.path, timings))
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }
}
