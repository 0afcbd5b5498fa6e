use std::path::PathBuf;

use crate::image_pipeline::batch::runner::{BatchObserver, CancelToken, process_batch};
use crate::image_pipeline::batch::types::BatchReport;
use crate::image_pipeline::conversions::ChannelShufflePipeline;
use crate::image_pipeline::output::ImageWriter;
use crate::image_pipeline::source::ImageReader;

/// Ordered list of files waiting to be processed.
///
/// Running the queue consumes it: once a run returns, the queue is empty
/// again, whether or not every file succeeded.
#[derive(Debug, Default)]
pub struct FileQueue {
    files: Vec<PathBuf>,
}

impl FileQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    pub fn extend<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn run<R: ImageReader, W: ImageWriter>(
        &mut self,
        pipeline: &ChannelShufflePipeline<R, W>,
        observer: &mut dyn BatchObserver,
        cancel: Option<&CancelToken>,
    ) -> BatchReport {
        let files = std::mem::take(&mut self.files);
        process_batch(pipeline, &files, observer, cancel)
    }
}
