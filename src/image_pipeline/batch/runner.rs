//! Sequential batch execution with progress reporting and cooperative
//! cancellation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, info_span, warn};

use crate::image_pipeline::batch::types::{BatchReport, ProcessResult};
use crate::image_pipeline::conversions::ChannelShufflePipeline;
use crate::image_pipeline::output::ImageWriter;
use crate::image_pipeline::source::ImageReader;
use crate::image_pipeline::timing::PipelineTimings;

/// Receives progress while a batch runs. Both hooks default to no-ops.
pub trait BatchObserver {
    /// `index` is zero-based; `total` is the number of files in the batch.
    fn on_file_start(&mut self, _index: usize, _total: usize, _input: &Path) {}

    /// `timings` is only available for files that succeeded.
    fn on_file_done(
        &mut self,
        _index: usize,
        _total: usize,
        _result: &ProcessResult,
        _timings: Option<&PipelineTimings>,
    ) {
    }
}

/// Observer that ignores all progress.
pub struct SilentObserver;

impl BatchObserver for SilentObserver {}

/// Shared flag checked between files.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Processes `inputs` one after another with the same pipeline.
///
/// A failing file is recorded and the run moves on; nothing short of
/// cancellation stops it early.
pub fn process_batch<R: ImageReader, W: ImageWriter>(
    pipeline: &ChannelShufflePipeline<R, W>,
    inputs: &[PathBuf],
    observer: &mut dyn BatchObserver,
    cancel: Option<&CancelToken>,
) -> BatchReport {
    let total = inputs.len();
    let mut report = BatchReport::default();
    info!(files = total, "Starting batch");

    for (index, input) in inputs.iter().enumerate() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            warn!("Batch cancelled after {} of {} file(s)", index, total);
            report.cancelled = true;
            break;
        }

        let _span = info_span!("file", index = index + 1, total).entered();
        observer.on_file_start(index, total, input);

        let (result, timings) = match pipeline.process_file_with_timings(input) {
            Ok((output, timings)) => (
                ProcessResult::from_outcome(input.clone(), Ok(output)),
                Some(timings),
            ),
            Err(e) => {
                warn!("{}: {}", input.display(), e);
                (ProcessResult::from_outcome(input.clone(), Err(e)), None)
            }
        };

        observer.on_file_done(index, total, &result, timings.as_ref());
        report.results.push(result);
    }

    info!("Batch finished: {}", report.summary());
    report
}
