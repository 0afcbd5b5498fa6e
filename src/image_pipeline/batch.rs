//! Batch driver module
//!
//! Runs the pipeline over an ordered list of files, one at a time, turning
//! every per-file error into a `ProcessResult` instead of aborting.

mod inputs;
mod queue;
mod runner;
pub mod types;


pub use inputs::{SUPPORTED_INPUT_EXTENSIONS, collect_inputs, is_supported_input};
pub use queue::FileQueue;
pub use runner::{BatchObserver, CancelToken, SilentObserver, process_batch};
pub use types::{BatchReport, ProcessResult};
