//! Image transform pipeline module
//!
//! Decode → long-side resize → channel split/remap/invert → merge → encode,
//! one file at a time, plus the batch driver that runs it over a file list.

pub mod batch;
pub mod channels;
pub mod common;
pub mod config;
pub mod conversions;
pub mod output;
pub mod resize;
pub mod source;
pub mod timing;

pub use common::{
    ErrorKind,
    Result,
    TransformError,
};

pub use config::{
    Channel,
    ChannelMap,
    OutputFormat,
    TransformConfig,
    TransformConfigBuilder,
};

pub use source::{
    ImageReader,
    SourceImage,
    StandardImageReader,
};

pub use channels::{
    ChannelPlane,
    RemappedImage,
};

pub use output::{
    Destination,
    ImageWriter,
    StandardImageWriter,
};

pub use conversions::ChannelShufflePipeline;

pub use batch::{
    BatchObserver,
    BatchReport,
    CancelToken,
    FileQueue,
    ProcessResult,
    collect_inputs,
};

pub use timing::{PipelineTimings, Stage};
