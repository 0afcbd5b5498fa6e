//! Transform configuration module
//!
//! The immutable settings snapshot taken once per batch run.

pub mod channel;
pub mod types;

pub use channel::{Channel, ChannelMap};
pub use types::{
    JPEG_QUALITY, OutputFormat, PRESET_TARGET_SIZES, TransformConfig, TransformConfigBuilder,
};
