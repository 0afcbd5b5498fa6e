//! Image decoding module
//!
//! Turns raw file bytes into a `SourceImage` with exactly four 8-bit channels.

mod reader;
mod standard_reader;
pub mod types;

pub use reader::ImageReader;
pub use standard_reader::{SUPPORTED_INPUT_FORMATS, StandardImageReader};
pub use types::SourceImage;
