//! Common utilities module
//!
//! Error types shared by every stage of the transform pipeline.

pub mod error;

pub use error::{ErrorKind, Result, TransformError};
