//! Output module
//!
//! Destination resolution, encoding into PNG/TGA/JPEG and writing to disk.

mod destination;
mod persist;
mod standard_writer;
mod writer;

pub use destination::{Destination, resolve_destination};
pub use persist::write_to_path;
pub use standard_writer::StandardImageWriter;
pub use writer::ImageWriter;
