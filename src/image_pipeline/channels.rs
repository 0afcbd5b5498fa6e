//! Channel split/remap/merge stage
//!
//! Splits an RGBA image into planes, routes each output channel from its
//! configured source (inverting where asked) and merges the result back into
//! RGBA, or RGB when the target container has no alpha.

mod plane;
mod remap;

pub use plane::{ChannelPlane, merge_rgb, merge_rgba, split_rgba};
pub use remap::{RemappedImage, remap_planes, shuffle_channels};
