//! Pipeline conversions module
//!
//! Orchestrates the decode → resize → channel shuffle → encode chain.

mod channel_shuffle;


pub use channel_shuffle::ChannelShufflePipeline;
