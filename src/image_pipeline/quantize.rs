//! Channel quantization module
//!
//! This module reduces each 8-bit channel to `2^bits` representative levels,
//! with thresholds laid out either uniformly or concentrated around a pivot value.

mod bucket_table;
mod quantizer;
pub mod types;


pub use bucket_table::BucketTable;
pub use quantizer::ChannelQuantizer;
pub use types::{ChannelBits, QuantizeMode};
