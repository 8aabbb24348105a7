//! Pipeline conversions module
//!
//! This module contains orchestration logic: load, resample, quantize, and hand off.

mod resize_quantize;

#[cfg(test)]
mod tests;

pub use resize_quantize::ResizeQuantizePipeline;
