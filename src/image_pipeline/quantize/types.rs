//! Quantization parameter types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Bits kept per color channel, always in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBits(u8);

impl ChannelBits {
    /// Full 8-bit depth: quantization is skipped.
    pub const FULL: ChannelBits = ChannelBits(8);

    pub fn new(bits: u8) -> Result<Self> {
        if !(1..=8).contains(&bits) {
            return Err(PipelineError::InvalidParameter(format!(
                "channel bits must be in 1..=8, got {}",
                bits
            )));
        }
        Ok(Self(bits))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of representative levels, `2^bits`.
    pub fn bucket_count(self) -> usize {
        1usize << self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 8
    }
}

/// Threshold layout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizeMode {
    /// Evenly spaced thresholds.
    #[default]
    Uniform,
    /// Thresholds packed around `255 - pivot`, coarser away from it.
    Pivot(u8),
}

impl QuantizeMode {
    /// Decodes the command-line convention: `-1` is uniform, `0..=255` a pivot.
    pub fn from_raw(mode: i32) -> Result<Self> {
        match mode {
            -1 => Ok(QuantizeMode::Uniform),
            0..=255 => Ok(QuantizeMode::Pivot(mode as u8)),
            _ => Err(PipelineError::InvalidParameter(format!(
                "mode must be -1 or in 0..=255, got {}",
                mode
            ))),
        }
    }
}
