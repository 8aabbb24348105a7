//! Destination raster types

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::raw::types::CHANNELS;

/// How destination pixels are tied to source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleStrategy {
    /// Walk the source and project every pixel forward. When upscaling some
    /// destination pixels are never written and keep their zero fill.
    #[default]
    Scatter,
    /// Walk the destination and pull from the source. Every pixel is written.
    Gather,
}

/// Pixel-interleaved RGB image (R, G, B, R, G, B, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterleavedRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl InterleavedRaster {
    /// Allocates a zero-filled raster, reporting allocation failure instead of aborting.
    pub fn zeroed(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(PipelineError::AllocationFailure(usize::MAX))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| PipelineError::AllocationFailure(len))?;
        data.resize(len, 0u8);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let idx = (row * self.width + col) * CHANNELS;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [u8; 3]) {
        let idx = (row * self.width + col) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgb);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Hands the buffer over; the raster is consumed.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
