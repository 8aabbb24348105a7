//! Source raster types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Width of every source image accepted by the default loader.
pub const SOURCE_WIDTH: usize = 512;

/// Height of every source image accepted by the default loader.
pub const SOURCE_HEIGHT: usize = 512;

/// Number of color channels (R, G, B).
pub const CHANNELS: usize = 3;

/// Immutable plane-major RGB image: all R samples, then all G, then all B.
#[derive(Debug, Clone)]
pub struct SourceRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl SourceRaster {
    /// Wraps a plane-major buffer, rejecting an empty image or one whose length
    /// is not `width * height * 3`.
    pub fn from_planar(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(PipelineError::InputSizeError {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if expected == 0 || data.len() != expected {
            return Err(PipelineError::InputSizeError {
                expected,
                actual: data.len(),
            });
        }

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

    /// RGB triple at `(row, col)`. Panics when the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        debug_assert!(row < self.height && col < self.width);
        let plane_len = self.width * self.height;
        let idx = row * self.width + col;
        [
            self.data[idx],
            self.data[plane_len + idx],
            self.data[2 * plane_len + idx],
        ]
    }
}
