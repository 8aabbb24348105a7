//! 3x3 box average over a source pixel and its in-bounds neighbors.
//!
//! Cells that fall outside the raster are dropped from the window rather than
//! clamped or reflected, so the divisor shrinks to 6 along edges and 4 in corners.

use crate::image_pipeline::raw::SourceRaster;

/// Per-channel sums over the in-bounds part of a 3x3 window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodSample {
    pub sum: [u32; 3],
    pub count: u32,
}

impl NeighborhoodSample {
    /// Truncating per-channel mean.
    #[inline]
    pub fn average(&self) -> [u8; 3] {
        // The center cell is always in bounds, so count >= 1.
        [
            (self.sum[0] / self.count) as u8,
            (self.sum[1] / self.count) as u8,
            (self.sum[2] / self.count) as u8,
        ]
    }
}

/// Accumulates the window centered on `(row, col)`.
///
/// `(row, col)` must lie inside `src`.
pub fn neighborhood(src: &SourceRaster, row: usize, col: usize) -> NeighborhoodSample {
    debug_assert!(row < src.height() && col < src.width());

    let mut sum = [0u32; 3];
    let mut count = 0u32;

    for dr in -1isize..=1 {
        let Some(r) = row.checked_add_signed(dr).filter(|&r| r < src.height()) else {
            continue;
        };
        for dc in -1isize..=1 {
            let Some(c) = col.checked_add_signed(dc).filter(|&c| c < src.width()) else {
                continue;
            };
            let px = src.pixel(r, c);
            for ch in 0..3 {
                sum[ch] += px[ch] as u32;
            }
            count += 1;
        }
    }

    NeighborhoodSample { sum, count }
}

/// Smoothed RGB triple at `(row, col)`.
#[inline]
pub fn average_at(src: &SourceRaster, row: usize, col: usize) -> [u8; 3] {
    neighborhood(src, row, col).average()
}
