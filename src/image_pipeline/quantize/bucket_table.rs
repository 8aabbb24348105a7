//! Quantization threshold tables.
//!
//! A table holds `buckets + 1` non-decreasing edges in `0..=255`. Values are
//! snapped to the nearer edge of the pair that brackets them; only the first
//! `buckets` edges take part in that search, and anything above them snaps to
//! `edges[buckets - 1]`.
//!
//! The pivot layout places its unscaled edges at the real values `2^(8i/n)`
//! (exact whenever `8i/n` is whole) and rounds only once, upward, after
//! scaling toward the pivot.

use tracing::debug;

use crate::image_pipeline::quantize::types::{ChannelBits, QuantizeMode};

/// Ordered quantization thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    edges: Vec<u8>,
}

/// `ceil(value * numerator / 256)`.
#[inline]
fn scale_ceil(value: f64, numerator: u32) -> u32 {
    (value * numerator as f64 / 256.0).ceil() as u32
}

/// Clamps the terminal edge (which may reach 256) into byte range.
#[inline]
fn saturate(edge: u32) -> u8 {
    edge.min(u8::MAX as u32) as u8
}

impl BucketTable {
    pub fn for_mode(bits: ChannelBits, mode: QuantizeMode) -> Self {
        match mode {
            QuantizeMode::Uniform => Self::uniform(bits),
            QuantizeMode::Pivot(pivot) => Self::pivot_weighted(bits, pivot),
        }
    }

    /// Edges at `floor(i * 256 / n)`.
    pub fn uniform(bits: ChannelBits) -> Self {
        let n = bits.bucket_count() as u32;
        let edges = (0..=n).map(|i| saturate(i * 256 / n)).collect();

        let table = Self { edges };
        debug!("Uniform bucket table ({} buckets): {:?}", n, table.edges);
        table
    }

    /// Logarithmic edges mirrored around `p = 255 - mode`.
    ///
    /// With `lb[0] = 0` and `lb[i] = 2^(8i/n)` kept unrounded, the left side is
    /// `slb[i] = ceil(lb[i] * p / 256)` and the mirrored right side
    /// `srb[i] = ceil(lb[n - i] * (256 - p) / 256)`. Edge `i` is
    /// `slb[i] - srb[i] + srb[0]`, which starts at 0 and never decreases.
    pub fn pivot_weighted(bits: ChannelBits, mode: u8) -> Self {
        let n = bits.bucket_count();
        let pivot = 255 - mode as u32;

        let lb: Vec<f64> = (0..=n)
            .map(|i| {
                if i == 0 {
                    0.0
                } else {
                    ((8 * i) as f64 / n as f64).exp2()
                }
            })
            .collect();

        let slb = |i: usize| scale_ceil(lb[i], pivot);
        let srb = |i: usize| scale_ceil(lb[n - i], 256 - pivot);
        let base = srb(0);

        let edges = (0..=n).map(|i| saturate(slb(i) + base - srb(i))).collect();

        let table = Self { edges };
        debug!(
            "Pivot bucket table ({} buckets, pivot {}): {:?}",
            n, pivot, table.edges
        );
        table
    }

    pub fn edges(&self) -> &[u8] {
        &self.edges
    }

    pub fn bucket_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// Representative level for `value`.
    pub fn nearest(&self, value: u8) -> u8 {
        let n = self.bucket_count();
        let searched = &self.edges[..n];

        for pair in searched.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if lo <= value && value <= hi {
                let mid = (lo as u16 + hi as u16) / 2;
                return if value as u16 <= mid { lo } else { hi };
            }
        }

        self.edges[n - 1]
    }

    /// Full 256-entry lookup for [`nearest`](Self::nearest).
    pub fn lookup(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (value, slot) in lut.iter_mut().enumerate() {
            *slot = self.nearest(value as u8);
        }
        lut
    }
}
