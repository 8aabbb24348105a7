use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::raw::SourceRaster;
use crate::image_pipeline::resample::kernel::average_at;
use crate::image_pipeline::resample::types::{InterleavedRaster, ResampleStrategy};

/// Produces a resized interleaved raster from a planar source.
///
/// Axis mapping is `dst = floor(src * dst_len / src_len)` (and the inverse for
/// [`ResampleStrategy::Gather`]), evaluated in integers so no rounding depends
/// on floating point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resampler {
    strategy: ResampleStrategy,
}

impl Resampler {
    pub fn new(strategy: ResampleStrategy) -> Self {
        Self { strategy }
    }

    pub fn resample(
        &self,
        src: &SourceRaster,
        width: usize,
        height: usize,
    ) -> Result<InterleavedRaster> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidParameter(format!(
                "destination dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }

        debug!(
            "Resampling {}x{} -> {}x{} ({:?})",
            src.width(),
            src.height(),
            width,
            height,
            self.strategy
        );

        let mut dst = InterleavedRaster::zeroed(width, height)?;
        match self.strategy {
            ResampleStrategy::Scatter => scatter(src, &mut dst),
            ResampleStrategy::Gather => gather(src, &mut dst),
        }
        Ok(dst)
    }
}

/// Source-driven pass. Later source pixels overwrite earlier ones that land on
/// the same destination pixel.
fn scatter(src: &SourceRaster, dst: &mut InterleavedRaster) {
    let (src_w, src_h) = (src.width(), src.height());
    let (dst_w, dst_h) = (dst.width(), dst.height());

    for row in 0..src_h {
        let dst_row = row * dst_h / src_h;
        for col in 0..src_w {
            let dst_col = col * dst_w / src_w;
            dst.set_pixel(dst_row, dst_col, average_at(src, row, col));
        }
    }
}

fn gather(src: &SourceRaster, dst: &mut InterleavedRaster) {
    let (src_w, src_h) = (src.width(), src.height());
    let (dst_w, dst_h) = (dst.width(), dst.height());

    for row in 0..dst_h {
        let src_row = row * src_h / dst_h;
        for col in 0..dst_w {
            let src_col = col * src_w / dst_w;
            dst.set_pixel(row, col, average_at(src, src_row, src_col));
        }
    }
}
