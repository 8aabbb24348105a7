//! Resampling module
//!
//! This module maps the source raster onto a destination grid of a different size,
//! smoothing each sample with a 3x3 neighborhood average on the way.

pub mod kernel;
mod resampler;
pub mod types;


pub use kernel::{NeighborhoodSample, average_at, neighborhood};
pub use resampler::Resampler;
pub use types::{InterleavedRaster, ResampleStrategy};
