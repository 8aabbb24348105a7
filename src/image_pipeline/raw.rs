//! Planar RGB loading module
//!
//! This module turns a raw plane-major byte buffer into a validated source raster.

mod planar_reader;
mod reader;
pub mod types;

pub use planar_reader::PlanarRgbReader;
pub use reader::RasterReader;
pub use types::SourceRaster;
