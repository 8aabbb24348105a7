//! TIFF writing module
//!
//! This module encodes finished interleaved rasters as 8-bit RGB TIFF files.

mod standard_tiff_writer;
pub mod types;
mod writer;

pub use standard_tiff_writer::StandardTiffWriter;
pub use types::TiffCompression;
pub use writer::TiffWriter;
