//! Image processing pipeline module
//!
//! This module resizes a fixed-size planar RGB image with a 3x3 box average and
//! optionally quantizes each channel to fewer bits, with separate modules for
//! loading, resampling, quantization, TIFF output and orchestration.

pub mod raw;
pub mod resample;
pub mod quantize;
pub mod tiff;
pub mod conversions;
pub mod common;

pub use common::{
    PipelineConfig,
    PipelineConfigBuilder,
    PipelineError,
    Result,
};

pub use raw::{
    PlanarRgbReader,
    RasterReader,
    SourceRaster,
};

pub use resample::{
    InterleavedRaster,
    ResampleStrategy,
    Resampler,
};

pub use quantize::{
    BucketTable,
    ChannelBits,
    ChannelQuantizer,
    QuantizeMode,
};

pub use self::tiff::{
    TiffCompression,
    TiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    ResizeQuantizePipeline,
};
