use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::SourceRaster;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<SourceRaster>;
}
