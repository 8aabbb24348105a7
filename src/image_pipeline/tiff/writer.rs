use std::io::Write;
use crate::image_pipeline::common::config::PipelineConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::resample::InterleavedRaster;

pub trait TiffWriter {
    fn write_rgb_tiff(&self, image: &InterleavedRaster, output: &mut dyn Write, config: &PipelineConfig) -> Result<()>;
}
