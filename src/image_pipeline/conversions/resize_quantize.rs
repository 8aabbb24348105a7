use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::{config::PipelineConfig, error::{PipelineError, Result}},
    quantize::ChannelQuantizer,
    raw::{PlanarRgbReader, RasterReader, SourceRaster},
    resample::{InterleavedRaster, Resampler},
    tiff::{StandardTiffWriter, TiffWriter},
};

pub struct ResizeQuantizePipeline<R: RasterReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl ResizeQuantizePipeline<PlanarRgbReader, StandardTiffWriter> {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_custom(PlanarRgbReader::default(), StandardTiffWriter, config)
    }
}

impl<R: RasterReader, W: TiffWriter> ResizeQuantizePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    /// Loads `input_data` and returns the finished raster. Ownership of the
    /// result passes to the caller; the pipeline keeps no reference to it.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn process(&self, input_data: &[u8]) -> Result<InterleavedRaster> {
        let source = {
            let _span = tracing::info_span!("load_planar").entered();
            self.reader.read_raster(input_data)?
        };

        self.process_raster(&source)
    }

    /// Resamples and quantizes an already loaded source. The source is only
    /// read, so one raster can feed several runs.
    pub fn process_raster(&self, source: &SourceRaster) -> Result<InterleavedRaster> {
        let (width, height) = self.config.target_dimensions()?;

        let mut raster = {
            let _span = tracing::info_span!("resample",
                width = width,
                height = height
            ).entered();
            Resampler::new(self.config.strategy).resample(source, width, height)?
        };

        {
            let _span = tracing::info_span!("quantize",
                bits = self.config.channel_bits.get()
            ).entered();
            ChannelQuantizer::new(self.config.channel_bits, self.config.mode)
                .quantize(&mut raster);
        }

        info!(
            width = raster.width(),
            height = raster.height(),
            bits = self.config.channel_bits.get(),
            mode = ?self.config.mode,
            "Raster ready"
        );
        Ok(raster)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting resize and quantize");

        let raster = self.process(input_data)?;

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_rgb_tiff(&raster, output, &self.config)?;
        }

        info!(
            width = raster.width(),
            height = raster.height(),
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Run before creating the output so a bad input leaves no empty file behind.
        let raster = self.process(&input_data)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_rgb_tiff(&raster, &mut output_file, &self.config)?;
        }

        Ok(())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
