//! Pipeline run configuration

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::quantize::{ChannelBits, QuantizeMode};
use crate::image_pipeline::raw::types::{SOURCE_HEIGHT, SOURCE_WIDTH};
use crate::image_pipeline::resample::ResampleStrategy;
use crate::image_pipeline::tiff::TiffCompression;

/// Configuration for a resize + quantize run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Scale factor applied to the 512x512 source on both axes
    pub scale: f64,
    /// Bits kept per color channel (8 disables quantization)
    pub channel_bits: ChannelBits,
    /// Threshold policy used when quantizing
    pub mode: QuantizeMode,
    /// How destination pixels are mapped to source pixels
    pub strategy: ResampleStrategy,
    /// Compression method for TIFF output
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            channel_bits: ChannelBits::FULL,
            mode: QuantizeMode::Uniform,
            strategy: ResampleStrategy::Scatter,
            compression: TiffCompression::None,
            predictor: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Checks the scale. Channel bits and mode are already validated by
    /// `ChannelBits::new` and `QuantizeMode::from_raw`.
    pub fn validate(&self) -> Result<()> {
        self.target_dimensions().map(|_| ())
    }

    /// Destination `(width, height)`, truncating `scale * 512` on each axis.
    pub fn target_dimensions(&self) -> Result<(usize, usize)> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PipelineError::InvalidParameter(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }

        let width = (self.scale * SOURCE_WIDTH as f64) as usize;
        let height = (self.scale * SOURCE_HEIGHT as f64) as usize;
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidParameter(format!(
                "scale {} produces an empty {}x{} destination",
                self.scale, width, height
            )));
        }

        Ok((width, height))
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    scale: Option<f64>,
    channel_bits: Option<ChannelBits>,
    mode: Option<QuantizeMode>,
    strategy: Option<ResampleStrategy>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl PipelineConfigBuilder {
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn channel_bits(mut self, bits: ChannelBits) -> Self {
        self.channel_bits = Some(bits);
        self
    }

    pub fn mode(mut self, mode: QuantizeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn strategy(mut self, strategy: ResampleStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            scale: self.scale.unwrap_or(default.scale),
            channel_bits: self.channel_bits.unwrap_or(default.channel_bits),
            mode: self.mode.unwrap_or(default.mode),
            strategy: self.strategy.unwrap_or(default.strategy),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
