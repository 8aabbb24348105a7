use tracing::debug;

use crate::image_pipeline::quantize::bucket_table::BucketTable;
use crate::image_pipeline::quantize::types::{ChannelBits, QuantizeMode};
use crate::image_pipeline::resample::InterleavedRaster;

/// Snaps every channel of an interleaved raster to its bucket table.
#[derive(Debug, Clone, Copy)]
pub struct ChannelQuantizer {
    bits: ChannelBits,
    mode: QuantizeMode,
}

impl ChannelQuantizer {
    pub fn new(bits: ChannelBits, mode: QuantizeMode) -> Self {
        Self { bits, mode }
    }

    /// Table used by this quantizer, or `None` at full depth.
    pub fn bucket_table(&self) -> Option<BucketTable> {
        if self.bits.is_identity() {
            return None;
        }
        Some(BucketTable::for_mode(self.bits, self.mode))
    }

    /// Rewrites the raster in place. A no-op at 8 bits.
    pub fn quantize(&self, raster: &mut InterleavedRaster) {
        let Some(table) = self.bucket_table() else {
            debug!("Channel depth is 8 bits, skipping quantization");
            return;
        };

        let lut = table.lookup();
        for value in raster.as_bytes_mut() {
            *value = lut[*value as usize];
        }
    }
}
