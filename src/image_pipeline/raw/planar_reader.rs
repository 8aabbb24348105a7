//! Loader for headerless plane-major `.rgb` buffers.
//!
//! The input carries no metadata: its dimensions are fixed by the reader and
//! the only check possible is the total byte count.

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::reader::RasterReader;
use crate::image_pipeline::raw::types::{SOURCE_HEIGHT, SOURCE_WIDTH, SourceRaster};

/// Reads `width * height * 3` bytes laid out as R plane, G plane, B plane.
#[derive(Debug, Clone, Copy)]
pub struct PlanarRgbReader {
    width: usize,
    height: usize,
}

impl Default for PlanarRgbReader {
    fn default() -> Self {
        Self {
            width: SOURCE_WIDTH,
            height: SOURCE_HEIGHT,
        }
    }
}

impl PlanarRgbReader {
    /// Reader for planar buffers of a size other than the standard 512x512.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl RasterReader for PlanarRgbReader {
    fn read_raster(&self, data: &[u8]) -> Result<SourceRaster> {
        debug!(
            "Loading planar RGB buffer, {} bytes as {}x{}",
            data.len(),
            self.width,
            self.height
        );

        SourceRaster::from_planar(self.width, self.height, data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::error::PipelineError;

    #[test]
    fn test_default_reader_accepts_512_square() {
        let data = vec![7u8; SOURCE_WIDTH * SOURCE_HEIGHT * 3];
        let raster = PlanarRgbReader::default().read_raster(&data).unwrap();
        assert_eq!(raster.width(), 512);
        assert_eq!(raster.height(), 512);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let data = vec![0u8; SOURCE_WIDTH * SOURCE_HEIGHT * 3 - 1];
        let err = PlanarRgbReader::default().read_raster(&data).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InputSizeError { expected: 786432, actual: 786431 }
        ));
    }

    #[test]
    fn test_long_buffer_is_rejected() {
        let data = vec![0u8; SOURCE_WIDTH * SOURCE_HEIGHT * 3 + 10];
        let result = PlanarRgbReader::default().read_raster(&data);
        assert!(matches!(result, Err(PipelineError::InputSizeError { .. })));
    }

    #[test]
    fn test_planes_are_split_by_channel() {
        // 2x1 image: R plane [10, 11], G plane [20, 21], B plane [30, 31]
        let data = vec![10, 11, 20, 21, 30, 31];
        let raster = PlanarRgbReader::with_dimensions(2, 1)
            .read_raster(&data)
            .unwrap();

        assert_eq!(raster.pixel(0, 0), [10, 20, 30]);
        assert_eq!(raster.pixel(0, 1), [11, 21, 31]);
    }

    #[test]
    fn test_empty_dimensions_are_rejected() {
        for (w, h) in [(0, 0), (0, 4), (4, 0)] {
            let result = PlanarRgbReader::with_dimensions(w, h).read_raster(&[]);
            assert!(
                matches!(result, Err(PipelineError::InputSizeError { expected: 0, actual: 0 })),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        let result = PlanarRgbReader::with_dimensions(usize::MAX, 2).read_raster(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(PipelineError::InputSizeError { expected: usize::MAX, actual: 3 })
        ));
    }
}
