use std::io::Write;
use tracing::debug;
use tiff::encoder::{Compression, TiffEncoder, colortype::RGB8, compression::DeflateLevel};
use tiff::tags::Predictor;
use crate::image_pipeline::common::config::PipelineConfig;
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::resample::InterleavedRaster;
use crate::image_pipeline::tiff::types::TiffCompression;
use crate::image_pipeline::tiff::writer::TiffWriter;

pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_rgb_tiff(&self, image: &InterleavedRaster, output: &mut dyn Write, config: &PipelineConfig) -> Result<()> {
        debug!("Encoding RGB TIFF image: {}x{}", image.width(), image.height());

        // The encoder needs Seek, so it works against an in-memory buffer first.
        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => Predictor::Horizontal,
                _ => Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder.write_image::<RGB8>(
            image.width() as u32,
            image.height() as u32,
            image.as_bytes(),
        ).map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
