#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};
    use crate::image_pipeline::common::config::PipelineConfig;
    use crate::image_pipeline::common::error::{PipelineError, Result};
    use crate::image_pipeline::conversions::ResizeQuantizePipeline;
    use crate::image_pipeline::quantize::{ChannelBits, QuantizeMode};
    use crate::image_pipeline::raw::{PlanarRgbReader, RasterReader, SourceRaster};
    use crate::image_pipeline::resample::{InterleavedRaster, ResampleStrategy};
    use crate::image_pipeline::tiff::TiffWriter;

    const SIDE: usize = 512;

    struct MockReader {
        should_fail: bool,
        rgb: [u8; 3],
    }

    impl RasterReader for MockReader {
        fn read_raster(&self, _data: &[u8]) -> Result<SourceRaster> {
            if self.should_fail {
                return Err(PipelineError::InputSizeError { expected: SIDE * SIDE * 3, actual: 3 });
            }
            SourceRaster::from_planar(SIDE, SIDE, planar(self.rgb))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written: Arc<Mutex<Vec<InterleavedRaster>>>,
    }

    impl TiffWriter for MockWriter {
        fn write_rgb_tiff(&self, image: &InterleavedRaster, _output: &mut dyn Write, _config: &PipelineConfig) -> Result<()> {
            if self.should_fail {
                return Err(PipelineError::EncodeError("Mock encode error".to_string()));
            }
            self.written.lock().unwrap().push(image.clone());
            Ok(())
        }
    }

    fn planar(rgb: [u8; 3]) -> Vec<u8> {
        let mut data = Vec::with_capacity(SIDE * SIDE * 3);
        for value in rgb {
            data.extend(std::iter::repeat_n(value, SIDE * SIDE));
        }
        data
    }

    fn mock_pipeline(
        reader_fails: bool,
        writer_fails: bool,
        config: PipelineConfig,
    ) -> (ResizeQuantizePipeline<MockReader, MockWriter>, Arc<Mutex<Vec<InterleavedRaster>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: reader_fails, rgb: [200, 100, 50] };
        let writer = MockWriter { should_fail: writer_fails, written: written.clone() };
        let pipeline = ResizeQuantizePipeline::with_custom(reader, writer, config).unwrap();
        (pipeline, written)
    }

    #[test]
    fn test_half_scale_full_depth() {
        let config = PipelineConfig::builder().scale(0.5).build();
        let pipeline = ResizeQuantizePipeline::new(config).unwrap();

        let raster = pipeline.process(&planar([200, 100, 50])).unwrap();

        assert_eq!((raster.width(), raster.height()), (256, 256));
        assert_eq!(raster.as_bytes().len(), 256 * 256 * 3);
        assert!(raster.as_bytes().chunks_exact(3).all(|px| px == [200, 100, 50]));
    }

    #[test]
    fn test_half_scale_one_bit_uniform() {
        let config = PipelineConfig::builder()
            .scale(0.5)
            .channel_bits(ChannelBits::new(1).unwrap())
            .mode(QuantizeMode::Uniform)
            .build();
        let pipeline = ResizeQuantizePipeline::new(config).unwrap();

        let raster = pipeline.process(&planar([200, 100, 50])).unwrap();

        // Edges [0, 128]: 200 and 100 are above the midpoint 64, 50 is below.
        assert!(raster.as_bytes().chunks_exact(3).all(|px| px == [128, 128, 0]));
    }

    #[test]
    fn test_successful_conversion() {
        let (pipeline, written) = mock_pipeline(false, false, PipelineConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"ignored by mock", &mut output);

        assert!(result.is_ok());
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!((written[0].width(), written[0].height()), (512, 512));
    }

    #[test]
    fn test_reader_failure() {
        let (pipeline, written) = mock_pipeline(true, false, PipelineConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"ignored by mock", &mut output);

        assert!(matches!(result.unwrap_err(), PipelineError::InputSizeError { .. }));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_writer_failure() {
        let (pipeline, _) = mock_pipeline(false, true, PipelineConfig::default());

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"ignored by mock", &mut output);

        assert!(matches!(result.unwrap_err(), PipelineError::EncodeError(_)));
    }

    #[test]
    fn test_wrong_input_size_rejected() {
        let pipeline = ResizeQuantizePipeline::new(PipelineConfig::default()).unwrap();
        let result = pipeline.process(&[0u8; 1024]);
        assert!(matches!(result, Err(PipelineError::InputSizeError { expected: 786432, actual: 1024 })));
    }

    #[test]
    fn test_invalid_scale_rejected_up_front() {
        let config = PipelineConfig::builder().scale(-0.5).build();
        assert!(matches!(
            ResizeQuantizePipeline::new(config),
            Err(PipelineError::InvalidParameter(_))
        ));

        let mut pipeline = ResizeQuantizePipeline::new(PipelineConfig::default()).unwrap();
        let bad = PipelineConfig::builder().scale(0.0).build();
        assert!(pipeline.set_config(bad).is_err());
        assert_eq!(pipeline.config().scale, 1.0);
    }

    #[test]
    fn test_gather_upscale_has_no_gaps() {
        let config = PipelineConfig::builder()
            .scale(1.5)
            .strategy(ResampleStrategy::Gather)
            .build();
        let (pipeline, _) = mock_pipeline(false, false, config);

        let raster = pipeline.process(b"").unwrap();

        assert_eq!((raster.width(), raster.height()), (768, 768));
        assert!(raster.as_bytes().chunks_exact(3).all(|px| px == [200, 100, 50]));
    }

    #[test]
    fn test_scatter_upscale_leaves_zero_gaps() {
        let config = PipelineConfig::builder().scale(2.0).build();
        let (pipeline, _) = mock_pipeline(false, false, config);

        let raster = pipeline.process(b"").unwrap();

        assert_eq!(raster.pixel(0, 0), [200, 100, 50]);
        assert_eq!(raster.pixel(0, 1), [0, 0, 0]);
        assert_eq!(raster.pixel(1, 0), [0, 0, 0]);
    }

    #[test]
    fn test_shared_source_across_runs() {
        let source = PlanarRgbReader::default().read_raster(&planar([10, 20, 30])).unwrap();
        let source = Arc::new(source);

        let handles: Vec<_> = [0.25, 0.5, 1.0]
            .into_iter()
            .map(|scale| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    let config = PipelineConfig::builder().scale(scale).build();
                    let pipeline = ResizeQuantizePipeline::new(config).unwrap();
                    pipeline.process_raster(&source).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let raster = handle.join().unwrap();
            assert!(raster.as_bytes().chunks_exact(3).all(|px| px == [10, 20, 30]));
        }
    }
}
