use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use raster_quant_rs::image_pipeline::{
    ChannelBits, PipelineConfig, QuantizeMode, ResampleStrategy, ResizeQuantizePipeline,
    TiffCompression,
};
use raster_quant_rs::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "raster_quant")]
#[command(about = "Resize a 512x512 planar RGB image and reduce its channel depth")]
struct Cli {
    /// Planar RGB input (R plane, G plane, B plane; 512x512 each)
    image: PathBuf,

    /// Scale factor applied to both axes (e.g. 0.5 for 256x256)
    scale: f64,

    /// Bits kept per channel, 1-8 (8 disables quantization)
    channel_bits: u8,

    /// -1 for uniform buckets, 0-255 for buckets concentrated around that pivot
    #[arg(allow_negative_numbers = true)]
    mode: i32,

    /// Output TIFF file path
    #[arg(short, long, default_value = "output.tiff")]
    output: PathBuf,

    /// Fill every destination pixel from the source instead of projecting source pixels forward
    #[arg(long)]
    gather: bool,

    /// TIFF compression
    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    compression: CompressionArg,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(if cli.verbose { "debug" } else { "info" });

    let config = PipelineConfig::builder()
        .scale(cli.scale)
        .channel_bits(ChannelBits::new(cli.channel_bits).context("invalid channel bits")?)
        .mode(QuantizeMode::from_raw(cli.mode).context("invalid quantization mode")?)
        .strategy(if cli.gather {
            ResampleStrategy::Gather
        } else {
            ResampleStrategy::Scatter
        })
        .compression(cli.compression.into())
        .build();
    let pipeline = ResizeQuantizePipeline::new(config).context("invalid pipeline configuration")?;

    let (width, height) = pipeline.config().target_dimensions()?;
    info!("Output size: {}x{}", width, height);
    info!("Channel bits: {}", pipeline.config().channel_bits.get());
    info!("Quantization: {:?}", pipeline.config().mode);
    info!("Resampling: {:?}", pipeline.config().strategy);

    pipeline
        .convert_file(&cli.image, &cli.output)
        .with_context(|| format!("failed to process {}", cli.image.display()))?;

    info!("Wrote {}", cli.output.display());
    Ok(())
}
