use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Invalid input size: expected {expected} bytes, got {actual}")]
    InputSizeError { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to allocate destination raster of {0} bytes")]
    AllocationFailure(usize),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
