//! Common utilities module
//!
//! This module contains the error type and run configuration shared across the pipeline.

pub mod config;
pub mod error;

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::{PipelineError, Result};
