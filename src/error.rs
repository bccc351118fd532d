//! Error handling for the life expectancy cleaning pipeline.
//!
//! Provides error types with context for file access, composite key
//! parsing, and year normalization failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid extraction pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Output directory not found: {path}")]
    OutputDirNotFound { path: PathBuf },

    #[error(
        "Malformed composite key at row {row}: expected {expected} comma-separated fields, found {found} in '{key}'"
    )]
    MalformedCompositeKey {
        row: usize,
        expected: usize,
        found: usize,
        key: String,
    },

    #[error("Malformed year at row {row}: '{token}' is not an integer")]
    MalformedYear { row: usize, token: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PipelineError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
