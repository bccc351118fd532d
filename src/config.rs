//! Configuration for a cleaning run.
//!
//! A single explicit structure enumerating every knob of the pipeline,
//! passed once into the entry point. Defaults reproduce the standard
//! Eurostat layout: a `data/` directory next to the working directory
//! holding the raw TSV and receiving the cleaned CSV.

use crate::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_NULL_CHECK_COLUMN, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILENAME,
    DEFAULT_REGION, DEFAULT_SEPARATOR,
};
use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for cleaning a life expectancy dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the raw wide-format TSV file
    pub input_path: PathBuf,

    /// Field separator of the input file
    pub separator: u8,

    /// Directory the cleaned CSV is written to
    pub output_dir: PathBuf,

    /// Output file name, without the `.csv` extension
    pub output_filename: String,

    /// Region code the output is restricted to (exact, case-sensitive match)
    pub region: String,

    /// Column whose null rows are dropped before filtering
    pub null_check_column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            separator: DEFAULT_SEPARATOR,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            null_check_column: DEFAULT_NULL_CHECK_COLUMN.to_string(),
        }
    }
}

impl Config {
    /// Create configuration with a custom input path
    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Create configuration with a custom field separator
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Create configuration with a custom output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Create configuration with a custom output file name
    pub fn with_output_filename(mut self, output_filename: impl Into<String>) -> Self {
        self.output_filename = output_filename.into();
        self
    }

    /// Create configuration with a custom region filter
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Create configuration with a custom null-check column
    pub fn with_null_check_column(mut self, column: impl Into<String>) -> Self {
        self.null_check_column = column.into();
        self
    }

    /// Check the configuration for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.region.is_empty() {
            return Err(PipelineError::configuration("region must not be empty"));
        }
        if self.output_filename.is_empty() {
            return Err(PipelineError::configuration(
                "output_filename must not be empty",
            ));
        }
        if self.null_check_column.is_empty() {
            return Err(PipelineError::configuration(
                "null_check_column must not be empty",
            ));
        }
        Ok(())
    }
}
