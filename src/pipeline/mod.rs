//! The cleaning pipeline.
//!
//! Five stages composed in a straight line: load, reshape, clean fields,
//! drop/filter, write. Every stage is a pure function from table to table;
//! [`clean_data`] composes the in-memory stages and [`run`] wraps them with
//! file I/O around a [`Config`].

pub mod clean;
pub mod filter;
pub mod loader;
pub mod reshape;
pub mod writer;

use crate::config::Config;
use crate::error::Result;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Statistics for a completed cleaning run
#[derive(Debug, Clone)]
pub struct CleanStats {
    /// Rows in the raw wide-format table
    pub rows_in: usize,

    /// Year columns unpivoted from the raw table
    pub year_columns: usize,

    /// Observations after reshaping (rows_in x year_columns)
    pub rows_reshaped: usize,

    /// Observations written to the output file
    pub rows_written: usize,

    /// Path of the written CSV
    pub output_path: PathBuf,

    /// Wall-clock duration of the run
    pub processing_time: Duration,
}

/// Clean a raw wide-format table: reshape, normalize fields, drop missing
/// observations, and restrict to one region.
pub fn clean_data(raw: &DataFrame, region: &str, null_check_column: &str) -> Result<DataFrame> {
    let long = reshape::unpivot_years(raw)?;
    let split = reshape::split_composite_key(&long)?;
    let cleaned = clean::clean_fields(&split)?;
    let kept = filter::drop_null_values(&cleaned, null_check_column)?;
    filter::filter_region(&kept, region)
}

/// Run the full pipeline described by the configuration.
///
/// Loads the raw file, cleans it, writes the result, and reports run
/// statistics. Terminates on the first error; nothing is written in that
/// case.
pub fn run(config: &Config) -> Result<CleanStats> {
    let start_time = Instant::now();
    config.validate()?;

    info!("loading raw dataset from {}", config.input_path.display());
    let raw = loader::load_data(&config.input_path, config.separator)?;
    let rows_in = raw.height();
    let year_columns = raw.width().saturating_sub(1);

    info!(
        "cleaning {} rows across {} year columns for region '{}'",
        rows_in, year_columns, config.region
    );
    let mut cleaned = clean_data(&raw, &config.region, &config.null_check_column)?;
    let rows_written = cleaned.height();

    let output_path = writer::save_data(&mut cleaned, &config.output_filename, &config.output_dir)?;
    info!("wrote {} observations to {}", rows_written, output_path.display());

    Ok(CleanStats {
        rows_in,
        year_columns,
        rows_reshaped: rows_in * year_columns,
        rows_written,
        output_path,
        processing_time: start_time.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{RAW_KEY_COLUMN, VALUE_COLUMN};
    use polars::prelude::*;

    fn raw_fixture() -> DataFrame {
        df!(
            RAW_KEY_COLUMN => ["TOT,F,Y1,PT", "TOT,F,Y1,FR"],
            "2018 " => ["80.1 b", ": "],
            "2019 " => ["81.0", "82.3"],
        )
        .unwrap()
    }

    #[test]
    fn test_clean_data_end_to_end_scenario() {
        let cleaned = clean_data(&raw_fixture(), "PT", VALUE_COLUMN).unwrap();

        assert_eq!(cleaned.height(), 2);

        let years = cleaned.column("year").unwrap();
        let years = years.i32().unwrap();
        assert_eq!(years.get(0), Some(2018));
        assert_eq!(years.get(1), Some(2019));

        let values = cleaned.column("value").unwrap();
        let values = values.f64().unwrap();
        assert_eq!(values.get(0), Some(80.1));
        assert_eq!(values.get(1), Some(81.0));
    }

    #[test]
    fn test_clean_data_drops_missing_marker_rows() {
        // FR has ":" for 2018, so only the 2019 observation survives.
        let cleaned = clean_data(&raw_fixture(), "FR", VALUE_COLUMN).unwrap();

        assert_eq!(cleaned.height(), 1);
        let values = cleaned.column("value").unwrap();
        assert_eq!(values.f64().unwrap().get(0), Some(82.3));
    }

    #[test]
    fn test_clean_data_unmatched_region_is_empty() {
        let cleaned = clean_data(&raw_fixture(), "ES", VALUE_COLUMN).unwrap();

        assert_eq!(cleaned.height(), 0);
    }
}
