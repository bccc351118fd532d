//! Writer stage: serialize the cleaned table as CSV.

use crate::error::{PipelineError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the table to `<directory>/<file_name>.csv`.
///
/// The header row is included, no index column is added, and an existing
/// file at the path is overwritten. The directory must already exist.
pub fn save_data(df: &mut DataFrame, file_name: &str, directory: &Path) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(PipelineError::OutputDirNotFound {
            path: directory.to_path_buf(),
        });
    }

    let path = directory.join(format!("{file_name}.csv"));
    let mut file = File::create(&path)?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)?;

    debug!("wrote {} rows to {}", df.height(), path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn output_fixture() -> DataFrame {
        df!(
            "unit" => ["YR"],
            "sex" => ["F"],
            "age" => ["Y1"],
            "region" => ["PT"],
            "year" => [2018i32],
            "value" => [80.1f64],
        )
        .unwrap()
    }

    #[test]
    fn test_save_writes_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let mut df = output_fixture();

        let path = save_data(&mut df, "pt_life_expectancy", temp_dir.path()).unwrap();

        assert_eq!(path, temp_dir.path().join("pt_life_expectancy.csv"));
        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("unit,sex,age,region,year,value"));
        assert_eq!(lines.next(), Some("YR,F,Y1,PT,2018,80.1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pt_life_expectancy.csv");
        fs::write(&path, "stale content that is longer than the new file\n").unwrap();

        let mut df = output_fixture();
        save_data(&mut df, "pt_life_expectancy", temp_dir.path()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("unit,sex,age,region,year,value"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_save_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no_such_dir");

        let mut df = output_fixture();
        let result = save_data(&mut df, "pt_life_expectancy", &missing);

        assert!(matches!(
            result,
            Err(PipelineError::OutputDirNotFound { .. })
        ));
    }
}
