//! Loader stage: raw delimited file to in-memory table.

use crate::error::{PipelineError, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Read the raw wide-format file into a DataFrame.
///
/// Schema inference is disabled so every column comes back as a string:
/// cells mix numbers with annotation flags and missing markers, and the
/// cleaning stage decides what is numeric.
pub fn load_data(path: &Path, separator: u8) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        "loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAW_KEY_COLUMN;
    use polars::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_data(Path::new("does/not/exist.tsv"), b'\t');

        assert!(matches!(
            result,
            Err(PipelineError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_load_tab_separated_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raw.tsv");
        fs::write(
            &path,
            "unit,sex,age,geo\\time\t2018 \t2019 \nTOT,F,Y1,PT\t80.1 b\t81.0\n",
        )
        .unwrap();

        let df = load_data(&path, b'\t').unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 3);
        assert_eq!(df.get_column_names()[0].as_str(), RAW_KEY_COLUMN);
    }

    #[test]
    fn test_all_columns_read_as_strings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raw.tsv");
        // The 2019 column is fully numeric and would otherwise be inferred
        // as a float column.
        fs::write(
            &path,
            "unit,sex,age,geo\\time\t2019 \nTOT,F,Y1,PT\t81.0\nTOT,M,Y1,PT\t75.3\n",
        )
        .unwrap();

        let df = load_data(&path, b'\t').unwrap();

        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
    }
}
