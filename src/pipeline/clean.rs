//! Field cleaner stage: normalize `year` and `value`.
//!
//! `year` must parse as an integer once whitespace is removed; anything
//! else aborts the run. `value` is best-effort: the first decimal-looking
//! substring is extracted, and cells without one become null so the
//! dropping stage can discard them.

use crate::constants::{DECIMAL_VALUE_PATTERN, VALUE_COLUMN, YEAR_COLUMN};
use crate::error::{PipelineError, Result};
use polars::prelude::*;
use regex::Regex;
use tracing::debug;

/// Normalize the `year` and `value` columns of the long-format table.
///
/// Returns a new table with the same rows, `year` as `i32` and `value` as
/// nullable `f64`.
pub fn clean_fields(df: &DataFrame) -> Result<DataFrame> {
    let pattern = Regex::new(DECIMAL_VALUE_PATTERN)?;

    let year_col = df.column(YEAR_COLUMN)?.str()?;
    let value_col = df.column(VALUE_COLUMN)?.str()?;

    let mut years: Vec<i32> = Vec::with_capacity(df.height());
    let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());

    for (row, (year_cell, value_cell)) in year_col.into_iter().zip(value_col).enumerate() {
        years.push(parse_year(year_cell.unwrap_or(""), row)?);
        values.push(extract_decimal_value(value_cell, &pattern));
    }

    debug!(
        "cleaned {} rows, {} values unparsable",
        df.height(),
        values.iter().filter(|v| v.is_none()).count()
    );

    let mut cleaned = df.clone();
    cleaned.with_column(Column::new(YEAR_COLUMN.into(), years))?;
    cleaned.with_column(Column::new(VALUE_COLUMN.into(), values))?;

    Ok(cleaned)
}

/// Parse a year token, tolerating surrounding and embedded whitespace.
fn parse_year(raw: &str, row: usize) -> Result<i32> {
    let token: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    token
        .parse::<i32>()
        .map_err(|_| PipelineError::MalformedYear {
            row,
            token: raw.to_string(),
        })
}

/// Extract the first decimal value from a noisy cell, if any.
///
/// `"78.5 b"` yields 78.5, `"100"` yields 100.0, and a cell with no digits
/// (such as the ":" missing marker) or a null cell yields `None`.
fn extract_decimal_value(cell: Option<&str>, pattern: &Regex) -> Option<f64> {
    cell.and_then(|s| pattern.captures(s))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
