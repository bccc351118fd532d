//! Reshaper stage: wide table to long format.
//!
//! Two steps: unpivot every year column into (`year`, `value`) pairs, then
//! split the composite key column into its four positional fields.

use crate::constants::{
    AGE_COLUMN, KEY_FIELD_COUNT, RAW_KEY_COLUMN, REGION_COLUMN, SEX_COLUMN, UNIT_COLUMN,
    VALUE_COLUMN, YEAR_COLUMN,
};
use crate::error::{PipelineError, Result};
use polars::prelude::*;
use tracing::debug;

/// Unpivot every non-key column into long format.
///
/// Each original (row, year-column) pair becomes one output row with the
/// column header in `year` and the cell content in `value`. Headers keep
/// whatever whitespace the source carries; the cleaning stage normalizes
/// them.
pub fn unpivot_years(df: &DataFrame) -> Result<DataFrame> {
    let year_columns: Vec<PlSmallStr> = df
        .get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != RAW_KEY_COLUMN)
        .cloned()
        .collect();

    debug!("unpivoting {} year columns", year_columns.len());

    let mut long = df.unpivot(year_columns, vec![PlSmallStr::from_static(RAW_KEY_COLUMN)])?;
    long.rename("variable", YEAR_COLUMN.into())?;

    Ok(long)
}

/// Split the composite key column into `unit`, `sex`, `age`, `region`.
///
/// The four fields are positional: the key encodes them in that fixed
/// order, independent of what the header calls them. A key that does not
/// split into exactly four parts is a defect in the upstream data and
/// surfaces as a structured error naming the row.
pub fn split_composite_key(long: &DataFrame) -> Result<DataFrame> {
    let keys = long.column(RAW_KEY_COLUMN)?.str()?;

    let mut units = Vec::with_capacity(keys.len());
    let mut sexes = Vec::with_capacity(keys.len());
    let mut ages = Vec::with_capacity(keys.len());
    let mut regions = Vec::with_capacity(keys.len());

    for (row, key) in keys.into_iter().enumerate() {
        let key = key.unwrap_or("");
        let mut parts = key.split(',');

        match (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) {
            (Some(unit), Some(sex), Some(age), Some(region), None) => {
                units.push(unit);
                sexes.push(sex);
                ages.push(age);
                regions.push(region);
            }
            _ => {
                return Err(PipelineError::MalformedCompositeKey {
                    row,
                    expected: KEY_FIELD_COUNT,
                    found: key.split(',').count(),
                    key: key.to_string(),
                });
            }
        }
    }

    let columns = vec![
        Column::new(UNIT_COLUMN.into(), units),
        Column::new(SEX_COLUMN.into(), sexes),
        Column::new(AGE_COLUMN.into(), ages),
        Column::new(REGION_COLUMN.into(), regions),
        long.column(YEAR_COLUMN)?.clone(),
        long.column(VALUE_COLUMN)?.clone(),
    ];

    Ok(DataFrame::new(columns)?)
}
