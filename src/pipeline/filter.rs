//! Filter/dropper stage: two independent, composable row filters.

use crate::constants::REGION_COLUMN;
use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Drop every row whose designated column is null.
///
/// Row order is preserved.
pub fn drop_null_values(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let mask = df.column(column)?.is_not_null();
    let kept = df.filter(&mask)?;

    debug!(
        "dropped {} rows with null '{}'",
        df.height() - kept.height(),
        column
    );

    Ok(kept)
}

/// Retain only rows whose `region` equals the given code.
///
/// Exact string match, case-sensitive.
pub fn filter_region(df: &DataFrame, region: &str) -> Result<DataFrame> {
    let mask = df.column(REGION_COLUMN)?.str()?.equal(region);
    let kept = df.filter(&mask)?;

    debug!("{} of {} rows in region '{}'", kept.height(), df.height(), region);

    Ok(kept)
}
