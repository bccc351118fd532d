//! Command-line argument definitions for the life expectancy cleaner.

use crate::constants::DEFAULT_REGION;
use clap::Parser;

/// CLI arguments for the life expectancy cleaner
///
/// Cleans the raw Eurostat life expectancy dataset from wide TSV into a
/// long-format CSV restricted to one region.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "life-expectancy",
    version,
    about = "Clean Eurostat life expectancy data from wide TSV to long-format CSV"
)]
pub struct Args {
    /// Region code used to filter the cleaned observations
    ///
    /// Exact, case-sensitive match against the fourth field of the
    /// composite key column (e.g. "PT", "FR", "DE_TOT").
    #[arg(
        long = "region",
        value_name = "CODE",
        default_value = DEFAULT_REGION,
        help = "Region code to filter the data"
    )]
    pub region: String,
}
