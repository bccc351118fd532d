//! Application constants for the life expectancy cleaner
//!
//! Column names, default configuration values, and the decimal
//! extraction pattern used throughout the pipeline.

// =============================================================================
// Column Names
// =============================================================================

/// Composite key column header as it appears in the raw Eurostat TSV
pub const RAW_KEY_COLUMN: &str = r"unit,sex,age,geo\time";

/// Number of comma-separated fields encoded in the composite key
pub const KEY_FIELD_COUNT: usize = 4;

pub const UNIT_COLUMN: &str = "unit";
pub const SEX_COLUMN: &str = "sex";
pub const AGE_COLUMN: &str = "age";
pub const REGION_COLUMN: &str = "region";
pub const YEAR_COLUMN: &str = "year";
pub const VALUE_COLUMN: &str = "value";

/// Column order of the cleaned long-format table
pub const OUTPUT_COLUMNS: [&str; 6] = [
    UNIT_COLUMN,
    SEX_COLUMN,
    AGE_COLUMN,
    REGION_COLUMN,
    YEAR_COLUMN,
    VALUE_COLUMN,
];

// =============================================================================
// Defaults
// =============================================================================

/// Field separator of the raw Eurostat download
pub const DEFAULT_SEPARATOR: u8 = b'\t';

/// Region code the output is filtered to if none is given
pub const DEFAULT_REGION: &str = "PT";

/// Raw dataset location relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "data/eu_life_expectancy_raw.tsv";

/// Directory the cleaned CSV is written to
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Output file name, without the `.csv` extension
pub const DEFAULT_OUTPUT_FILENAME: &str = "pt_life_expectancy";

/// Column checked by the null-dropping stage
pub const DEFAULT_NULL_CHECK_COLUMN: &str = VALUE_COLUMN;

// =============================================================================
// Value Extraction
// =============================================================================

/// First run of digits, optionally followed by a decimal point and more
/// digits. Anything else in the cell (flags like "b", "e", "p" or the ":"
/// missing marker) is ignored.
pub const DECIMAL_VALUE_PATTERN: &str = r"(\d+(?:\.\d+)?)";
