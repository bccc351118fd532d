//! Command runner for the life expectancy cleaner CLI.

use crate::cli::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::{self, CleanStats};
use colored::Colorize;
use tracing::{debug, info};

/// Run the cleaning pipeline from parsed CLI arguments.
///
/// Sets up logging, assembles the configuration, runs the pipeline, and
/// prints a short summary on success.
pub fn run(args: Args) -> Result<CleanStats> {
    setup_logging();

    info!("starting life expectancy cleaner");
    debug!("command line arguments: {:?}", args);

    let config = Config::default().with_region(args.region);
    let stats = pipeline::run(&config)?;

    print_summary(&stats);
    Ok(stats)
}

/// Install the stderr tracing subscriber for the binary.
///
/// Defaults to info-level events from this crate; `RUST_LOG` overrides.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("life_expectancy=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a human-readable run summary to stdout.
fn print_summary(stats: &CleanStats) {
    println!("\n{}", "Cleaning complete".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • Rows in raw table: {}", stats.rows_in);
    println!("   • Year columns: {}", stats.year_columns);
    println!("   • Observations after reshape: {}", stats.rows_reshaped);
    println!("   • Observations written: {}", stats.rows_written);
    println!("   • Output file: {}", stats.output_path.display());
    println!(
        "   • Processing time: {:.2}s",
        stats.processing_time.as_secs_f64()
    );
    println!();
}
