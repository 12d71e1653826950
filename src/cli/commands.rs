//! Command implementation for the flight schedule parser CLI
//!
//! This module contains the main execution logic: logging setup, argument
//! validation, the parse itself, and result reporting.

use std::fs;
use std::io::Write;
use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use crate::app::services::schedule_parser::{ParseStats, ScheduleParser};
use crate::cli::args::Args;
use crate::{Error, Result};

/// Main command runner
///
/// Orchestrates the whole workflow: set up logging, validate arguments,
/// parse the schedule, and write the formatted flight list to the requested
/// destination. Each run builds a fresh parser; nothing is shared between
/// invocations.
pub fn run(args: Args) -> Result<ParseStats> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("starting schedule parse");
    debug!("command line arguments: {:?}", args);

    args.validate()?;

    let config = args.parse_config();
    info!("schedule month: {} {}", config.month, config.year);

    let parser = ScheduleParser::new(config);
    let result = parser.parse_file(&args.input)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &result.output)
                .map_err(|e| Error::io(format!("failed to write '{}'", path.display()), e))?;
            info!("flight list written to {}", path.display());
        }
        None => {
            if !result.output.is_empty() {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", result.output)
                    .map_err(|e| Error::io("failed to write to stdout", e))?;
            }
        }
    }

    if !args.quiet {
        report_summary(&result.stats, start_time.elapsed());
    }

    Ok(result.stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flightsched={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("logging initialized at level: {}", log_level);
}

/// Print a human-readable summary of the parse to stderr
fn report_summary(stats: &ParseStats, elapsed: std::time::Duration) {
    eprintln!();
    eprintln!(
        "{} {} unique flight entries in {:.2?}",
        "Extracted".green().bold(),
        stats.unique_entries(),
        elapsed
    );
    eprintln!(
        "  {} rows, {} triplets scanned, {} skipped",
        stats.rows_loaded, stats.triplets_scanned, stats.triplets_skipped
    );

    if stats.duplicates_removed > 0 {
        eprintln!(
            "  {} duplicate entries removed",
            stats.duplicates_removed.to_string().yellow()
        );
    }

    if stats.columns_skipped > 0 {
        eprintln!(
            "  {} populated columns had no resolvable date",
            stats.columns_skipped.to_string().yellow()
        );
    }
}
