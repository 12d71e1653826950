//! Command-line argument definitions for the flight schedule parser
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::DEFAULT_MONTH_ABBR;
use crate::{Error, ParseConfig, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the flight schedule parser
///
/// Converts a monthly airline flight-schedule CSV export into a normalized,
/// deduplicated, chronologically sorted flight list.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flightsched",
    version,
    about = "Convert a monthly flight-schedule CSV export into a sorted flight list",
    long_about = "Parses a semi-structured monthly airline flight-schedule CSV export \
                  (a grid of text cells, not a regular table) and produces a normalized, \
                  deduplicated, chronologically sorted list of flight entries: one date \
                  line and one detail line per flight occurrence."
)]
pub struct Args {
    /// Path to the schedule CSV export
    #[arg(value_name = "SCHEDULE_CSV")]
    pub input: PathBuf,

    /// Three-letter month abbreviation the schedule covers
    ///
    /// The export carries only day-of-month numbers, so the month is
    /// supplied here, never derived from the file.
    #[arg(
        short = 'm',
        long = "month",
        value_name = "ABBR",
        default_value = DEFAULT_MONTH_ABBR,
        help = "Month abbreviation the schedule covers (JAN..DEC)"
    )]
    pub month: String,

    /// Reference year for all dates in the schedule
    ///
    /// Defaults to the current calendar year. There is no rollover logic:
    /// parsing a December schedule in January needs an explicit year.
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        help = "Reference year for schedule dates (defaults to the current year)"
    )]
    pub year: Option<i32>,

    /// Output file for the formatted flight list
    ///
    /// If not specified, the list is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the flight list (stdout if omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "input file does not exist: {}",
                self.input.display()
            )));
        }

        if self.input.is_dir() {
            return Err(Error::configuration(format!(
                "input path is a directory, not a file: {}",
                self.input.display()
            )));
        }

        self.parse_config().validate()
    }

    /// Build the parse configuration from the arguments
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::default()
            .with_month(self.month.trim().to_ascii_uppercase())
            .with_year(self.year.unwrap_or_else(|| Local::now().year()))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
