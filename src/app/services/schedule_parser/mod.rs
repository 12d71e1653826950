//! Schedule parser for monthly airline flight-schedule CSV exports
//!
//! This module provides the extraction engine that turns a semi-structured
//! schedule grid into a normalized, deduplicated, chronologically sorted
//! flight list.
//!
//! ## Architecture
//!
//! The parser is organized into logical components, applied in a strictly
//! linear pipeline:
//! - [`grid`] - CSV loading into a bounds-checked in-memory grid
//! - [`locate`] - Day-header row and flight-data block location
//! - [`date_columns`] - Column-to-date mapping with carry-forward
//! - [`extractor`] - Row-triplet walking and flight entry extraction
//! - [`formatter`] - Deduplication and chronological sorting
//! - [`stats`] - Parsing statistics and result structures
//! - [`parser`] - Pipeline orchestration
//!
//! ## Usage
//!
//! ```rust
//! use flightsched::{ParseConfig, ScheduleParser};
//!
//! # fn example() -> flightsched::Result<()> {
//! let config = ParseConfig::default().with_month("DEC").with_year(2024);
//! let parser = ScheduleParser::new(config);
//! let result = parser.parse_file(std::path::Path::new("schedule.csv"))?;
//!
//! println!("{}", result.output);
//! # Ok(())
//! # }
//! ```

pub mod date_columns;
pub mod extractor;
pub mod formatter;
pub mod grid;
pub mod locate;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use date_columns::DateColumnMap;
pub use grid::Grid;
pub use parser::ScheduleParser;
pub use stats::{ParseResult, ParseStats};
