//! Flight Schedule Parser Library
//!
//! A Rust library for converting monthly airline flight-schedule CSV exports
//! into a normalized, deduplicated, chronologically sorted flight list.
//!
//! This library provides tools for:
//! - Loading semi-structured schedule grids with proper ragged-row handling
//! - Locating the date-header region and the start of the flight-data block
//! - Mapping spreadsheet columns to calendar dates with carry-forward
//! - Walking fixed-size row triplets to extract individual flight entries
//! - Rendering a canonical sorted and deduplicated text representation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod schedule_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::FlightEntry;
pub use app::services::schedule_parser::{ParseResult, ParseStats, ScheduleParser};
pub use config::ParseConfig;

/// Result type alias for schedule parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for schedule parsing operations
///
/// Only the load and locate phases can fail the whole parse; every anomaly
/// inside the extraction phase is a silent per-record skip tracked in
/// [`ParseStats`](app::services::schedule_parser::ParseStats).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Schedule grid could not be loaded from CSV
    #[error("failed to load schedule grid from '{file}': {message}")]
    Load {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// No day-header row found anywhere in the grid
    #[error("no day-header row found in {rows_scanned} rows")]
    HeaderNotFound { rows_scanned: usize },

    /// No flight-data block found below the header region
    #[error("no flight-data block found below row {search_start}")]
    DataBlockNotFound { search_start: usize },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a grid load error with context
    pub fn load(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Load {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a header-not-found error
    pub fn header_not_found(rows_scanned: usize) -> Self {
        Self::HeaderNotFound { rows_scanned }
    }

    /// Create a data-block-not-found error
    pub fn data_block_not_found(search_start: usize) -> Self {
        Self::DataBlockNotFound { search_start }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Load {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
