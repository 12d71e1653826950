//! Parse configuration for schedule extraction.
//!
//! The schedule export itself carries only day-of-month numbers, so the
//! month abbreviation and the reference year are supplied by the caller,
//! never derived from the file.

use crate::constants::{DEFAULT_MONTH_ABBR, month_number};
use crate::{Error, Result};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Configuration for one schedule parse
///
/// Each parse invocation owns its own configuration; there is no shared
/// global state between parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Three-letter month abbreviation the schedule covers (e.g. "DEC")
    pub month: String,

    /// Reference year used to anchor all dates in the schedule
    pub year: i32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            month: DEFAULT_MONTH_ABBR.to_string(),
            // Wall-clock year, as the source behavior defines it. A December
            // schedule parsed in January lands in the wrong year; callers
            // that care use with_year.
            year: Local::now().year(),
        }
    }
}

impl ParseConfig {
    /// Create configuration with a custom month abbreviation
    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    /// Create configuration with a custom reference year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Resolve the configured month abbreviation to a 1-based month number
    ///
    /// Returns `None` for unknown abbreviations; the date-column mapper
    /// treats that as a failed date construction rather than an error.
    pub fn month_number(&self) -> Option<u32> {
        month_number(&self.month)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.month_number().is_none() {
            return Err(Error::configuration(format!(
                "unknown month abbreviation '{}' (expected JAN..DEC)",
                self.month
            )));
        }

        Ok(())
    }
}
