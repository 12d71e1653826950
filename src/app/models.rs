//! Data models for flight schedule extraction
//!
//! This module contains the core data structure representing one extracted
//! flight occurrence and its canonical two-line text rendering.

use crate::constants::{SERVICE_CODE_PREFIX, month_abbreviation};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One flight occurrence extracted from a schedule grid
///
/// Entries are created by the extractor and consumed immediately by the
/// output formatter; they are never mutated after creation. An entry is only
/// materialized when flight number, route, and time text are all non-empty
/// after trimming and a calendar date could be resolved for its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEntry {
    /// Flight number taken from the leading field of the flight row
    pub flight_number: String,

    /// Derived service code: the fixed prefix plus the raw cell value
    pub service_code: String,

    /// Route text exactly as found in the route row, trimmed
    pub route: String,

    /// Time-of-day text with next-day markers and spaces stripped
    pub time: String,

    /// Whether the time cell carried a next-day marker
    pub next_day: bool,

    /// Effective calendar date (already advanced when next_day is set)
    pub date: NaiveDate,
}

impl FlightEntry {
    /// Derive a service code from a raw schedule cell value
    pub fn service_code_for(raw_cell: &str) -> String {
        format!("{}{}", SERVICE_CODE_PREFIX, raw_cell.trim())
    }

    /// Render the canonical two-line representation of this entry
    ///
    /// The date line is the two-digit day plus the upper-case month
    /// abbreviation ("01DEC"). The detail line keeps the double space
    /// between flight number and service code exactly as the source
    /// format does.
    pub fn render(&self) -> String {
        let date_line = format!(
            "{:02}{}",
            self.date.day(),
            month_abbreviation(self.date.month())
        );

        format!(
            "{}\n{}  {} {} {}",
            date_line, self.flight_number, self.service_code, self.route, self.time
        )
    }
}
