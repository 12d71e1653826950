//! Application constants for the flight schedule parser
//!
//! This module contains the fixed tokens, markers, and mappings used
//! throughout the schedule extraction pipeline.

// =============================================================================
// Schedule Grid Structure
// =============================================================================

/// Case-folded substring that marks the date-header row and date-bearing cells
pub const DATE_HEADER_KEYWORD: &str = "day";

/// Rows always skipped below the header row before searching for flight data
/// (the header row itself plus one day-of-week sub-header row)
pub const HEADER_SKIP_ROWS: usize = 2;

/// Number of consecutive rows describing one flight
/// (flight-number/service-code row, route row, time row)
pub const ROWS_PER_FLIGHT: usize = 3;

// =============================================================================
// Flight Entry Rendering
// =============================================================================

/// Fixed marker prepended to the raw service-code cell value
pub const SERVICE_CODE_PREFIX: &str = "MFX";

/// Character in a time cell that pushes the flight to the following day
pub const NEXT_DAY_MARKER: char = '+';

/// Default month abbreviation when none is configured
pub const DEFAULT_MONTH_ABBR: &str = "DEC";

/// Length of the date portion of a rendered date line ("01DEC")
pub const DATE_LINE_LEN: usize = 5;

/// Upper-case three-letter month abbreviations, indexed by month - 1
pub const MONTH_ABBREVIATIONS: &[&str; 12] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

// =============================================================================
// Helper Functions
// =============================================================================

/// Look up the 1-based month number for a three-letter abbreviation
///
/// Matching is case-insensitive; unknown abbreviations return `None`.
pub fn month_number(abbr: &str) -> Option<u32> {
    let upper = abbr.trim().to_ascii_uppercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == upper)
        .map(|index| (index + 1) as u32)
}

/// Get the upper-case abbreviation for a 1-based month number
pub fn month_abbreviation(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_ABBREVIATIONS[(month - 1) as usize],
        _ => "",
    }
}
