//! Column-to-date mapping with carry-forward
//!
//! The date-header row anchors a calendar date at each date-bearing cell;
//! that date applies to the cell's own column and every non-empty column to
//! its right until a later date-bearing cell overrides it, or a malformed
//! one clears it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use super::grid::Grid;
use crate::ParseConfig;
use crate::constants::DATE_HEADER_KEYWORD;

/// Mapping from header column index to anchored calendar date
///
/// Keys form a strictly increasing set; lookups resolve a column to the
/// nearest anchored date at or to its left.
#[derive(Debug, Clone, Default)]
pub struct DateColumnMap {
    columns: BTreeMap<usize, NaiveDate>,
}

impl DateColumnMap {
    /// Build the map from the header row of a schedule grid
    ///
    /// Entirely empty cells are skipped and excluded from the map. A cell
    /// containing the header keyword attempts a date construction from its
    /// first all-digit token: success anchors a new current date, failure
    /// discards any carried date. Every other non-empty cell inherits the
    /// current date when one is defined.
    pub fn from_header_row(grid: &Grid, header_row: usize, config: &ParseConfig) -> Self {
        let mut columns = BTreeMap::new();
        let mut current_date: Option<NaiveDate> = None;

        for col in 0..grid.width() {
            let cell = grid.cell(header_row, col).trim();
            if cell.is_empty() {
                continue;
            }

            if cell.to_lowercase().contains(DATE_HEADER_KEYWORD) {
                if let Some(token) = first_numeric_token(cell) {
                    // Any failure from here on clears the carried date: an
                    // overflowing token counts as a failed construction,
                    // not a missing one.
                    current_date = token.parse::<u32>().ok().and_then(|day| {
                        config
                            .month_number()
                            .and_then(|month| NaiveDate::from_ymd_opt(config.year, month, day))
                    });

                    if current_date.is_none() {
                        debug!("unbuildable date in header column {}: '{}'", col, cell);
                    }
                }
            }

            if let Some(date) = current_date {
                columns.insert(col, date);
            }
        }

        debug!("date map covers {} header columns", columns.len());
        Self { columns }
    }

    /// Resolve the date for a data column
    ///
    /// Returns the date anchored at the greatest mapped column index that is
    /// less than or equal to `col`, letting non-anchored columns inherit the
    /// nearest date to their left.
    pub fn date_for_column(&self, col: usize) -> Option<NaiveDate> {
        self.columns
            .range(..=col)
            .next_back()
            .map(|(_, date)| *date)
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column could be mapped to a date
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Extract the first whitespace-separated token made entirely of digits
fn first_numeric_token(cell: &str) -> Option<&str> {
    cell.split_whitespace()
        .find(|token| token.chars().all(|c| c.is_ascii_digit()))
}
