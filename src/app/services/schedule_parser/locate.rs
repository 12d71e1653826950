//! Header and data-block location within a schedule grid
//!
//! The schedule export has no section markers; both the date-header row and
//! the first flight row are found heuristically from the first column.

use tracing::debug;

use super::grid::Grid;
use crate::constants::{DATE_HEADER_KEYWORD, HEADER_SKIP_ROWS};
use crate::{Error, Result};

/// Find the row that introduces the date header
///
/// Scans top to bottom for the first row whose first column, case-folded,
/// contains the header keyword. Other columns are never considered.
pub fn find_date_header_row(grid: &Grid) -> Result<usize> {
    for row in 0..grid.row_count() {
        if grid.cell(row, 0).to_lowercase().contains(DATE_HEADER_KEYWORD) {
            debug!("date-header row located at index {}", row);
            return Ok(row);
        }
    }

    Err(Error::header_not_found(grid.row_count()))
}

/// Find the first row where flight records begin
///
/// Scanning starts two rows below the header row (the header row plus one
/// day-of-week sub-header row are always skipped). Blank separator rows are
/// skipped, as are rows whose first column is a bare integer; those numeric
/// day labels still belong to the header region.
pub fn find_data_start_row(grid: &Grid, header_row: usize) -> Result<usize> {
    let search_start = header_row + HEADER_SKIP_ROWS;

    for row in search_start..grid.row_count() {
        let first_col = grid.cell(row, 0).trim();

        if first_col.is_empty() {
            continue;
        }

        if first_col.parse::<i64>().is_ok() {
            continue;
        }

        debug!("flight-data block starts at row {}", row);
        return Ok(row);
    }

    Err(Error::data_block_not_found(search_start))
}
