//! Flight entry extraction from row triplets
//!
//! Below the data-block start, the grid repeats a fixed three-row pattern
//! per flight: the flight-number/service-code row, the route row, and the
//! time row. Each populated date column of a triplet yields one entry.

use tracing::debug;

use super::date_columns::DateColumnMap;
use super::grid::Grid;
use super::stats::ParseStats;
use crate::app::models::FlightEntry;
use crate::constants::{NEXT_DAY_MARKER, ROWS_PER_FLIGHT};

/// Walk the flight-data block and extract all flight entries
///
/// Triplets are consumed consecutively and non-overlapping; a trailing
/// partial triplet is discarded silently. Every anomaly inside a triplet is
/// a per-column or per-triplet skip, never an error.
pub fn extract_flights(
    grid: &Grid,
    data_start: usize,
    dates: &DateColumnMap,
    stats: &mut ParseStats,
) -> Vec<FlightEntry> {
    let mut entries = Vec::new();
    let triplet_count = grid.row_count().saturating_sub(data_start) / ROWS_PER_FLIGHT;

    for triplet in 0..triplet_count {
        let flight_row = data_start + triplet * ROWS_PER_FLIGHT;
        let route_row = flight_row + 1;
        let time_row = flight_row + 2;
        stats.triplets_scanned += 1;

        // Flight number is the leading field up to the first comma.
        let flight_number = grid
            .cell(flight_row, 0)
            .split(',')
            .next()
            .unwrap_or("")
            .trim();

        if flight_number.is_empty() {
            debug!("skipping triplet at row {}: empty flight number", flight_row);
            stats.triplets_skipped += 1;
            continue;
        }

        for col in 1..grid.width() {
            let service_code = FlightEntry::service_code_for(grid.cell(flight_row, col));
            let route = grid.cell(route_row, col).trim();
            let time_text = grid.cell(time_row, col).trim();

            if route.is_empty() || time_text.is_empty() {
                continue;
            }

            let Some(anchored_date) = dates.date_for_column(col) else {
                stats.columns_skipped += 1;
                continue;
            };

            let next_day = time_text.contains(NEXT_DAY_MARKER);
            let time = time_text
                .chars()
                .filter(|c| *c != NEXT_DAY_MARKER && *c != ' ')
                .collect::<String>();

            let effective_date = if next_day {
                match anchored_date.succ_opt() {
                    Some(date) => date,
                    None => {
                        stats.columns_skipped += 1;
                        continue;
                    }
                }
            } else {
                anchored_date
            };

            entries.push(FlightEntry {
                flight_number: flight_number.to_string(),
                service_code,
                route: route.to_string(),
                time,
                next_day,
                date: effective_date,
            });
            stats.entries_extracted += 1;
        }
    }

    entries
}
