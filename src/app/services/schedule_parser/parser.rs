//! Core schedule parser orchestration
//!
//! Wires the pipeline stages together in their fixed order: Load →
//! LocateHeader → LocateDataBlock → MapDateColumns → ExtractFlights →
//! Format. Each stage consumes the previous stage's output and none is
//! retried; a failure in the load or locate stages aborts the whole parse.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use super::date_columns::DateColumnMap;
use super::extractor::extract_flights;
use super::formatter::format_entries;
use super::grid::Grid;
use super::locate::{find_data_start_row, find_date_header_row};
use super::stats::{ParseResult, ParseStats};
use crate::{ParseConfig, Result};

/// Parser for monthly flight-schedule CSV exports
///
/// One parser holds only configuration; every parse call builds its own
/// grid and derived maps, so concurrent callers each construct an
/// independent parse with no shared state.
#[derive(Debug, Clone)]
pub struct ScheduleParser {
    config: ParseConfig,
}

impl ScheduleParser {
    /// Create a new parser with the given configuration
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Access the parser configuration
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse a schedule CSV file and return the formatted flight list
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("parsing schedule file: {}", file_path.display());
        let grid = Grid::from_path(file_path)?;
        self.parse_grid(grid)
    }

    /// Parse a schedule from any CSV byte stream
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ParseResult> {
        let grid = Grid::from_reader(reader)?;
        self.parse_grid(grid)
    }

    fn parse_grid(&self, grid: Grid) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        stats.rows_loaded = grid.row_count();
        debug!(
            "loaded grid: {} rows, width {}",
            grid.row_count(),
            grid.width()
        );

        let header_row = find_date_header_row(&grid)?;
        let data_start = find_data_start_row(&grid, header_row)?;

        let dates = DateColumnMap::from_header_row(&grid, header_row, &self.config);
        if dates.is_empty() {
            warn!(
                "no header column resolved to a date (month='{}', year={}); output will be empty",
                self.config.month, self.config.year
            );
        }

        let entries = extract_flights(&grid, data_start, &dates, &mut stats);
        let output = format_entries(&entries, &self.config, &mut stats);

        info!(
            "extracted {} entries ({} unique) from {} triplets",
            stats.entries_extracted,
            stats.unique_entries(),
            stats.triplets_scanned
        );

        Ok(ParseResult { output, stats })
    }
}
