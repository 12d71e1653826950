//! Test utilities for schedule parser testing
//!
//! This module provides common helpers for building grids and
//! configurations used across the component test modules.

use crate::ParseConfig;

use super::grid::Grid;

// Test modules
mod date_column_tests;
mod formatter_tests;

/// Build a grid from string-slice rows
pub fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

/// Fixed configuration used by most tests: December 2024
pub fn dec_2024() -> ParseConfig {
    ParseConfig::default().with_month("DEC").with_year(2024)
}
