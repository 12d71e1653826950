//! Tests for column-to-date mapping and carry-forward

use chrono::NaiveDate;

use super::super::date_columns::DateColumnMap;
use super::{dec_2024, grid};

fn dec(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
}

#[test]
fn test_carry_forward_between_anchors() {
    // "Day 01" at column 2 and "Day 03" at column 5: columns 2-4 resolve to
    // the 1st, columns >= 5 to the 3rd.
    let grid = grid(&[&["Day", "", "Day 01", "x", "", "Day 03", "y"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &dec_2024());

    assert_eq!(map.date_for_column(0), None);
    assert_eq!(map.date_for_column(1), None);
    assert_eq!(map.date_for_column(2), Some(dec(1)));
    assert_eq!(map.date_for_column(3), Some(dec(1)));
    assert_eq!(map.date_for_column(4), Some(dec(1)));
    assert_eq!(map.date_for_column(5), Some(dec(3)));
    assert_eq!(map.date_for_column(6), Some(dec(3)));
    assert_eq!(map.date_for_column(99), Some(dec(3)));
}

#[test]
fn test_empty_cells_excluded_from_map() {
    let grid = grid(&[&["Day 01", "   ", "x"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &dec_2024());

    // Column 0 anchors, column 1 is whitespace-only, column 2 inherits.
    assert_eq!(map.len(), 2);
    assert_eq!(map.date_for_column(1), Some(dec(1)));
}

#[test]
fn test_day_cell_without_number_keeps_carried_date() {
    let grid = grid(&[&["Day 02", "Day next", "x"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &dec_2024());

    assert_eq!(map.date_for_column(1), Some(dec(2)));
    assert_eq!(map.date_for_column(2), Some(dec(2)));
}

#[test]
fn test_malformed_date_clears_carried_value() {
    let grid = grid(&[&["Day 01", "a", "Day 99", "b"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &dec_2024());

    // Columns at and after the unbuildable "Day 99" are not recorded; lookup
    // still inherits the nearest anchor to the left.
    assert_eq!(map.len(), 2);
    assert_eq!(map.date_for_column(2), Some(dec(1)));
    assert_eq!(map.date_for_column(3), Some(dec(1)));
}

#[test]
fn test_overflowing_day_token_clears_carried_value() {
    // A day number too large for u32 is still a found token; it fails the
    // date construction and clears the carried date like "Day 99" does.
    let grid = grid(&[&["Day 01", "Day 99999999999", "x"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &dec_2024());

    assert_eq!(map.len(), 1);
    assert_eq!(map.date_for_column(0), Some(dec(1)));
}

#[test]
fn test_anchor_after_clear_resumes_mapping() {
    let grid = grid(&[&["Day 01", "Day 99", "Day 05", "x"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &dec_2024());

    assert_eq!(map.date_for_column(2), Some(dec(5)));
    assert_eq!(map.date_for_column(3), Some(dec(5)));
}

#[test]
fn test_unknown_month_yields_empty_map() {
    let config = dec_2024().with_month("XYZ");
    let grid = grid(&[&["Day 01", "x"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &config);

    assert!(map.is_empty());
    assert_eq!(map.date_for_column(5), None);
}

#[test]
fn test_zero_padded_day_token() {
    let grid = grid(&[&["Day 07"]]);
    let map = DateColumnMap::from_header_row(&grid, 0, &dec_2024());

    assert_eq!(map.date_for_column(0), Some(dec(7)));
}
