//! Output formatting: deduplication and chronological sorting
//!
//! The unit of deduplication is the rendered two-line string, not the
//! structural entry; two entries that render identically collapse to one.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::stats::ParseStats;
use crate::ParseConfig;
use crate::app::models::FlightEntry;
use crate::constants::{DATE_LINE_LEN, month_number};

/// Render, deduplicate, and sort entries into the final text blob
///
/// Entries sort ascending by the date re-read from the rendered date line
/// (anchored to the reference year), with the detail line as a lexical
/// tiebreak. A date line that fails to re-parse sorts first rather than
/// being dropped. Returns the empty string when nothing survives.
pub fn format_entries(
    entries: &[FlightEntry],
    config: &ParseConfig,
    stats: &mut ParseStats,
) -> String {
    let unique: BTreeSet<String> = entries.iter().map(FlightEntry::render).collect();
    stats.entries_extracted = entries.len();
    stats.duplicates_removed = entries.len() - unique.len();

    let mut lines: Vec<String> = unique.into_iter().collect();
    lines.sort_by_cached_key(|line| sort_key(line, config.year));

    lines.join("\n")
}

/// Composite sort key for one rendered entry
///
/// Re-parses the first five characters of the date line as day + month
/// abbreviation against the reference year; unparseable date lines map to
/// the earliest representable date.
fn sort_key(rendered: &str, year: i32) -> (NaiveDate, String) {
    let (date_line, detail_line) = rendered.split_once('\n').unwrap_or((rendered, ""));

    let date = parse_date_line(date_line, year).unwrap_or(NaiveDate::MIN);
    (date, detail_line.to_string())
}

fn parse_date_line(date_line: &str, year: i32) -> Option<NaiveDate> {
    let date_part = date_line.get(..DATE_LINE_LEN)?;
    let day: u32 = date_part.get(..2)?.parse().ok()?;
    let month = month_number(date_part.get(2..)?)?;

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_line() {
        assert_eq!(
            parse_date_line("01DEC", 2024),
            NaiveDate::from_ymd_opt(2024, 12, 1)
        );
        assert_eq!(
            parse_date_line("31JAN", 2024),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );

        assert_eq!(parse_date_line("XXDEC", 2024), None);
        assert_eq!(parse_date_line("01XYZ", 2024), None);
        assert_eq!(parse_date_line("01", 2024), None);
        assert_eq!(parse_date_line("99DEC", 2024), None);
    }

    #[test]
    fn test_unparseable_date_sorts_first() {
        let (date, _) = sort_key("garbage\n101  MFXA LHR-CDG 10:00", 2024);
        assert_eq!(date, NaiveDate::MIN);
    }
}
