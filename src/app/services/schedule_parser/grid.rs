//! In-memory schedule grid and CSV loading
//!
//! A schedule export is a grid of text cells, not a regular table: rows may
//! be ragged and cells that look numeric are still text. The grid therefore
//! keeps every cell as a raw string and makes out-of-range access a defined
//! condition (empty string) instead of an incidental crash.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{Error, Result};

/// Ordered rows of ordered string cells with bounds-checked access
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Build a grid directly from rows of cells
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Load a grid from a CSV file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open '{}'", path.display()), e))?;

        Self::from_reader(file).map_err(|e| match e {
            Error::Load {
                message, source, ..
            } => Error::load(path.display().to_string(), message, source),
            other => other,
        })
    }

    /// Load a grid from any CSV byte stream
    ///
    /// No row is a header, every field stays raw text, and empty fields are
    /// kept as empty strings. Malformed CSV structure (e.g. an unterminated
    /// quote) is fatal.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        // The csv reader recovers from an unterminated quote by consuming
        // the rest of the input as one field; the grid treats that as
        // malformed structure instead.
        if ends_inside_quoted_field(&content) {
            return Err(Error::load(
                "unknown",
                "unterminated quoted field in CSV input",
                None,
            ));
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(Self::from_rows(rows))
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    ///
    /// Column indices are always iterated up to this width so that ragged
    /// rows behave like a rectangular frame padded with empty cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Read a cell, returning the empty string for any out-of-range access
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Whether the raw CSV text ends inside an open quoted field
///
/// A quote only opens a quoted field at the start of a field; doubled
/// quotes inside one are escapes, and a quote in the middle of an unquoted
/// field is literal text.
fn ends_inside_quoted_field(content: &str) -> bool {
    let mut chars = content.chars().peekable();
    let mut in_quotes = false;
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    in_quotes = false;
                    at_field_start = false;
                }
            }
        } else {
            match c {
                '"' if at_field_start => in_quotes = true,
                ',' | '\n' | '\r' => at_field_start = true,
                _ => at_field_start = false,
            }
        }
    }

    in_quotes
}
