//! Parsing statistics and result structures for schedule extraction
//!
//! This module provides types for tracking extraction coverage and
//! organizing the parsed output for the caller.

/// Parsing result with the formatted output and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Final deduplicated, chronologically sorted text blob
    pub output: String,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of rows loaded from the CSV grid
    pub rows_loaded: usize,

    /// Number of complete row triplets visited in the flight-data block
    pub triplets_scanned: usize,

    /// Triplets skipped because the flight-number field was empty
    pub triplets_skipped: usize,

    /// Populated columns skipped because no date could be resolved
    pub columns_skipped: usize,

    /// Number of flight entries extracted before deduplication
    pub entries_extracted: usize,

    /// Entries collapsed away because they rendered identically
    pub duplicates_removed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_loaded: 0,
            triplets_scanned: 0,
            triplets_skipped: 0,
            columns_skipped: 0,
            entries_extracted: 0,
            duplicates_removed: 0,
        }
    }

    /// Number of entries that survived deduplication
    pub fn unique_entries(&self) -> usize {
        self.entries_extracted.saturating_sub(self.duplicates_removed)
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
