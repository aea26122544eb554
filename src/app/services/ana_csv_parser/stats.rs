//! Parsing statistics and result structures for station file processing

use crate::app::models::MonthlyTable;

/// Parsing result: the monthly table plus statistics for reporting
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Canonical monthly table derived from the file
    pub table: MonthlyTable,

    /// Parsing statistics for this file
    pub stats: ParseStats,
}

/// Per-file parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data records encountered after the preamble
    pub total_records: usize,

    /// Records with a usable in-window date that entered aggregation
    pub records_aggregated: usize,

    /// Records dropped for an unparseable date or an out-of-window date
    pub records_filtered: usize,

    /// Records skipped due to CSV-level read errors
    pub records_skipped: usize,

    /// Row-level error messages for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            records_aggregated: 0,
            records_filtered: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Fraction of records that entered aggregation, as a percentage
    pub fn aggregation_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_aggregated as f64 / self.total_records as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
