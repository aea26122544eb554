//! Core station file parser implementation
//!
//! Handles file reading and decoding, preamble skipping, and coordination
//! between column mapping, record conversion and monthly grouping.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_raw_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{MonthKey, MonthlyRow, MonthlyTable, RawRecord};
use crate::constants;
use crate::{Error, Result};

/// Parser for ANA "Chuvas" station export files
///
/// The parser focuses on essential functionality:
/// - Tolerant row-level conversion with first-class missing values
/// - Date-window filtering before any aggregation
/// - Per-column null-safe monthly sums
/// - Per-file error containment with statistics for reporting
#[derive(Debug, Clone, Copy)]
pub struct RecordParser {
    start: NaiveDate,
    end: NaiveDate,
}

impl RecordParser {
    /// Create a parser with an explicit date window
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Create a parser with the default [2000-01-01, 2024-12-31] window
    pub fn with_default_window() -> Self {
        Self::new(
            constants::analysis_start_date(),
            constants::analysis_end_date(),
        )
    }

    /// Parse a station file into a monthly table with statistics
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing station file: {}", path.display());

        let file_label = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_string();

        let content = read_latin1(path)?;

        // The export starts with a fixed-size metadata preamble; the
        // column-header row follows it
        let data_section: String = content
            .lines()
            .skip(constants::PREAMBLE_LINE_COUNT)
            .collect::<Vec<_>>()
            .join("\n");

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(constants::FIELD_DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(data_section.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing(&file_label, "failed to read column header row", Some(e))
            })?
            .clone();

        let mapping = ColumnMapping::analyze(&headers, &file_label)?;
        let (categorized, precip_count, has_rain_days) = mapping.stats();
        debug!(
            "Column mapping for {}: {} categorized, {} precipitation, rain-day column: {}",
            file_label, categorized, precip_count, has_rain_days
        );

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(record) => {
                    // Rows with surplus fields do not conform to the
                    // header and are dropped whole. Short rows stay:
                    // their missing cells parse as absent values.
                    if record.len() > headers.len() {
                        stats.records_skipped += 1;
                        continue;
                    }

                    let raw = parse_raw_record(&record, &mapping);
                    match raw.date {
                        Some(date) if date >= self.start && date <= self.end => {
                            stats.records_aggregated += 1;
                            records.push(raw);
                        }
                        // Out-of-window and unparseable dates degrade
                        // silently; completeness is reported in bulk
                        Some(_) | None => stats.records_filtered += 1,
                    }
                }
                Err(e) => {
                    stats.records_skipped += 1;
                    stats.errors.push(format!(
                        "CSV read error at record {}: {}",
                        stats.total_records, e
                    ));
                }
            }
        }

        let table = self.build_monthly_table(&mapping, &records);

        info!(
            "Parsed {}: {} of {} records aggregated into {} monthly rows",
            file_label,
            stats.records_aggregated,
            stats.total_records,
            table.rows.len()
        );

        Ok(ParseResult { table, stats })
    }

    /// Group in-window records by (year, month) and sum each
    /// precipitation column independently.
    ///
    /// Months with no qualifying records produce no row; missing values
    /// contribute nothing to a sum but do not suppress the row.
    fn build_monthly_table(&self, mapping: &ColumnMapping, records: &[RawRecord]) -> MonthlyTable {
        let columns = mapping.precipitation_names();
        let has_rain_day_column = mapping.rain_day_index.is_some();

        let mut groups: BTreeMap<MonthKey, (Vec<f64>, f64)> = BTreeMap::new();

        for record in records {
            let Some(date) = record.date else { continue };

            let entry = groups
                .entry(MonthKey::from_date(date))
                .or_insert_with(|| (vec![0.0; columns.len()], 0.0));

            for (total, value) in entry.0.iter_mut().zip(&record.values) {
                if let Some(v) = value {
                    *total += v;
                }
            }

            if let Some(v) = record.rain_days {
                entry.1 += v;
            }
        }

        let rows = groups
            .into_iter()
            .map(|(month, (totals, rain_days))| MonthlyRow {
                month,
                totals,
                rain_days: has_rain_day_column.then_some(rain_days),
            })
            .collect();

        MonthlyTable {
            columns,
            has_rain_day_column,
            rows,
        }
    }
}

/// Read a file encoded as ISO-8859-1.
///
/// Latin-1 bytes map one-to-one onto the first 256 Unicode code points,
/// so decoding is a direct byte-to-char widening.
fn read_latin1(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

    Ok(bytes.iter().map(|&b| b as char).collect())
}
