//! Test fixtures shared across the parser test modules

use std::io::Write;
use tempfile::NamedTempFile;

use crate::constants::PREAMBLE_LINE_COUNT;

// Test modules
mod column_mapping_tests;

/// Default header used by most fixtures: a date column, an explicit
/// rain-day column and two precipitation columns with status companions
pub const DEFAULT_HEADER: &str =
    "Data;NumDiasDeChuva;Chuva01;Chuva01Status;Chuva02;Chuva02Status";

/// Build station file content with the standard metadata preamble, a
/// custom header row and the given data rows
pub fn station_file_content_with_header(header: &str, rows: &[&str]) -> String {
    let mut lines: Vec<String> = (1..=PREAMBLE_LINE_COUNT)
        .map(|i| format!("//Metadados da estação, linha {}", i))
        .collect();
    lines.push(header.to_string());
    lines.extend(rows.iter().map(|r| r.to_string()));
    lines.join("\n")
}

/// Build station file content with the default header
pub fn station_file_content(rows: &[&str]) -> String {
    station_file_content_with_header(DEFAULT_HEADER, rows)
}

/// Write content to a temporary file and return its handle
pub fn create_temp_station_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
