//! Application constants for the chuva processor
//!
//! This module contains the file-layout conventions of the ANA "Chuvas"
//! export format, the fixed analysis window, and the meteorological
//! season table used for seasonal aggregation.

use crate::app::models::Season;
use chrono::NaiveDate;

// =============================================================================
// Station File Layout
// =============================================================================

/// Suffix identifying station files in the workspace directory.
/// The station name is the file name with this suffix stripped.
pub const STATION_FILE_SUFFIX: &str = "_Chuvas.csv";

/// Field delimiter used by the ANA export
pub const FIELD_DELIMITER: u8 = b';';

/// Number of metadata lines preceding the column-header row
pub const PREAMBLE_LINE_COUNT: usize = 14;

/// Required date column name
pub const DATE_COLUMN: &str = "Data";

/// Date format used by the export (day/month/year)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Prefix shared by precipitation measurement columns
pub const PRECIP_COLUMN_PREFIX: &str = "Chuva";

/// Suffix of companion quality-flag columns, excluded from measurements
pub const STATUS_COLUMN_SUFFIX: &str = "Status";

/// Optional column carrying an explicit rain-day count
pub const RAIN_DAY_COLUMN: &str = "NumDiasDeChuva";

// =============================================================================
// Analysis Window
// =============================================================================

/// First year of the analysis window
pub const ANALYSIS_START_YEAR: i32 = 2000;

/// Last year of the analysis window
pub const ANALYSIS_END_YEAR: i32 = 2024;

/// First date admitted into aggregation (2000-01-01)
pub fn analysis_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(ANALYSIS_START_YEAR, 1, 1).expect("valid start date")
}

/// Last date admitted into aggregation (2024-12-31)
pub fn analysis_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(ANALYSIS_END_YEAR, 12, 31).expect("valid end date")
}

// =============================================================================
// Meteorological Seasons
// =============================================================================

/// Southern-hemisphere meteorological seasons in menu order.
///
/// Summer spans the calendar year boundary; seasonal views group December
/// with January/February of the same calendar year, matching the
/// historical behavior of this dataset's tooling.
pub static SEASONS: [Season; 4] = [
    Season {
        name: "Outono",
        months: [3, 4, 5],
    },
    Season {
        name: "Inverno",
        months: [6, 7, 8],
    },
    Season {
        name: "Primavera",
        months: [9, 10, 11],
    },
    Season {
        name: "Verão",
        months: [12, 1, 2],
    },
];

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default number of station files parsed concurrently
pub const DEFAULT_PARSE_CONCURRENCY: usize = 4;

/// Default workspace directory name
pub const DEFAULT_WORKSPACE: &str = "dados_chuvaANA";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a column name carries a precipitation measurement
pub fn is_precipitation_column(name: &str) -> bool {
    name.starts_with(PRECIP_COLUMN_PREFIX) && !name.ends_with(STATUS_COLUMN_SUFFIX)
}

/// Check if a file name matches the station file pattern
pub fn is_station_file(file_name: &str) -> bool {
    file_name.ends_with(STATION_FILE_SUFFIX) && file_name.len() > STATION_FILE_SUFFIX.len()
}

/// Extract the station name from a station file name
pub fn station_name_from_file(file_name: &str) -> Option<&str> {
    if is_station_file(file_name) {
        Some(&file_name[..file_name.len() - STATION_FILE_SUFFIX.len()])
    } else {
        None
    }
}
