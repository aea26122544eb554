//! Chuva Processor Library
//!
//! A Rust library for turning ANA "Chuvas" rainfall station exports into
//! aggregate precipitation series for interactive exploration.
//!
//! This library provides tools for:
//! - Discovering station files in a workspace directory
//! - Parsing the ANA semicolon-delimited CSV layout with preamble skipping
//! - Normalizing daily records into per-station monthly tables
//! - Deriving annual totals, seasonal means/sums and rain-day counts
//! - Containing per-file failures so one bad export never aborts a batch

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod ana_csv_parser;
        pub mod discovery;
        pub mod loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
    pub mod render;
}

// Re-export commonly used types
pub use app::models::{MonthKey, MonthlyTable, Season, Station, ViewKind};
pub use config::Config;

/// Result type alias for the chuva processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for rainfall processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workspace directory does not exist or is not a directory
    #[error("Workspace directory not found: {path}")]
    WorkspaceNotFound { path: std::path::PathBuf },

    /// Workspace contained no station files
    #[error("No '*{suffix}' station files found in {path}")]
    NoStationFiles {
        path: std::path::PathBuf,
        suffix: String,
    },

    /// Station file lacks the required date column
    #[error("Missing 'Data' column in station file '{file}'")]
    MissingDateColumn { file: String },

    /// CSV-level parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Season menu selection outside the fixed list of four seasons
    #[error("Invalid season choice '{choice}': expected a number between 1 and 4")]
    InvalidSeasonChoice { choice: String },

    /// Year outside the analysis window
    #[error("Invalid year '{input}': expected a year between {min} and {max}")]
    InvalidYear {
        input: String,
        min: i32,
        max: i32,
    },

    /// Out-of-range or non-numeric menu selection
    #[error("Invalid selection: {message}")]
    InvalidSelection { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workspace-not-found error
    pub fn workspace_not_found(path: impl Into<std::path::PathBuf>) -> Self {
        Self::WorkspaceNotFound { path: path.into() }
    }

    /// Create a no-station-files error
    pub fn no_station_files(path: impl Into<std::path::PathBuf>) -> Self {
        Self::NoStationFiles {
            path: path.into(),
            suffix: crate::constants::STATION_FILE_SUFFIX.to_string(),
        }
    }

    /// Create a missing-date-column error
    pub fn missing_date_column(file: impl Into<String>) -> Self {
        Self::MissingDateColumn { file: file.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid season choice error
    pub fn invalid_season_choice(choice: impl Into<String>) -> Self {
        Self::InvalidSeasonChoice {
            choice: choice.into(),
        }
    }

    /// Create an invalid year error using the fixed analysis window
    pub fn invalid_year(input: impl Into<String>) -> Self {
        Self::InvalidYear {
            input: input.into(),
            min: crate::constants::ANALYSIS_START_YEAR,
            max: crate::constants::ANALYSIS_END_YEAR,
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error should only abort the current user request,
    /// leaving the interactive session running
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidSeasonChoice { .. }
                | Self::InvalidYear { .. }
                | Self::InvalidSelection { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
