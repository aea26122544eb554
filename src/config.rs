//! Runtime configuration and validation.
//!
//! Carries the workspace location, the analysis date window and the
//! parse concurrency bound. Built from CLI arguments with defaults from
//! [`crate::constants`]; view functions receive what they need from here
//! rather than reading ambient globals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;
use crate::{Error, Result};

/// Processing configuration for a workspace run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for `*_Chuvas.csv` station files
    pub workspace: PathBuf,

    /// Number of station files parsed concurrently
    pub parse_concurrency: usize,

    /// First year admitted into aggregation
    pub start_year: i32,

    /// Last year admitted into aggregation
    pub end_year: i32,
}

impl Config {
    /// Build a configuration for a workspace with default settings
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            parse_concurrency: constants::DEFAULT_PARSE_CONCURRENCY,
            start_year: constants::ANALYSIS_START_YEAR,
            end_year: constants::ANALYSIS_END_YEAR,
        }
    }

    /// Override the parse concurrency bound
    pub fn with_parse_concurrency(mut self, jobs: usize) -> Self {
        self.parse_concurrency = jobs;
        self
    }

    /// First date admitted into aggregation
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, 1, 1).expect("valid start year")
    }

    /// Last date admitted into aggregation
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.end_year, 12, 31).expect("valid end year")
    }

    /// Whether a year falls inside the analysis window
    pub fn contains_year(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }

    /// Validate the configuration before processing starts
    pub fn validate(&self) -> Result<()> {
        if self.parse_concurrency == 0 {
            return Err(Error::configuration(
                "parse concurrency must be at least 1",
            ));
        }

        if self.start_year > self.end_year {
            return Err(Error::configuration(format!(
                "start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(constants::DEFAULT_WORKSPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.workspace, PathBuf::from("dados_chuvaANA"));
        assert_eq!(config.parse_concurrency, 4);
        assert_eq!(config.start_year, 2000);
        assert_eq!(config.end_year, 2024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_date_window() {
        let config = Config::new("/tmp/ws");
        assert_eq!(config.start_date().to_string(), "2000-01-01");
        assert_eq!(config.end_date().to_string(), "2024-12-31");
        assert!(config.contains_year(2000));
        assert!(config.contains_year(2024));
        assert!(!config.contains_year(1999));
        assert!(!config.contains_year(2025));
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = Config::new("/tmp/ws").with_parse_concurrency(0);
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_years() {
        let mut config = Config::new("/tmp/ws");
        config.start_year = 2025;
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }
}
