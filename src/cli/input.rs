//! User input utilities for the interactive session
//!
//! Prompting does the I/O; the `parse_*` functions are pure so the
//! selection rules can be tested without a terminal. Every invalid
//! selection maps to a recoverable error the session loop reports and
//! re-prompts on.

use std::io::{self, Write};

use crate::constants::{ANALYSIS_END_YEAR, ANALYSIS_START_YEAR};
use crate::{Error, Result};

/// A station menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationChoice {
    /// User asked to leave the session (choice 0)
    Exit,
    /// Zero-based index into the station list
    Station(usize),
}

/// Print a prompt and read one trimmed line from stdin
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout", e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input", e))?;

    Ok(input.trim().to_string())
}

/// Parse a station menu selection: 0 exits, 1..=count picks a station
pub fn parse_station_choice(input: &str, count: usize) -> Result<StationChoice> {
    let trimmed = input.trim();
    let choice: usize = trimmed.parse().map_err(|_| {
        Error::invalid_selection(format!("'{}' is not a number", trimmed))
    })?;

    if choice == 0 {
        Ok(StationChoice::Exit)
    } else if choice <= count {
        Ok(StationChoice::Station(choice - 1))
    } else {
        Err(Error::invalid_selection(format!(
            "station choice '{}' is out of range 1-{}",
            choice, count
        )))
    }
}

/// Parse a view menu selection: 0 exits, 1..=5 picks a view
pub fn parse_view_choice(input: &str) -> Result<Option<usize>> {
    let trimmed = input.trim();
    let choice: usize = trimmed.parse().map_err(|_| {
        Error::invalid_selection(format!("'{}' is not a number", trimmed))
    })?;

    if choice == 0 {
        Ok(None)
    } else {
        Ok(Some(choice))
    }
}

/// Parse a year and validate it against the analysis window
pub fn parse_year(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    let year: i32 = trimmed
        .parse()
        .map_err(|_| Error::invalid_year(trimmed.to_string()))?;

    if year < ANALYSIS_START_YEAR || year > ANALYSIS_END_YEAR {
        return Err(Error::invalid_year(trimmed.to_string()));
    }

    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_station_choice() {
        assert_eq!(parse_station_choice("0", 3).unwrap(), StationChoice::Exit);
        assert_eq!(
            parse_station_choice("1", 3).unwrap(),
            StationChoice::Station(0)
        );
        assert_eq!(
            parse_station_choice(" 3 ", 3).unwrap(),
            StationChoice::Station(2)
        );
        assert!(parse_station_choice("4", 3).is_err());
        assert!(parse_station_choice("abc", 3).is_err());
        assert!(parse_station_choice("-1", 3).is_err());
    }

    #[test]
    fn test_parse_view_choice() {
        assert_eq!(parse_view_choice("0").unwrap(), None);
        assert_eq!(parse_view_choice("5").unwrap(), Some(5));
        assert!(parse_view_choice("x").is_err());
    }

    #[test]
    fn test_parse_year_in_window() {
        assert_eq!(parse_year("2000").unwrap(), 2000);
        assert_eq!(parse_year(" 2024 ").unwrap(), 2024);
    }

    #[test]
    fn test_parse_year_rejects_out_of_window() {
        assert!(matches!(parse_year("1999"), Err(Error::InvalidYear { .. })));
        assert!(matches!(parse_year("2025"), Err(Error::InvalidYear { .. })));
        assert!(matches!(parse_year("abc"), Err(Error::InvalidYear { .. })));
    }

    #[test]
    fn test_selection_errors_are_user_recoverable() {
        assert!(parse_year("3000").unwrap_err().is_user_recoverable());
        assert!(
            parse_station_choice("9", 2)
                .unwrap_err()
                .is_user_recoverable()
        );
    }
}
