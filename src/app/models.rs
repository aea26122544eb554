//! Core data models for rainfall processing
//!
//! This module defines the typed representations of station files, raw
//! records, the canonical per-station monthly table, and the derived view
//! rows handed to the presentation layer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;
use crate::{Error, Result};

/// One precipitation-monitoring station, discovered from the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Station name, derived from the file name with the suffix stripped
    pub name: String,

    /// Path to the station's export file
    pub path: PathBuf,
}

impl Station {
    /// Build a station from a file path, if the file name matches the
    /// `*_Chuvas.csv` pattern
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let name = constants::station_name_from_file(file_name)?;

        Some(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Calendar month key used to group records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Month key for a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human-readable `MM/YYYY` label
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

/// One row read from a station file before aggregation.
///
/// The date and every measurement are first-class optionals: a value that
/// failed to parse is `None`, never a fabricated zero. Records are never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Calendar date of the record; `None` when the date token was
    /// unparseable, which excludes the record from all aggregation
    pub date: Option<NaiveDate>,

    /// Per-column precipitation values, parallel to the discovered
    /// precipitation column names
    pub values: Vec<Option<f64>>,

    /// Explicit rain-day count, when the source supplies one
    pub rain_days: Option<f64>,
}

/// One month of summed precipitation for a station
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    /// The calendar month this row covers
    pub month: MonthKey,

    /// Null-safe sum per precipitation column for this month
    pub totals: Vec<f64>,

    /// Summed explicit rain-day count, when the source has that column
    pub rain_days: Option<f64>,
}

/// Canonical per-station monthly time series.
///
/// Rows are ordered by (year, month) ascending and only exist for months
/// with at least one qualifying raw record; gaps are not zero-filled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlyTable {
    /// Precipitation column names in file order
    pub columns: Vec<String>,

    /// Whether the source file carries an explicit rain-day column
    pub has_rain_day_column: bool,

    /// Monthly rows, ordered by month key
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyTable {
    /// Whether the table holds no monthly rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a precipitation column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// One meteorological season: a fixed name plus its three calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    pub name: &'static str,
    pub months: [u32; 3],
}

impl Season {
    /// Whether a calendar month belongs to this season
    pub fn contains(&self, month: u32) -> bool {
        self.months.contains(&month)
    }

    /// Resolve a 1-based menu choice against the fixed season table
    pub fn from_choice(choice: usize) -> Result<&'static Season> {
        if choice >= 1 && choice <= constants::SEASONS.len() {
            Ok(&constants::SEASONS[choice - 1])
        } else {
            Err(Error::invalid_season_choice(choice.to_string()))
        }
    }

    /// Resolve raw user input (possibly non-numeric) into a season
    pub fn from_input(input: &str) -> Result<&'static Season> {
        let trimmed = input.trim();
        let choice: usize = trimmed
            .parse()
            .map_err(|_| Error::invalid_season_choice(trimmed.to_string()))?;
        Self::from_choice(choice)
    }
}

/// One year of summed precipitation per column
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualRow {
    pub year: i32,
    pub totals: Vec<f64>,
}

/// One year of seasonal aggregate values (mean or sum) per column
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalRow {
    pub year: i32,
    pub values: Vec<f64>,
}

/// Rain days for one station-month, tagged by station for later filtering
#[derive(Debug, Clone, PartialEq)]
pub struct RainDayMonthlyRow {
    pub station: String,
    pub month: MonthKey,
    pub rain_days: f64,
}

/// Rain days for one station-year
#[derive(Debug, Clone, PartialEq)]
pub struct RainDayAnnualRow {
    pub station: String,
    pub year: i32,
    pub rain_days: f64,
}

/// The five view kinds the presentation layer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    MonthlyAccumulated,
    AnnualComparison,
    SeasonalMean,
    SeasonalSum,
    RainDaysByStationYear,
}

impl ViewKind {
    /// All view kinds in menu order
    pub const ALL: [ViewKind; 5] = [
        ViewKind::MonthlyAccumulated,
        ViewKind::AnnualComparison,
        ViewKind::SeasonalMean,
        ViewKind::SeasonalSum,
        ViewKind::RainDaysByStationYear,
    ];

    /// Resolve a 1-based menu choice into a view kind
    pub fn from_choice(choice: usize) -> Result<Self> {
        Self::ALL
            .get(choice.wrapping_sub(1))
            .copied()
            .ok_or_else(|| {
                Error::invalid_selection(format!(
                    "view choice '{}' is out of range 1-{}",
                    choice,
                    Self::ALL.len()
                ))
            })
    }

    /// Menu label for this view
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::MonthlyAccumulated => "Acumulado mensal",
            ViewKind::AnnualComparison => "Comparação anual de acumulados",
            ViewKind::SeasonalMean => "Médias de precipitação por estação do ano",
            ViewKind::SeasonalSum => "Acumulado por estação do ano",
            ViewKind::RainDaysByStationYear => "Dias de chuva por estação e ano",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_from_path() {
        let station = Station::from_path(Path::new("/data/02043032_Chuvas.csv")).unwrap();
        assert_eq!(station.name, "02043032");
        assert_eq!(station.path, PathBuf::from("/data/02043032_Chuvas.csv"));

        assert!(Station::from_path(Path::new("/data/estacoes_rj.csv")).is_none());
        assert!(Station::from_path(Path::new("/data")).is_none());
    }

    #[test]
    fn test_month_key_ordering_and_label() {
        let a = MonthKey {
            year: 2019,
            month: 12,
        };
        let b = MonthKey {
            year: 2020,
            month: 1,
        };
        let c = MonthKey {
            year: 2020,
            month: 2,
        };
        assert!(a < b && b < c);
        assert_eq!(b.label(), "01/2020");
    }

    #[test]
    fn test_month_key_from_date() {
        let date = NaiveDate::from_ymd_opt(2015, 7, 23).unwrap();
        assert_eq!(
            MonthKey::from_date(date),
            MonthKey {
                year: 2015,
                month: 7
            }
        );
    }

    #[test]
    fn test_season_from_choice_valid() {
        assert_eq!(Season::from_choice(1).unwrap().name, "Outono");
        assert_eq!(Season::from_choice(2).unwrap().name, "Inverno");
        assert_eq!(Season::from_choice(3).unwrap().name, "Primavera");
        assert_eq!(Season::from_choice(4).unwrap().name, "Verão");
    }

    #[test]
    fn test_season_from_choice_invalid() {
        assert!(matches!(
            Season::from_choice(0),
            Err(Error::InvalidSeasonChoice { .. })
        ));
        assert!(matches!(
            Season::from_choice(5),
            Err(Error::InvalidSeasonChoice { .. })
        ));
    }

    #[test]
    fn test_season_from_input() {
        assert_eq!(Season::from_input(" 2 ").unwrap().name, "Inverno");
        assert!(matches!(
            Season::from_input("abc"),
            Err(Error::InvalidSeasonChoice { .. })
        ));
        assert!(matches!(
            Season::from_input("-1"),
            Err(Error::InvalidSeasonChoice { .. })
        ));
    }

    #[test]
    fn test_view_kind_from_choice() {
        assert_eq!(
            ViewKind::from_choice(1).unwrap(),
            ViewKind::MonthlyAccumulated
        );
        assert_eq!(
            ViewKind::from_choice(5).unwrap(),
            ViewKind::RainDaysByStationYear
        );
        assert!(ViewKind::from_choice(0).is_err());
        assert!(ViewKind::from_choice(6).is_err());
    }

    #[test]
    fn test_monthly_table_column_index() {
        let table = MonthlyTable {
            columns: vec!["Chuva".to_string(), "ChuvaAcumulada".to_string()],
            has_rain_day_column: false,
            rows: Vec::new(),
        };
        assert_eq!(table.column_index("ChuvaAcumulada"), Some(1));
        assert_eq!(table.column_index("ChuvaStatus"), None);
        assert!(table.is_empty());
    }
}
