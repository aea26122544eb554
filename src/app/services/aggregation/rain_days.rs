//! Rain-day tables across all stations
//!
//! "Rain days" is a frequency proxy derived from monthly aggregates: the
//! explicit `NumDiasDeChuva` value when the source supplies it, otherwise
//! the count of precipitation columns with measurable rain in that
//! monthly row. It is not a count of literal calendar days and must stay
//! that way; downstream analyses depend on the proxy definition.

use std::collections::BTreeMap;

use crate::app::models::{MonthlyRow, RainDayAnnualRow, RainDayMonthlyRow};
use crate::app::services::loader::StationData;

/// Merged monthly and annual rain-day tables, tagged by station name so
/// the presentation layer can filter afterwards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RainDayTables {
    /// One row per station-month, stations in input order, months ascending
    pub monthly: Vec<RainDayMonthlyRow>,

    /// One row per station-year, stations in input order, years ascending
    pub annual: Vec<RainDayAnnualRow>,
}

impl RainDayTables {
    /// Monthly rows for one station and year
    pub fn monthly_for(&self, station: &str, year: i32) -> Vec<&RainDayMonthlyRow> {
        self.monthly
            .iter()
            .filter(|row| row.station == station && row.month.year == year)
            .collect()
    }
}

/// Compute rain-day tables for every station in one pass
pub fn rain_day_tables(stations: &[StationData]) -> RainDayTables {
    let mut tables = RainDayTables::default();

    for data in stations {
        let mut annual: BTreeMap<i32, f64> = BTreeMap::new();

        for row in &data.table.rows {
            let rain_days = monthly_rain_days(row, data.table.has_rain_day_column);

            tables.monthly.push(RainDayMonthlyRow {
                station: data.station.name.clone(),
                month: row.month,
                rain_days,
            });

            *annual.entry(row.month.year).or_insert(0.0) += rain_days;
        }

        for (year, rain_days) in annual {
            tables.annual.push(RainDayAnnualRow {
                station: data.station.name.clone(),
                year,
                rain_days,
            });
        }
    }

    tables
}

/// Rain days for one monthly row: the explicit count when the source has
/// that column, else the number of columns with precipitation strictly
/// greater than zero
fn monthly_rain_days(row: &MonthlyRow, has_rain_day_column: bool) -> f64 {
    if has_rain_day_column {
        row.rain_days.unwrap_or(0.0)
    } else {
        row.totals.iter().filter(|&&total| total > 0.0).count() as f64
    }
}
