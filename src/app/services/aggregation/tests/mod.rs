//! Table-building helpers shared across the aggregation test modules

use std::path::PathBuf;

use crate::app::models::{MonthKey, MonthlyRow, MonthlyTable, Station};
use crate::app::services::ana_csv_parser::ParseStats;
use crate::app::services::loader::StationData;


/// Build a monthly table from (year, month, per-column totals) triples
pub fn table(columns: &[&str], rows: &[(i32, u32, &[f64])]) -> MonthlyTable {
    MonthlyTable {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        has_rain_day_column: false,
        rows: rows
            .iter()
            .map(|&(year, month, totals)| MonthlyRow {
                month: MonthKey { year, month },
                totals: totals.to_vec(),
                rain_days: None,
            })
            .collect(),
    }
}

/// Build a monthly table that carries an explicit rain-day column
pub fn table_with_rain_days(
    columns: &[&str],
    rows: &[(i32, u32, &[f64], f64)],
) -> MonthlyTable {
    MonthlyTable {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        has_rain_day_column: true,
        rows: rows
            .iter()
            .map(|&(year, month, totals, rain_days)| MonthlyRow {
                month: MonthKey { year, month },
                totals: totals.to_vec(),
                rain_days: Some(rain_days),
            })
            .collect(),
    }
}

/// Wrap a monthly table as a loaded station for cross-station views
pub fn station_data(name: &str, table: MonthlyTable) -> StationData {
    StationData {
        station: Station {
            name: name.to_string(),
            path: PathBuf::from(format!("{}_Chuvas.csv", name)),
        },
        table,
        stats: ParseStats::new(),
    }
}
