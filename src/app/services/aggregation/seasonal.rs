//! Seasonal mean and sum by year
//!
//! Both views filter monthly rows to the season's month set and group by
//! the row's own calendar year. For Verão (Dec, Jan, Feb) this means
//! December of year Y groups with January/February of the *same* year Y,
//! not the following year. That convention is load-bearing for existing
//! analyses and must not change.

use std::collections::BTreeMap;

use crate::app::models::{MonthlyTable, Season, SeasonalRow};

/// Per-column seasonal sum per year
pub fn seasonal_sum(table: &MonthlyTable, season: &Season) -> Vec<SeasonalRow> {
    accumulate(table, season)
        .into_iter()
        .map(|(year, (sums, _count))| SeasonalRow { year, values: sums })
        .collect()
}

/// Per-column seasonal mean per year.
///
/// The mean divides by the number of monthly rows actually present for
/// that year and season; absent months do not drag the mean down.
pub fn seasonal_mean(table: &MonthlyTable, season: &Season) -> Vec<SeasonalRow> {
    accumulate(table, season)
        .into_iter()
        .map(|(year, (sums, count))| {
            let values = sums.into_iter().map(|s| s / count as f64).collect();
            SeasonalRow { year, values }
        })
        .collect()
}

/// Filter to the season's months and accumulate (sums, row count) per
/// calendar year
fn accumulate(table: &MonthlyTable, season: &Season) -> BTreeMap<i32, (Vec<f64>, usize)> {
    let mut by_year: BTreeMap<i32, (Vec<f64>, usize)> = BTreeMap::new();

    for row in &table.rows {
        if !season.contains(row.month.month) {
            continue;
        }

        let entry = by_year
            .entry(row.month.year)
            .or_insert_with(|| (vec![0.0; table.columns.len()], 0));

        for (sum, value) in entry.0.iter_mut().zip(&row.totals) {
            *sum += value;
        }
        entry.1 += 1;
    }

    by_year
}
