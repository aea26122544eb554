//! Annual precipitation totals

use std::collections::BTreeMap;

use crate::app::models::{AnnualRow, MonthlyTable};

/// Group monthly rows by year and sum each precipitation column.
///
/// Years with no monthly rows are simply absent; gaps are never filled.
pub fn annual_totals(table: &MonthlyTable) -> Vec<AnnualRow> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();

    for row in &table.rows {
        let totals = by_year
            .entry(row.month.year)
            .or_insert_with(|| vec![0.0; table.columns.len()]);

        for (total, value) in totals.iter_mut().zip(&row.totals) {
            *total += value;
        }
    }

    by_year
        .into_iter()
        .map(|(year, totals)| AnnualRow { year, totals })
        .collect()
}
