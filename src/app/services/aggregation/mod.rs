//! Derived aggregate views over monthly tables
//!
//! Pure functions that compute the analyst-facing views from the
//! canonical per-station monthly tables. Views are recomputed on demand
//! and never cached; the caller owns the result tables.
//!
//! - [`annual`] - Annual totals per precipitation column
//! - [`seasonal`] - Seasonal mean and sum by year
//! - [`rain_days`] - Merged rain-day tables across all stations

pub mod annual;
pub mod rain_days;
pub mod seasonal;

#[cfg(test)]
pub mod tests;

pub use annual::annual_totals;
pub use rain_days::{RainDayTables, rain_day_tables};
pub use seasonal::{seasonal_mean, seasonal_sum};
