//! Column analysis for ANA station exports
//!
//! Locates the required date column, the precipitation measurement
//! columns (shared `Chuva` prefix, excluding `*Status` quality flags) and
//! the optional explicit rain-day column.

use csv::StringRecord;

use crate::constants;
use crate::{Error, Result};

/// Mapping from the discovered header row to typed column roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Index of the `Data` column
    pub date_index: usize,

    /// Precipitation columns as (name, index) pairs in file order
    pub precipitation: Vec<(String, usize)>,

    /// Index of the `NumDiasDeChuva` column, when present
    pub rain_day_index: Option<usize>,
}

impl ColumnMapping {
    /// Analyze a header row and categorize its columns.
    ///
    /// Fails with [`Error::MissingDateColumn`] when no `Data` column
    /// exists, which aborts processing for this file only.
    pub fn analyze(headers: &StringRecord, file: &str) -> Result<Self> {
        let mut date_index = None;
        let mut precipitation = Vec::new();
        let mut rain_day_index = None;

        for (index, raw_name) in headers.iter().enumerate() {
            let name = raw_name.trim();

            if name == constants::DATE_COLUMN {
                date_index = Some(index);
            } else if name == constants::RAIN_DAY_COLUMN {
                rain_day_index = Some(index);
            } else if constants::is_precipitation_column(name) {
                precipitation.push((name.to_string(), index));
            }
        }

        let date_index = date_index.ok_or_else(|| Error::missing_date_column(file))?;

        Ok(Self {
            date_index,
            precipitation,
            rain_day_index,
        })
    }

    /// Precipitation column names in file order
    pub fn precipitation_names(&self) -> Vec<String> {
        self.precipitation
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Summary counts: (header columns categorized, precipitation
    /// columns, explicit rain-day column present)
    pub fn stats(&self) -> (usize, usize, bool) {
        let categorized =
            1 + self.precipitation.len() + usize::from(self.rain_day_index.is_some());
        (
            categorized,
            self.precipitation.len(),
            self.rain_day_index.is_some(),
        )
    }
}
