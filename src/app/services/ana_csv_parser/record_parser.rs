//! Individual CSV record processing
//!
//! Converts one data row into a [`RawRecord`] using the column mapping.
//! Conversion never fails: missing cells and ungrammatical tokens become
//! first-class `None` values.

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{parse_date, parse_numeric};
use crate::app::models::RawRecord;

/// Convert a CSV record into a raw station record.
///
/// Cells absent from a short row (the export pads unevenly) are treated
/// as missing rather than failing the row.
pub fn parse_raw_record(record: &StringRecord, mapping: &ColumnMapping) -> RawRecord {
    let date = record.get(mapping.date_index).and_then(parse_date);

    let values = mapping
        .precipitation
        .iter()
        .map(|(_, index)| record.get(*index).and_then(parse_numeric))
        .collect();

    let rain_days = mapping
        .rain_day_index
        .and_then(|index| record.get(index))
        .and_then(parse_numeric);

    RawRecord {
        date,
        values,
        rain_days,
    }
}
