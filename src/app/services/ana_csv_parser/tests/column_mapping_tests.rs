//! Tests for header column categorization

use csv::StringRecord;

use crate::Error;
use crate::app::services::ana_csv_parser::ColumnMapping;

fn headers(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_analyze_full_header() {
    let record = headers(&[
        "EstacaoCodigo",
        "Data",
        "NumDiasDeChuva",
        "NumDiasDeChuvaStatus",
        "Chuva01",
        "Chuva01Status",
        "Chuva02",
        "Chuva02Status",
    ]);

    let mapping = ColumnMapping::analyze(&record, "test.csv").unwrap();

    assert_eq!(mapping.date_index, 1);
    assert_eq!(mapping.rain_day_index, Some(2));
    assert_eq!(
        mapping.precipitation,
        vec![("Chuva01".to_string(), 4), ("Chuva02".to_string(), 6)]
    );
    assert_eq!(mapping.precipitation_names(), vec!["Chuva01", "Chuva02"]);
    assert_eq!(mapping.stats(), (4, 2, true));
}

#[test]
fn test_analyze_missing_date_column() {
    let record = headers(&["EstacaoCodigo", "Chuva01", "Chuva01Status"]);

    let result = ColumnMapping::analyze(&record, "02043032_Chuvas.csv");
    match result {
        Err(Error::MissingDateColumn { file }) => assert_eq!(file, "02043032_Chuvas.csv"),
        other => panic!("expected MissingDateColumn, got {:?}", other),
    }
}

#[test]
fn test_analyze_no_precipitation_columns() {
    // A date column alone is valid; the table just has no measurements
    let record = headers(&["Data", "EstacaoCodigo"]);

    let mapping = ColumnMapping::analyze(&record, "test.csv").unwrap();
    assert_eq!(mapping.date_index, 0);
    assert!(mapping.precipitation.is_empty());
    assert_eq!(mapping.rain_day_index, None);
}

#[test]
fn test_analyze_trims_header_whitespace() {
    let record = headers(&[" Data ", " Chuva01 ", "Chuva01Status"]);

    let mapping = ColumnMapping::analyze(&record, "test.csv").unwrap();
    assert_eq!(mapping.date_index, 0);
    assert_eq!(mapping.precipitation, vec![("Chuva01".to_string(), 1)]);
}

#[test]
fn test_status_columns_excluded_even_with_prefix() {
    let record = headers(&["Data", "ChuvaStatus", "Chuva"]);

    let mapping = ColumnMapping::analyze(&record, "test.csv").unwrap();
    assert_eq!(mapping.precipitation, vec![("Chuva".to_string(), 2)]);
}
