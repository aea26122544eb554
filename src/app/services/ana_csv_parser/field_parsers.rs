//! Soft-failing field conversion for ANA station exports
//!
//! Every converter here returns an `Option`: a token that does not
//! conform to the expected grammar becomes `None` and is excluded from
//! aggregation rather than fabricating a value or failing the row.

use chrono::NaiveDate;

use crate::constants;

/// Parse a date token in the `%d/%m/%Y` export format.
///
/// Returns `None` for empty or ungrammatical tokens; the caller treats
/// such records as unusable for aggregation.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, constants::DATE_FORMAT).ok()
}

/// Parse a precipitation or rain-day value.
///
/// The export uses decimal commas; the token is normalized before
/// conversion. Empty or ungrammatical tokens become `None`.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("23/07/2015"),
            NaiveDate::from_ymd_opt(2015, 7, 23)
        );
        assert_eq!(
            parse_date(" 01/01/2000 "),
            NaiveDate::from_ymd_opt(2000, 1, 1)
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2015-07-23"), None);
        assert_eq!(parse_date("32/01/2015"), None);
        assert_eq!(parse_date("??/??/????"), None);
    }

    #[test]
    fn test_parse_numeric_decimal_comma() {
        assert_eq!(parse_numeric("12,5"), Some(12.5));
        assert_eq!(parse_numeric("0,0"), Some(0.0));
        assert_eq!(parse_numeric("1234,75"), Some(1234.75));
    }

    #[test]
    fn test_parse_numeric_decimal_point() {
        assert_eq!(parse_numeric("12.5"), Some(12.5));
        assert_eq!(parse_numeric("7"), Some(7.0));
    }

    #[test]
    fn test_parse_numeric_invalid() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("n/d"), None);
        assert_eq!(parse_numeric("1,2,3"), None);
    }
}
