//! Canonical date handling.
//!
//! All stored and queried dates use the fixed `DD-MM-YYYY` textual form.
//! Strict parsing guards the write path and the query bounds; the repair
//! pass in [`normalize`](crate::normalize) additionally understands a
//! short list of legacy layouts.

use chrono::NaiveDate;

use crate::error::{LedgerError, Result};

/// Canonical date format for all stored and queried dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Human-readable name of the canonical format, for prompts and errors.
pub const DATE_FORMAT_NAME: &str = "DD-MM-YYYY";

/// Legacy layouts the repair pass accepts, tried in order after the
/// canonical format fails. Day-first shapes come before the year-first
/// ones so `01/02/2023` reads as 1 February.
pub const FALLBACK_FORMATS: &[&str] = &["%d/%m/%Y", "%d.%m.%Y", "%Y-%m-%d", "%Y-%d-%m"];

/// Parse a date in the canonical `DD-MM-YYYY` format.
///
/// Surrounding whitespace is ignored. Unpadded day or month digits are
/// accepted; re-rendering with [`format_canonical`] restores the padding.
///
/// # Errors
///
/// Returns `LedgerError::InvalidDate` if the text does not parse.
pub fn parse_canonical(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}

/// Render a date in the canonical `DD-MM-YYYY` format.
pub fn format_canonical(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Try the legacy fallback layouts, in order.
///
/// Only the repair pass calls this, and only after the canonical parse
/// has failed. Returns `None` when no layout matches.
pub fn parse_fallback(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    FALLBACK_FORMATS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
}

/// Serde adapter keeping `NaiveDate` fields in canonical form.
pub mod canonical {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_valid() {
        let date = parse_canonical("01-01-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_canonical_trims_whitespace() {
        let date = parse_canonical("  05-01-2024 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_canonical_accepts_unpadded_digits() {
        let date = parse_canonical("1-1-2024").unwrap();
        assert_eq!(format_canonical(date), "01-01-2024");
    }

    #[test]
    fn test_parse_canonical_rejects_year_first() {
        assert!(parse_canonical("2024-01-31").is_err());
    }

    #[test]
    fn test_parse_canonical_rejects_impossible_dates() {
        assert!(parse_canonical("32-01-2024").is_err());
        assert!(parse_canonical("29-02-2023").is_err());
        assert!(parse_canonical("").is_err());
        assert!(parse_canonical("not-a-date").is_err());
    }

    #[test]
    fn test_parse_canonical_leap_day() {
        assert!(parse_canonical("29-02-2024").is_ok());
    }

    #[test]
    fn test_fallback_day_first_slash() {
        let date = parse_fallback("07/03/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 7).unwrap());
    }

    #[test]
    fn test_fallback_day_first_dots() {
        let date = parse_fallback("7.3.2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 7).unwrap());
    }

    #[test]
    fn test_fallback_iso() {
        let date = parse_fallback("2023-03-07").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 7).unwrap());
    }

    #[test]
    fn test_fallback_year_first_day_middle() {
        // The shape legacy rows actually contain: day where ISO puts the month.
        let date = parse_fallback("2023-20-07").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 7, 20).unwrap());
    }

    #[test]
    fn test_fallback_gives_up() {
        assert!(parse_fallback("yesterday").is_none());
        assert!(parse_fallback("13/13/2023").is_none());
    }

    #[test]
    fn test_canonical_serde_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "super::canonical")]
            date: NaiveDate,
        }

        let json = serde_json::to_string(&Wrapper {
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        })
        .unwrap();
        assert_eq!(json, r#"{"date":"10-02-2024"}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }
}
