//! Calendar-date handling.
//!
//! A date-only string (`YYYY-MM-DD`) is a *local calendar date*, not an
//! instant. Parsing it as UTC midnight and converting back shifts the day at
//! negative-offset hosts, so comparisons against "today" are done on
//! `NaiveDate` values and "today" is always derived from the local clock of
//! the caller.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("invalid date: {0}")]
    Invalid(String),
}

/// Parse a date string into a local calendar date.
///
/// Accepts `YYYY-MM-DD` (taken as-is) or a full RFC 3339 timestamp (converted
/// to the host's local calendar date before the time component is dropped).
pub fn parse_local_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).date_naive());
    }

    Err(DateParseError::Invalid(s.to_string()))
}

/// Today as a local calendar date.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_date() {
        let d = parse_local_date("2026-03-07").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
    }

    #[test]
    fn plain_date_is_not_shifted_by_offsets() {
        // "2026-03-07" is a Saturday on every host, regardless of UTC offset;
        // the value never passes through an instant.
        let d = parse_local_date("2026-03-07").unwrap();
        assert_eq!(d.weekday(), Weekday::Sat);
        assert!(is_weekend(d));
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        assert!(parse_local_date("2026-03-07T10:30:00+05:00").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_local_date("not-a-date").is_err());
        assert!(parse_local_date("2026-13-40").is_err());
        assert!(parse_local_date("").is_err());
    }

    #[test]
    fn weekday_is_not_weekend() {
        // 2026-03-09 is a Monday.
        let d = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert!(!is_weekend(d));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Round-trip: any valid calendar date survives format+parse intact.
            #[test]
            fn format_parse_round_trip(y in 1970i32..2100, m in 1u32..=12, d in 1u32..=28) {
                let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
                let parsed = parse_local_date(&date.format("%Y-%m-%d").to_string()).unwrap();
                prop_assert_eq!(parsed, date);
            }
        }
    }
}
