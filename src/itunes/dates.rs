//! Release date coercion
//!
//! iTunes writes release dates as UTC timestamps like
//! `2024-03-01T12:00:00Z`, but exports that passed through other tools show
//! up with bare dates or years. Anything the ladder below cannot parse
//! drops the record, per the extraction contract.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse release-date text into a calendar date, or `None` when malformed.
pub(crate) fn parse_release_date(text: &str) -> Option<NaiveDate> {
    // Full timestamp with offset, the format iTunes itself writes
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    // Timestamp without an offset
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }

    // Bare date
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    // Bare year, pinned to January 1st
    if let Ok(year) = text.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_itunes_utc_timestamp() {
        assert_eq!(
            parse_release_date("2024-03-01T12:00:00Z"),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_offset_timestamp_keeps_local_date() {
        assert_eq!(
            parse_release_date("2023-11-05T23:30:00+02:00"),
            Some(date(2023, 11, 5))
        );
    }

    #[test]
    fn test_naive_timestamp() {
        assert_eq!(
            parse_release_date("2022-07-15T08:00:00"),
            Some(date(2022, 7, 15))
        );
    }

    #[test]
    fn test_bare_date() {
        assert_eq!(parse_release_date("2024-03-01"), Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_bare_year() {
        assert_eq!(parse_release_date("1999"), Some(date(1999, 1, 1)));
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        assert_eq!(parse_release_date(""), None);
        assert_eq!(parse_release_date("not a date"), None);
        assert_eq!(parse_release_date("01/02/2024"), None);
        assert_eq!(parse_release_date("2024-13-01"), None);
        assert_eq!(parse_release_date("2024-02-30T00:00:00Z"), None);
    }
}
