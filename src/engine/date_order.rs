// Date parsing for release ordering

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a feed date into milliseconds since the Unix epoch.
/// Naive values are taken as UTC.
pub fn parse_instant(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }

    None
}

/// Unparseable dates sort before every valid date and equal to each other
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    parse_instant(a).cmp(&parse_instant(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_instant("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_instant("1970/01/02"), Some(86_400_000));
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(parse_instant("1970-01-01T00:00:01Z"), Some(1_000));
        assert_eq!(parse_instant("1970-01-01T01:00:00+01:00"), Some(0));
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert_eq!(parse_instant("1970-01-01T00:01:00"), Some(60_000));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("yesterday"), None);
        assert_eq!(parse_instant("2024-13-45"), None);
    }

    #[test]
    fn test_compare_dates() {
        assert_eq!(compare_dates("2024-01-01", "2024-03-01"), Ordering::Less);
        assert_eq!(compare_dates("2024-03-01", "2024-03-01T00:00:00Z"), Ordering::Equal);
        assert_eq!(compare_dates("garbage", "2024-01-01"), Ordering::Less);
        assert_eq!(compare_dates("garbage", "also garbage"), Ordering::Equal);
    }
}
