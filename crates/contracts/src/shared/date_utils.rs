//! Date formatting for list cells.
//!
//! Backends send timestamps in several shapes (RFC 3339 with microseconds,
//! `YYYY-MM-DD HH:MM:SS`, bare dates); all of them render as `DD/MM/YYYY`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a backend timestamp as `DD/MM/YYYY`; unknown shapes pass through
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Format a backend timestamp as `DD/MM/YYYY HH:MM`
pub fn format_datetime(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.000000Z"), "15/03/2024");
        assert_eq!(format_date("2024-03-15 14:02:26"), "15/03/2024");
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("ayer"), "ayer");
    }
}
