//! Pure formatting helpers for billing values.
//!
//! These helpers mirror the display conventions of the billing frontends
//! the exports originate from: US short dates and fixed two-decimal
//! currency amounts. All functions are total — missing input produces a
//! fixed fallback rather than an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats a currency amount as a fixed two-decimal string.
///
/// # Arguments
/// * `amount` - The amount, or `None` for a missing value
///
/// # Returns
/// `"0.00"` for `None`; otherwise the amount rounded to two decimal
/// places, halfway cases away from zero (`5.005` rounds to `"5.01"`).
///
/// # Example
/// ```
/// use tabex_rs::types::format_currency;
///
/// assert_eq!(format_currency(None), "0.00");
/// assert_eq!(format_currency(Some(5.0)), "5.00");
/// ```
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        None => "0.00".to_string(),
        // Round in cent space; bare `{:.2}` would round 5.005 down.
        Some(a) => format!("{:.2}", (a * 100.0).round() / 100.0),
    }
}

/// Formats a date value as a US short date (`MM/DD/YYYY`).
///
/// # Arguments
/// * `value` - A date or timestamp string, or `None` for a missing value
///
/// # Returns
/// The empty string for `None` or empty input; the formatted date for
/// parseable input. Unparseable non-empty input passes through unchanged.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(s) if s.is_empty() => String::new(),
        Some(s) => match parse_timestamp(s) {
            Some(dt) => dt.format("%m/%d/%Y").to_string(),
            None => s.to_string(),
        },
    }
}

/// Formats a date value as a US date plus 24-hour time
/// (`MM/DD/YYYY, HH:MM:SS`).
///
/// Null handling matches [`format_date`].
pub fn format_date_time(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(s) if s.is_empty() => String::new(),
        Some(s) => match parse_timestamp(s) {
            Some(dt) => dt.format("%m/%d/%Y, %H:%M:%S").to_string(),
            None => s.to_string(),
        },
    }
}

/// Parses the timestamp formats billing callers hand us.
///
/// Accepts `YYYY-MM-DD` (time defaults to midnight), `YYYY-MM-DD HH:MM:SS`
/// with optional fractional seconds, the `T`-separated variant, and full
/// RFC 3339.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_missing() {
        assert_eq!(format_currency(None), "0.00");
    }

    #[test]
    fn test_format_currency_whole_amount() {
        assert_eq!(format_currency(Some(5.0)), "5.00");
        assert_eq!(format_currency(Some(100.0)), "100.00");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(Some(5.005)), "5.01");
        assert_eq!(format_currency(Some(99.994)), "99.99");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Some(-12.345)), "-12.35");
    }

    #[test]
    fn test_format_date_missing_and_empty() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("")), "");
    }

    #[test]
    fn test_format_date_iso_date() {
        assert_eq!(format_date(Some("2024-01-15")), "01/15/2024");
    }

    #[test]
    fn test_format_date_accepts_timestamps() {
        assert_eq!(format_date(Some("2024-01-15 13:45:09")), "01/15/2024");
        assert_eq!(format_date(Some("2024-01-15T13:45:09Z")), "01/15/2024");
    }

    #[test]
    fn test_format_date_passes_through_unparseable() {
        assert_eq!(format_date(Some("last tuesday")), "last tuesday");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time(None), "");
        assert_eq!(
            format_date_time(Some("2024-01-15 13:45:09")),
            "01/15/2024, 13:45:09"
        );
        assert_eq!(
            format_date_time(Some("2024-01-15")),
            "01/15/2024, 00:00:00"
        );
    }
}
