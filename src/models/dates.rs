//! Normalization of request dates to UTC instants.
//!
//! Requests may carry RFC 3339 timestamps, naive date-times or plain dates.
//! Offsets are converted to UTC; values without an offset are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses a date or date-time string into a UTC instant.
///
/// # Examples
///
/// ```
/// use payroll_docs::models::parse_utc_instant;
///
/// let a = parse_utc_instant("2025-03-01").unwrap();
/// let b = parse_utc_instant("2025-03-01T00:00:00").unwrap();
/// let c = parse_utc_instant("2025-03-01T05:30:00+05:30").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// ```
pub fn parse_utc_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde helper for optional request dates.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_optional_utc")]`.
pub fn deserialize_optional_utc<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_utc_instant(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", text))),
    }
}
