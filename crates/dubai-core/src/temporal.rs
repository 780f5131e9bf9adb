//! # Content Dates: Lenient Coercion, UTC Storage
//!
//! Authors write dates in front matter however their editor produces
//! them: `2026-01-15`, `2026-01-15T09:30`, full RFC 3339 with an offset,
//! or (from JSON exports) epoch milliseconds. `ContentDate` accepts all of
//! these once, at the validation boundary, and stores a UTC instant.
//!
//! ## Accepted inputs
//!
//! | Input | Interpretation |
//! |-------|----------------|
//! | `2026-01-15T12:00:00+04:00` | RFC 3339, converted to UTC |
//! | `2026-01-15 12:00:00+04:00` | RFC 3339 with a space separator |
//! | `2026-01-15`, `2026/01/15` | midnight UTC |
//! | `January 15, 2026`, `Jan 15, 2026`, `15 January 2026` | midnight UTC |
//! | `2026-01` | first day of the month, midnight UTC |
//! | `2026` | January 1, midnight UTC |
//! | `2026-01-15T12:00[:00[.123]]` | naive, read as UTC |
//! | `1768435200000` (number) | epoch milliseconds |
//!
//! Anything else is rejected with [`DubaiError::MalformedDate`].
//!
//! ## Output
//!
//! Serialized as RFC 3339 with a `Z` suffix. Sub-second digits are only
//! emitted when present.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::DubaiError;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A UTC instant coerced from a date-like author input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentDate(DateTime<Utc>);

impl ContentDate {
    /// Wrap a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse a date string in any of the accepted forms.
    ///
    /// # Errors
    ///
    /// Returns `DubaiError::MalformedDate` if no accepted form matches.
    pub fn parse(s: &str) -> Result<Self, DubaiError> {
        let input = s.trim();
        if input.is_empty() {
            return Err(malformed(s, "empty date string"));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f%:z") {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self(naive.and_utc()));
            }
        }
        let date = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
            .or_else(|| parse_reduced_precision(input));
        if let Some(date) = date {
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| malformed(s, "date has no midnight"))?;
            return Ok(Self(midnight.and_utc()));
        }

        Err(malformed(s, "not a recognized date or date-time"))
    }

    /// Create a date from Unix epoch milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, DubaiError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| malformed(&millis.to_string(), "epoch milliseconds out of range"))
    }

    /// Coerce a raw JSON value: strings are parsed, numbers are epoch
    /// milliseconds, everything else is rejected.
    pub fn coerce(value: &Value) -> Result<Self, DubaiError> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => {
                if let Some(millis) = n.as_i64() {
                    return Self::from_epoch_millis(millis);
                }
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => {
                        Self::from_epoch_millis(f.trunc() as i64)
                    }
                    _ => Err(malformed(&n.to_string(), "epoch milliseconds out of range")),
                }
            }
            other => Err(malformed(
                &other.to_string(),
                "expected a date string or epoch milliseconds",
            )),
        }
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Render as RFC 3339 with `Z` suffix (e.g. `2026-01-15T00:00:00Z`).
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

/// `YYYY` or `YYYY-MM`, read as the first day of the period.
fn parse_reduced_precision(input: &str) -> Option<NaiveDate> {
    if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::from_ymd_opt(input.parse().ok()?, 1, 1);
    }
    NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d").ok()
}

fn malformed(input: &str, reason: &str) -> DubaiError {
    DubaiError::MalformedDate {
        input: format!("{input:?}"),
        reason: reason.to_string(),
    }
}

impl std::fmt::Display for ContentDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for ContentDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for ContentDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_plain_date_is_midnight_utc() {
        let d = ContentDate::parse("2026-01-15").unwrap();
        assert_eq!(d.to_rfc3339(), "2026-01-15T00:00:00Z");
    }

    #[test]
    fn test_rfc3339_offset_converted() {
        let d = ContentDate::parse("2026-01-15T16:00:00+04:00").unwrap();
        assert_eq!(d.to_rfc3339(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_space_separated_with_offset() {
        let d = ContentDate::parse("2026-01-15 16:00:00+04:00").unwrap();
        assert_eq!(d.to_rfc3339(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn test_naive_datetime_read_as_utc() {
        assert_eq!(
            ContentDate::parse("2026-01-15T09:30").unwrap().to_rfc3339(),
            "2026-01-15T09:30:00Z"
        );
        assert_eq!(
            ContentDate::parse("2026-01-15T09:30:15").unwrap().to_rfc3339(),
            "2026-01-15T09:30:15Z"
        );
    }

    #[test]
    fn test_subseconds_preserved() {
        let d = ContentDate::parse("2026-01-15T09:30:15.250Z").unwrap();
        assert_eq!(d.to_rfc3339(), "2026-01-15T09:30:15.250Z");
    }

    #[test]
    fn test_slash_separated_date() {
        let d = ContentDate::parse("2026/01/15").unwrap();
        assert_eq!(d.to_rfc3339(), "2026-01-15T00:00:00Z");
    }

    #[test]
    fn test_month_name_dates() {
        for input in ["January 15, 2026", "Jan 15, 2026", "January 15 2026", "15 January 2026"] {
            let d = ContentDate::parse(input).unwrap();
            assert_eq!(d.to_rfc3339(), "2026-01-15T00:00:00Z", "{input:?}");
        }
    }

    #[test]
    fn test_year_month_is_first_of_month() {
        let d = ContentDate::parse("2026-01").unwrap();
        assert_eq!(d.to_rfc3339(), "2026-01-01T00:00:00Z");
    }

    #[test]
    fn test_year_only_is_first_of_year() {
        let d = ContentDate::parse("2026").unwrap();
        assert_eq!(d.to_rfc3339(), "2026-01-01T00:00:00Z");
    }

    #[test]
    fn test_malformed_strings_rejected() {
        for bad in [
            "next tuesday",
            "",
            "   ",
            "2026-13-01",
            "2026-13",
            "15/01/2026",
            "Q1 2026",
            "Smarch 15, 2026",
        ] {
            let err = ContentDate::parse(bad).unwrap_err();
            assert!(matches!(err, DubaiError::MalformedDate { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_coerce_epoch_millis() {
        let expected = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let d = ContentDate::coerce(&json!(expected.timestamp_millis())).unwrap();
        assert_eq!(*d.as_datetime(), expected);
    }

    #[test]
    fn test_coerce_rejects_non_date_types() {
        assert!(ContentDate::coerce(&json!(true)).is_err());
        assert!(ContentDate::coerce(&json!(null)).is_err());
        assert!(ContentDate::coerce(&json!({"y": 2026})).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let d = ContentDate::parse("2026-03-01").unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2026-03-01T00:00:00Z\"");
        let back: ContentDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_ordering() {
        let earlier = ContentDate::parse("2026-01-15").unwrap();
        let later = ContentDate::parse("2026-01-15T00:00:01Z").unwrap();
        assert!(earlier < later);
    }
}
