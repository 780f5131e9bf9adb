//! Serializers for plain numeric fields (years, floors, page counts).
//!
//! These fields accept any finite number and are stored as `f64`. A whole
//! value is written back as an integer, so an authored `2024` serializes
//! as `2024` rather than `2024.0` and a validated record re-serializes to
//! its input.

use serde::Serializer;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// `serialize_with` helper for required numeric fields.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// `serialize_with` helper for optional numeric fields.
///
/// Pair with `skip_serializing_if = "Option::is_none"`.
pub fn serialize_option_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_number(v, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "serialize_number")]
        year: f64,
        #[serde(serialize_with = "serialize_option_number", skip_serializing_if = "Option::is_none")]
        floors: Option<f64>,
    }

    #[test]
    fn test_whole_values_written_as_integers() {
        let s = Sample {
            year: 2024.0,
            floors: Some(-1.0),
        };
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"{"year":2024,"floors":-1}"#
        );
    }

    #[test]
    fn test_fractional_values_kept() {
        let s = Sample {
            year: 2024.5,
            floors: None,
        };
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"year":2024.5}"#);
    }

    #[test]
    fn test_huge_whole_value_stays_float() {
        let s = Sample {
            year: 1e300,
            floors: None,
        };
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["year"].as_f64(), Some(1e300));
    }
}
