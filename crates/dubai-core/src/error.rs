//! # Error Types
//!
//! Errors raised while constructing domain primitives from untrusted
//! author input. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.

use thiserror::Error;

/// Top-level error type for the domain primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DubaiError {
    /// A string did not name any variant of a closed enum.
    #[error("{value:?} is not an allowed {field} value (expected one of: {allowed})")]
    UnknownVariant {
        /// Name of the enumerated field (e.g. "project status").
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated allowed spellings.
        allowed: String,
    },

    /// A bounded numeric fell outside its range.
    #[error("{field} must be between {min} and {max} inclusive, got {value}")]
    OutOfRange {
        /// Name of the bounded field.
        field: &'static str,
        /// The rejected input.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A date-like input could not be coerced into a `ContentDate`.
    #[error("malformed date {input}: {reason}")]
    MalformedDate {
        /// The rejected input, rendered for display.
        input: String,
        /// Why coercion failed.
        reason: String,
    },
}

impl DubaiError {
    /// Build an `UnknownVariant` error from the list of allowed spellings.
    pub fn unknown_variant(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self::UnknownVariant {
            field,
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }
}
