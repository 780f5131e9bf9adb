//! # Credibility Score
//!
//! A developer's credibility score is a number in `[0, 100]`, both ends
//! inclusive. The bound is enforced at construction and on deserialization,
//! so a `Developer` record can never carry an out-of-range score.

use serde::{Deserialize, Serialize};

use crate::error::DubaiError;

/// Inclusive lower bound.
pub const MIN_SCORE: f64 = 0.0;
/// Inclusive upper bound.
pub const MAX_SCORE: f64 = 100.0;

/// Range-checked developer credibility score.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CredibilityScore(f64);

impl CredibilityScore {
    /// Construct a score, rejecting NaN, infinities and values outside `[0, 100]`.
    pub fn new(value: f64) -> Result<Self, DubaiError> {
        if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DubaiError::OutOfRange {
                field: "credibility_score",
                value,
                min: MIN_SCORE,
                max: MAX_SCORE,
            })
        }
    }

    /// The score value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CredibilityScore {
    type Error = DubaiError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CredibilityScore> for f64 {
    fn from(score: CredibilityScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for CredibilityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
