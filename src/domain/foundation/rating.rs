//! Rating value object for canvas items (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A bounded 1-5 rating used for importance, intensity, relevance,
/// effectiveness and criticality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Ratings at or above this value count as "high".
    pub const HIGH_THRESHOLD: u8 = 4;

    /// Ratings at or below this value count as "low".
    pub const LOW_THRESHOLD: u8 = 2;

    /// Creates a Rating, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Creates a Rating, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("rating", 1, 5, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64 for averaging.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns true for ratings of 4 or 5.
    pub fn is_high(&self) -> bool {
        self.0 >= Self::HIGH_THRESHOLD
    }

    /// Returns true for ratings of 1 or 2.
    pub fn is_low(&self) -> bool {
        self.0 <= Self::LOW_THRESHOLD
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
