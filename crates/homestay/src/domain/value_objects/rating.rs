//! Rating - Bounded review score (1-5)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rating out of bounds error
#[derive(Debug, Error, PartialEq, Eq)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingOutOfRange(pub i32);

/// A review rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i32) -> Result<Self, RatingOutOfRange> {
        if (1..=5).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn value(&self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingOutOfRange(0)));
        assert_eq!(Rating::new(6), Err(RatingOutOfRange(6)));
        assert_eq!(Rating::new(-3), Err(RatingOutOfRange(-3)));
    }
}
