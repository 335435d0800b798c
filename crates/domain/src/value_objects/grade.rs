//! Grade value object for exam results

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Highest grade a student can receive
pub const MAX_GRADE: u8 = 10;

/// Grades below this value are failing
pub const PASS_THRESHOLD: u8 = 4;

/// A validated exam grade in the inclusive range 0..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    /// Create a new validated grade.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the value is above 10.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > MAX_GRADE {
            return Err(DomainError::validation(format!(
                "Grade must be between 0 and {}, got {}",
                MAX_GRADE, value
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw grade value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True when the grade is below the pass threshold.
    pub fn is_failing(&self) -> bool {
        self.0 < PASS_THRESHOLD
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Grade {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for value in 0..=MAX_GRADE {
            assert_eq!(Grade::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let err = Grade::new(11).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn failing_threshold() {
        assert!(Grade::new(0).unwrap().is_failing());
        assert!(Grade::new(3).unwrap().is_failing());
        assert!(!Grade::new(4).unwrap().is_failing());
        assert!(!Grade::new(10).unwrap().is_failing());
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let result: Result<Grade, _> = serde_json::from_str("11");
        assert!(result.is_err());
    }
}
