//! Vitals error types
//!
//! The core model only fails on malformed input; generation and view
//! building are total over their domains.

use thiserror::Error;

/// Errors raised by the vitals model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VitalsError {
    /// Category token was neither BODY nor MIND
    #[error("Invalid input: unknown category {0:?} (expected BODY or MIND)")]
    UnknownCategory(String),

    /// Series length below zero
    #[error("Invalid input: day count must not be negative, got {0}")]
    NegativeDayCount(i64),

    /// Series length beyond what the generator will build
    #[error("Invalid input: day count {days} exceeds the maximum of {max}")]
    DayCountTooLarge { days: u64, max: usize },
}

impl VitalsError {
    /// Every vitals error belongs to the invalid-input class
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            VitalsError::UnknownCategory(_)
                | VitalsError::NegativeDayCount(_)
                | VitalsError::DayCountTooLarge { .. }
        )
    }
}

/// Result type alias for vitals operations
pub type VitalsResult<T> = Result<T, VitalsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VitalsError::UnknownCategory("SOUL".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: unknown category \"SOUL\" (expected BODY or MIND)"
        );

        let err = VitalsError::NegativeDayCount(-1);
        assert_eq!(
            err.to_string(),
            "Invalid input: day count must not be negative, got -1"
        );

        let err = VitalsError::DayCountTooLarge {
            days: 40_000,
            max: 36_500,
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: day count 40000 exceeds the maximum of 36500"
        );
    }
}
