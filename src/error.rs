//! Error types for the scoring and simulation engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Request rejections raised by the engine before any computation runs.
///
/// Every failure is reported synchronously with a human-readable reason,
/// never retried, and never partially computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Remediation area was zero or negative
    #[error("Area must be positive")]
    InvalidArea(f64),

    /// AQI outside the supported [0, 500] scale
    #[error("AQI must be between 0 and 500")]
    AqiOutOfRange(i32),

    /// Prediction target is not strictly after the current time
    #[error("Prediction date must be in the future")]
    DateNotInFuture,

    /// Prediction target lies beyond the one-year horizon
    #[error("Prediction date cannot be more than 1 year in the future")]
    DateBeyondHorizon,

    /// Forecast length outside the supported [1, 365] day window
    #[error("Days must be between 1 and 365")]
    DaysOutOfRange(u32),

    /// Yearly forecasts are restricted to a single supported year
    #[error("Currently only {supported} predictions are supported")]
    UnsupportedYear { requested: i32, supported: i32 },

    /// A reading failed a numeric-domain precondition
    #[error("Invalid reading: {0}")]
    InvalidReading(String),
}

impl EngineError {
    /// Create an `InvalidReading` error for a specific field
    #[must_use]
    pub fn invalid_field(field: &str, value: f64) -> Self {
        Self::InvalidReading(format!(
            "{field} must be a non-negative finite number, got {value}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidArea(-2.5);
        assert_eq!(err.to_string(), "Area must be positive");

        let err = EngineError::AqiOutOfRange(501);
        assert_eq!(err.to_string(), "AQI must be between 0 and 500");

        let err = EngineError::UnsupportedYear {
            requested: 2031,
            supported: 2026,
        };
        assert_eq!(
            err.to_string(),
            "Currently only 2026 predictions are supported"
        );

        let err = EngineError::invalid_field("pm25", -3.0);
        assert_eq!(
            err.to_string(),
            "Invalid reading: pm25 must be a non-negative finite number, got -3"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = EngineError::DaysOutOfRange(0);
        let err2 = EngineError::DaysOutOfRange(0);
        let err3 = EngineError::DaysOutOfRange(366);

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
