//! Error types for the SAC Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The pure calculators never return these: malformed calculation input
//! degrades to a non-corresponding result instead. Errors exist at the seams,
//! period parsing at the ingestion boundary and the injected data sources.

use std::fmt;

/// The main error type for the SAC Calculation Engine.
///
/// # Example
///
/// ```
/// use sac_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod {
///     token: "2024-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid period token: 2024-13");
/// ```
#[derive(Debug)]
pub enum EngineError {
    /// A period token could not be parsed as a `YYYY-MM` calendar month.
    InvalidPeriod {
        /// The token that failed to parse.
        token: String,
    },

    /// An injected data source failed to produce its records.
    SourceUnavailable {
        /// The name of the failing source (e.g., "salary_history").
        source: String,
        /// A description of the failure.
        message: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidPeriod { token } => {
                write!(f, "Invalid period token: {token}")
            }
            EngineError::SourceUnavailable { source, message } => {
                write!(f, "Data source '{source}' unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_displays_token() {
        let error = EngineError::InvalidPeriod {
            token: "garbage".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid period token: garbage");
    }

    #[test]
    fn test_source_unavailable_displays_source_and_message() {
        let error = EngineError::SourceUnavailable {
            source: "payroll".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Data source 'payroll' unavailable: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_source_unavailable() -> EngineResult<()> {
            Err(EngineError::SourceUnavailable {
                source: "employees".to_string(),
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_source_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
