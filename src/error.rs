//! Custom error types for kakeibo
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for amounts and form input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Amount too large to be formatted without losing precision
    #[error("Amount out of range: {value} exceeds the safe integer range")]
    AmountOutOfRange { value: f64 },

    /// Date string that is not a real `YYYY-MM-DD` calendar date
    #[error("Invalid date: '{input}' (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Unrecognised or malformed session command
    #[error("Command error: {0}")]
    Command(String),
}

impl LedgerError {
    /// Create an "invalid date" error
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Check if this is a validation error (including bad dates and amounts)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidDate { .. } | Self::AmountOutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedgerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = LedgerError::invalid_date("2025-13-01");
        assert_eq!(
            err.to_string(),
            "Invalid date: '2025-13-01' (expected YYYY-MM-DD)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_out_of_range_is_validation() {
        let err = LedgerError::AmountOutOfRange { value: 1e20 };
        assert!(err.is_validation());
        assert!(!LedgerError::Export("x".into()).is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
