//! Unified error types for vinoteca
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from record store operations
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid characteristic value (must be 0-100)
    #[error("Invalid characteristic value: {0} (must be 0-100)")]
    InvalidCharacteristicValue(u8),

    /// Invalid rating value (must be 1-5)
    #[error("Invalid rating: {0} (must be 1-5 stars)")]
    InvalidRating(u8),

    /// Invalid vintage string
    #[error("Invalid vintage: {0:?} (expected a 4-digit year)")]
    InvalidVintage(String),

    /// Wine name is empty or too long
    #[error("Invalid wine name: {0}")]
    InvalidName(String),

    /// A free-text field exceeds its length limit
    #[error("Field '{field}' too long: {len} chars (max {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Errors from record store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a record file
    #[error("Failed to read record: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse a record file
    #[error("Failed to parse record: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize a record
    #[error("Failed to serialize record: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// JSON export failed
    #[error("JSON export error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Record not found by id
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Record failed validation before persisting
    #[error("Record validation failed: {0}")]
    Validation(#[from] DomainError),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = DomainError::InvalidCharacteristicValue(150);
        assert_eq!(
            err.to_string(),
            "Invalid characteristic value: 150 (must be 0-100)"
        );
    }

    #[test]
    fn test_field_too_long_display() {
        let err = DomainError::FieldTooLong {
            field: "notes",
            len: 1200,
            max: 1000,
        };
        assert!(err.to_string().contains("notes"));
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_error_conversion() {
        let domain_err = DomainError::InvalidRating(9);
        let app_err: AppError = domain_err.into();
        assert!(matches!(app_err, AppError::Domain(_)));
    }
}
