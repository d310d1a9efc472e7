//! Custom error types for quote-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for quote-cli operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for quote request data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Installment count outside the card network's 1-12 range
    #[error("Invalid installment count: {count} (must be between 1 and 12)")]
    InvalidInstallments { count: u32 },

    /// Negative monetary input where only non-negative amounts are allowed
    #[error("Negative amount for {field}: {amount}")]
    NegativeAmount {
        field: &'static str,
        amount: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Outbound link construction errors
    #[error("Link error: {0}")]
    Link(String),
}

impl QuoteError {
    /// Create a negative-amount error for a named input field
    pub fn negative_amount(field: &'static str, amount: impl ToString) -> Self {
        Self::NegativeAmount {
            field,
            amount: amount.to_string(),
        }
    }

    /// Check if this is an invalid-input error (bad installments or negative amount)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInstallments { .. } | Self::NegativeAmount { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for QuoteError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for QuoteError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for quote-cli operations
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuoteError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_installments_error() {
        let err = QuoteError::InvalidInstallments { count: 13 };
        assert_eq!(
            err.to_string(),
            "Invalid installment count: 13 (must be between 1 and 12)"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_negative_amount_error() {
        let err = QuoteError::negative_amount("transport.cost", "-R$ 10,00");
        assert_eq!(
            err.to_string(),
            "Negative amount for transport.cost: -R$ 10,00"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let quote_err: QuoteError = io_err.into();
        assert!(matches!(quote_err, QuoteError::Io(_)));
    }
}
