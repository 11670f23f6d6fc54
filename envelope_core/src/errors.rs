//! # Error Types
//!
//! Structured error types for envelope_core. Every failure in the engine is an
//! input or construction error, never an environmental one, so nothing here is
//! retryable. Errors carry enough context for a front end to point at the
//! offending field.
//!
//! ## Example
//!
//! ```rust
//! use envelope_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_ft: f64) -> CalcResult<()> {
//!     if !(span_ft.is_finite() && span_ft > 0.0) {
//!         return Err(CalcError::invalid_parameter(
//!             "span_ft",
//!             span_ft.to_string(),
//!             "Span must be a finite positive length",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for envelope_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for envelope calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric input is non-finite, has the wrong sign, or is zero where it is divided by
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// A sweep produced nothing to reduce over
    #[error("Degenerate result in {operation}: {reason}")]
    DegenerateResult { operation: String, reason: String },

    /// Settings file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateResult error
    pub fn degenerate_result(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DegenerateResult {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input, if this error is about a parameter
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CalcError::DegenerateResult { .. } => "DEGENERATE_RESULT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_parameter(field, value.to_string(), reason))
    }
}
