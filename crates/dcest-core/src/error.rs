//! Unified error types for the dcest crates.
//!
//! This module provides a common error type [`EstError`] that can represent
//! errors from any part of the system. Domain-specific failures convert to
//! `EstError` for uniform handling at API boundaries.
//!
//! # Example
//!
//! ```ignore
//! use dcest_core::{EstError, EstResult};
//!
//! fn run_profile(path: &str) -> EstResult<()> {
//!     let config = load_profile(path)?;
//!     estimate(&config)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all estimator operations.
///
/// Every estimation call either returns a complete, consistent result or
/// fails fast with one of these variants; there is no partial result.
#[derive(Error, Debug)]
pub enum EstError {
    /// I/O errors (profile files, output files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration: a precondition on the inputs does not hold
    /// (non-positive capacity, out-of-range ratio, missing load figure)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using EstError.
pub type EstResult<T> = Result<T, EstError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for EstError {
    fn from(err: anyhow::Error) -> Self {
        EstError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for EstError {
    fn from(s: String) -> Self {
        EstError::Other(s)
    }
}

impl From<&str> for EstError {
    fn from(s: &str) -> Self {
        EstError::Other(s.to_string())
    }
}

// JSON serialization errors
impl From<serde_json::Error> for EstError {
    fn from(err: serde_json::Error) -> Self {
        EstError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstError::Config("UPS lineup capacity must be positive".into());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("UPS lineup"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "profile not found");
        let err: EstError = io_err.into();
        assert!(matches!(err, EstError::Io(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> EstResult<()> {
            Err(EstError::Validation("test".into()))
        }

        fn outer() -> EstResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
