//! Domain error types.

use thiserror::Error;

/// Errors raised by domain validation and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value violated a domain rule.
    #[error("validation error: {0}")]
    Validation(String),

    /// A string could not be parsed into a domain type.
    #[error("parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a validation error.
    ///
    /// # Example
    /// ```
    /// use hptrackr_domain::error::DomainError;
    ///
    /// let err = DomainError::validation("level must be positive");
    /// assert_eq!(err.to_string(), "validation error: level must be positive");
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
