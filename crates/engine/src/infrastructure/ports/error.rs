//! Error types for character-store operations.

/// Store operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Character not found - includes the name for actionable error messages.
    #[error("character not found: {name}")]
    NotFound { name: String },

    /// Database operation failed - includes operation name for tracing.
    #[error("database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A stored value could not be decoded into a domain type.
    #[error("decode error: {0}")]
    Decode(String),
}

impl StoreError {
    /// Create a NotFound error carrying the character name.
    pub fn not_found(name: impl ToString) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Decode error.
    pub fn decode(message: impl ToString) -> Self {
        Self::Decode(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
