//! Error types for the timer library.

use thiserror::Error;

/// Error type for all timer operations.
///
/// The domain is deliberately small: the only fallible user input is the new
/// cycle form, so validation failures make up the entire taxonomy. Store
/// mutations and tick processing are total functions with defined no-op
/// behavior when no cycle is active.
#[derive(Error, Debug)]
pub enum TimerError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TimerError {
        TimerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TimerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;
