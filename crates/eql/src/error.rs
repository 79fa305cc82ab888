//! Error types for eql

use thiserror::Error;

/// Result type alias for eql operations
pub type EqlResult<T> = Result<T, EqlError>;

/// Rendering failures.
///
/// Construction never fails; every error surfaces when a tree is rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EqlError {
    /// A literal value has no textual SQL form (e.g. NaN)
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Expression nesting is deeper than the configured limit
    #[error("Expression nesting exceeds max depth {0}")]
    DepthExceeded(usize),
}

impl EqlError {
    /// Create an unsupported value error
    pub fn unsupported_value(message: impl Into<String>) -> Self {
        Self::UnsupportedValue(message.into())
    }

    /// Check if this is an unsupported value error
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValue(_))
    }

    /// Check if this is a depth limit error
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, Self::DepthExceeded(_))
    }
}
