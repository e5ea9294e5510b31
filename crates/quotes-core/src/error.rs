//! Error types for store operations.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Main error type for quote store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No quote exists at the requested position.
    #[error("no quote at index {index}")]
    NotFound { index: usize },

    /// The requested identifier is not a valid position.
    #[error("invalid quote identifier: {raw}")]
    InvalidIndex { raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound { index: 42 };
        assert_eq!(err.to_string(), "no quote at index 42");

        let err = StoreError::InvalidIndex {
            raw: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid quote identifier: abc");
    }
}
