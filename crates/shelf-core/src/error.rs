//! Error types for Shelf core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Storage unreadable, unwritable, or malformed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A book with the same normalized title already exists
    #[error("Book \"{0}\" already exists in the library")]
    DuplicateTitle(String),

    /// No book with the given normalized title
    #[error("Book \"{0}\" not found in the library")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ShelfError {
    /// Whether this error leaves the library untouched and only concerns the
    /// attempted operation (as opposed to a storage failure).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ShelfError::DuplicateTitle(_) | ShelfError::NotFound(_) | ShelfError::InvalidInput(_)
        )
    }
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Storage(format!("malformed library data: {}", err))
    }
}
