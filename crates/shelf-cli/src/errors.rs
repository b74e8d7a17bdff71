//! CLI error types for structured error handling.
//!
//! Core errors are mapped to `CliError` at the command boundary so each
//! failure carries a user-facing hint and a stable exit code.

use std::fmt;

use shelf_core::ShelfError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Book not found
    NotFound { message: String, hint: String },

    /// Invalid user input (including duplicate titles)
    InvalidInput { message: String, hint: Option<String> },

    /// Library storage could not be read or written
    Storage { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a Storage error with message and hint.
    pub fn storage(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Storage {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. }
            | CliError::InvalidInput { message, .. }
            | CliError::Storage { message, .. } => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } | CliError::Storage { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Storage { .. } => exit_codes::STORAGE_FAILED,
        }
    }
}

impl From<ShelfError> for CliError {
    fn from(err: ShelfError) -> Self {
        match err {
            ShelfError::NotFound(title) => CliError::not_found(
                format!("Book \"{}\" not found in the library", title),
                "Run `shelf list` to see stored titles.",
            ),
            ShelfError::DuplicateTitle(title) => CliError::invalid_input_with_hint(
                format!("Book \"{}\" already exists in the library", title),
                "Titles are unique regardless of case.",
            ),
            ShelfError::InvalidInput(message) => CliError::invalid_input(message),
            ShelfError::Storage(message) => CliError::storage(
                message,
                "Check the library path (--library or SHELF_PATH) and its permissions.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_exit_3() {
        let err = CliError::from(ShelfError::NotFound("dune".into()));
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
        assert!(err.message().contains("dune"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_duplicate_maps_to_invalid_input() {
        let err = CliError::from(ShelfError::DuplicateTitle("dune".into()));
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(err.message().contains("already exists"));
    }

    #[test]
    fn test_storage_maps_to_exit_5() {
        let err = CliError::from(ShelfError::Storage("disk full".into()));
        assert_eq!(err.exit_code(), exit_codes::STORAGE_FAILED);
        assert_eq!(err.to_string(), "disk full");
    }
}
