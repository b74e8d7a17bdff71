//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Book not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or a duplicate title.
    pub const INVALID_INPUT: i32 = 4;

    /// Library file unreadable, unwritable, or malformed.
    pub const STORAGE_FAILED: i32 = 5;
}

/// File name of the library inside the data directory.
pub const LIBRARY_FILE_NAME: &str = "library.json";

/// Directory name used under XDG config/data homes.
pub const APP_DIR_NAME: &str = "shelf";
