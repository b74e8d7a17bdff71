//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying books
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use text::{print_book_list, print_stats};
