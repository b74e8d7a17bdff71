//! UI primitives for the Shelf CLI.
//!
//! This module provides:
//! - **Context**: Terminal snapshot plus display flags for one command
//! - **Mode**: Output mode resolution (json, plain, lines, pretty)
//! - **Theme**: Badge tokens and text styles
//! - **Render**: Tables, headers, receipts, errors
//! - **Format**: String utilities (truncate, single-line)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::{DisplayFlags, UiContext};
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, header, kv, print, print_error, receipt, table, Column};
