//! Application-level utilities for the Shelf CLI.
//!
//! This module provides:
//! - Path resolution for config and library files
//! - A context that lazily loads configuration and opens the library

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
