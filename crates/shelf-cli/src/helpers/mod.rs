//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - TTY prompting for book fields (`input`)
//! - Output format and yes/no parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{prompt_confirm, prompt_text};
pub use parsing::{parse_output_format, parse_read_answer, OutputFormat};
