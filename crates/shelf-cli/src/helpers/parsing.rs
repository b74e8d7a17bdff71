//! Parsing helpers for output format and yes/no answers.

use crate::errors::CliError;

/// Output format for book lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table, even when stdout is not a TTY
    Table,
    /// One `<title> by <author> - ...` line per book
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input_with_hint(
            format!("Unsupported format: {}", other),
            "Use --format table or --format plain.",
        )
        .into()),
    }
}

/// Interpret a read-status answer; only "yes" / "y" (any case) mean read.
pub fn parse_read_answer(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "yes" | "y")
}
