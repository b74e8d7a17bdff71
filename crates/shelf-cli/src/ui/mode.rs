//! Output mode routing.

use crate::helpers::OutputFormat;

/// How a command renders books, receipts and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `--json`: machine-readable output only
    Json,
    /// Tab-separated rows and `key=value` lines, for scripts
    #[default]
    Plain,
    /// One `<title> by <author> - ...` line per book
    Lines,
    /// Headed, aligned tables and styled `Key: value` lines
    Pretty,
}

impl OutputMode {
    /// Pick a mode from the output flags and the terminal.
    ///
    /// `--json` wins over everything. An explicit `--format` wins over the
    /// terminal, so `--format table` draws a table even into a pipe. With
    /// neither, a TTY gets tables unless `TERM=dumb`.
    pub fn resolve(
        json: bool,
        format: Option<OutputFormat>,
        stdout_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Lines,
            Some(OutputFormat::Table) => Self::Pretty,
            None if stdout_tty && !term_is_dumb => Self::Pretty,
            None => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
