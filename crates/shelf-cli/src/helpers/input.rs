//! TTY prompting helpers built on dialoguer.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// Prompt for a line of text on the terminal.
///
/// Empty answers are allowed; book fields other than the title are free text.
pub fn prompt_text(prompt: &str) -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", prompt.to_lowercase(), e))
}

/// Ask a yes/no question on the terminal.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read answer: {}", e))
}
