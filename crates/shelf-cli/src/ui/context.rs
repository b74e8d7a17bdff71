//! Terminal detection and the per-command UI context.
//!
//! `Terminal::probe` reads the process environment once; `UiContext::new`
//! is a pure function of that snapshot plus the command's flags.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::helpers::OutputFormat;

const DEFAULT_WIDTH: usize = 80;

/// What the process can see of its terminal.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    /// Columns, when known
    pub width: Option<usize>,
}

impl Terminal {
    pub fn probe() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            width: columns_from_env().or_else(columns_from_tty),
        }
    }
}

/// Global display flags (`--no-color`, `--ascii`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFlags {
    pub no_color: bool,
    pub ascii: bool,
}

/// Rendering decisions for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Both stdin and stdout are terminals, so dialoguer prompts may run
    pub interactive: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    pub fn new(
        terminal: &Terminal,
        flags: DisplayFlags,
        json: bool,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            color: terminal.stdout_tty && !terminal.dumb && !terminal.no_color && !flags.no_color,
            unicode: !flags.ascii,
            interactive: terminal.stdout_tty && terminal.stdin_tty,
            width: terminal.width.unwrap_or(DEFAULT_WIDTH),
            mode: OutputMode::resolve(json, format, terminal.stdout_tty, terminal.dumb),
        }
    }

    /// Probe the terminal and build a context.
    pub fn from_env(flags: DisplayFlags, json: bool, format: Option<OutputFormat>) -> Self {
        Self::new(&Terminal::probe(), flags, json, format)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .parse::<usize>()
        .ok()
        .filter(|cols| *cols > 0)
}

#[cfg(unix)]
fn columns_from_tty() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into the winsize we hand it
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: the ioctl succeeded, so the struct is initialized
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn columns_from_tty() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            stdin_tty: true,
            dumb: false,
            no_color: false,
            width: Some(120),
        }
    }

    #[test]
    fn test_tty_gets_color_tables_and_prompts() {
        let ui = UiContext::new(&tty(), DisplayFlags::default(), false, None);
        assert!(ui.color);
        assert!(ui.unicode);
        assert!(ui.is_interactive());
        assert_eq!(ui.width, 120);
        assert_eq!(ui.mode, OutputMode::Pretty);
    }

    #[test]
    fn test_pipe_is_plain_and_colorless() {
        let ui = UiContext::new(&Terminal::default(), DisplayFlags::default(), false, None);
        assert!(!ui.color);
        assert!(!ui.is_interactive());
        assert_eq!(ui.width, DEFAULT_WIDTH);
        assert_eq!(ui.mode, OutputMode::Plain);
    }

    #[test]
    fn test_piped_stdin_disables_prompts() {
        let terminal = Terminal {
            stdin_tty: false,
            ..tty()
        };
        let ui = UiContext::new(&terminal, DisplayFlags::default(), false, None);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn test_flags_and_no_color_env() {
        let flags = DisplayFlags {
            no_color: true,
            ascii: true,
        };
        let ui = UiContext::new(&tty(), flags, false, None);
        assert!(!ui.color);
        assert!(!ui.unicode);

        let terminal = Terminal {
            no_color: true,
            ..tty()
        };
        assert!(!UiContext::new(&terminal, DisplayFlags::default(), false, None).color);
    }

    #[test]
    fn test_json_flag_reaches_mode() {
        let ui = UiContext::new(&tty(), DisplayFlags::default(), true, None);
        assert_eq!(ui.mode, OutputMode::Json);
    }
}
