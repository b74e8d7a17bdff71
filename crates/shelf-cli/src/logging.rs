//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with command output. `SHELF_LOG`
//! takes an env-filter directive and overrides the `-v` count.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an env-filter directive.
pub const LOG_ENV: &str = "SHELF_LOG";

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
