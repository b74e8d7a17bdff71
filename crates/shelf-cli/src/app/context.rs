//! Application context for the Shelf CLI.
//!
//! Bundles CLI arguments with lazily-loaded configuration and the UI
//! context, so handlers take a single parameter.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use shelf_core::{JsonFileStore, Library};

use crate::cli::Cli;
use crate::config::ShelfConfig;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_library_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ShelfConfig>,
    library_path: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            library_path: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Build a UI context for a command's output flags.
    pub fn ui(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(self.cli.display_flags(), json, format)
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&ShelfConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Resolved path of the library file.
    pub fn library_path(&self) -> anyhow::Result<&PathBuf> {
        self.library_path.get_or_try_init(|| {
            let path = resolve_library_path(self.cli.library.as_deref(), self.config()?)?;
            debug!(path = %path.display(), "resolved library path");
            Ok(path)
        })
    }

    /// Reader name from config, if configured.
    pub fn reader_name(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.ui.name.as_deref())
    }

    /// Open the library at the resolved path.
    pub fn open_library(&self) -> anyhow::Result<Library<JsonFileStore>> {
        let store = JsonFileStore::new(self.library_path()?.clone());
        let library = Library::open(store).map_err(crate::errors::CliError::from)?;
        Ok(library)
    }
}
