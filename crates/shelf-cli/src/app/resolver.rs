//! Path resolution for config and library files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_library_path, read_config, ShelfConfig};

/// Resolve the config file path, checking SHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SHELF_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if present; a missing file yields defaults.
pub fn load_config() -> anyhow::Result<ShelfConfig> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Ok(ShelfConfig::default());
    }
    read_config(&config_path)
}

/// Resolve the library file path.
///
/// Order: explicit `--library` / `SHELF_PATH`, then `library.path` from the
/// config file, then the XDG data directory default.
pub fn resolve_library_path(
    explicit: Option<&str>,
    config: &ShelfConfig,
) -> anyhow::Result<PathBuf> {
    match configured_library_path(explicit, config) {
        Some(path) => Ok(path),
        None => default_library_path(),
    }
}

/// The library path chosen by flag, env or config; blank values count as unset.
fn configured_library_path(explicit: Option<&str>, config: &ShelfConfig) -> Option<PathBuf> {
    explicit
        .into_iter()
        .chain(config.library.path.as_deref())
        .find(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibrarySection;

    fn config_with_path(path: &str) -> ShelfConfig {
        ShelfConfig {
            library: LibrarySection {
                path: Some(path.to_string()),
            },
            ..ShelfConfig::default()
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = config_with_path("/from/config.json");
        let path = resolve_library_path(Some("/explicit.json"), &config).unwrap();
        assert_eq!(path, PathBuf::from("/explicit.json"));
    }

    #[test]
    fn test_config_path_used_when_no_flag() {
        let config = config_with_path("/from/config.json");
        let path = resolve_library_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_blank_flag_falls_through_to_config() {
        let config = config_with_path("/from/config.json");
        assert_eq!(
            configured_library_path(Some("  "), &config),
            Some(PathBuf::from("/from/config.json"))
        );
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_with_path("  ");
        assert_eq!(configured_library_path(Some(""), &config), None);
        assert_eq!(configured_library_path(None, &ShelfConfig::default()), None);
    }
}
