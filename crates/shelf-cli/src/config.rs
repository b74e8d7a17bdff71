use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{APP_DIR_NAME, LIBRARY_FILE_NAME};

#[derive(Debug, Default, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct LibrarySection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSection {
    /// Reader name; skips the name prompt in the menu when set
    pub name: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_library_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(LIBRARY_FILE_NAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR_NAME));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR_NAME))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR_NAME));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR_NAME))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
