use crate::error::{FetchError, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub ascii_path: Option<String>,
    pub ascii_distro: Option<String>,
    pub disable: Vec<String>,
    pub ascii_colors: Vec<String>,
    pub show_terminal: bool,
    pub show_disk: bool,
}

impl DisplayConfig {
    /// `ascii_path` with a leading `~` expanded
    pub fn expanded_ascii_path(&self) -> Option<PathBuf> {
        self.ascii_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(expand_path)
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("minifetch/config.toml"))
}

/// Load the user's config, falling back to defaults when there is none
pub fn load_config() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_data = std::fs::read_to_string(path)?;
    parse_config(&config_data)
        .map_err(|e| FetchError::Config(format!("{}: {}", path.display(), e)))
}

pub fn parse_config(config_data: &str) -> Result<Config> {
    toml::de::from_str(config_data).map_err(|e| FetchError::Config(e.to_string()))
}
