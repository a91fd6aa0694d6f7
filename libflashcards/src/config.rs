//! Configuration management for Flashcards
//!
//! Settings come from a TOML file, then environment overrides. A missing
//! file is not an error: every section has a built-in default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub review: ReviewConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file; `~` is expanded
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Skip the question currently shown when picking the next one
    pub avoid_repeat: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Use colors?
    pub colors: bool,

    /// Width of the card box in columns
    pub box_width: u16,

    /// Maximum characters accepted by the question/answer input
    pub input_char_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "~/.local/share/flashcards/cards.db".to_string(),
        }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self { avoid_repeat: true }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            colors: true,
            box_width: 16,
            input_char_limit: 250,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Ok(Self::load_or_default(&config_path)?.with_env_overrides())
    }

    /// Load configuration from a specific path, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Apply `FLASHCARDS_DB`, `FLASHCARDS_TICK_MS`, `NO_COLOR` and `FLASHCARDS_NO_COLOR`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("FLASHCARDS_DB") {
            if !path.trim().is_empty() {
                self.storage.path = path;
            }
        }

        if let Some(tick) = std::env::var("FLASHCARDS_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.tick_rate_ms = tick;
        }

        if std::env::var("NO_COLOR").is_ok() || std::env::var("FLASHCARDS_NO_COLOR").is_ok() {
            self.ui.colors = false;
        }

        self
    }

    /// Database path with `~` expanded
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.storage.path).to_string())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("FLASHCARDS_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("flashcards").join("config.toml"))
}
