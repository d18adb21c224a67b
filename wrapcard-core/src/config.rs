//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/wrapcard/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/wrapcard/` (~/.config/wrapcard/)
//! - State/Logs: `$XDG_STATE_HOME/wrapcard/` (~/.local/state/wrapcard/)

use crate::error::{Error, Result};
use crate::gradients::{GradientTable, DEFAULT_FALLBACK_BACKGROUND};
use crate::render::{current_year_label, CardSettings, DEFAULT_WATERMARK};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Card constants (year label, watermark, fallback background)
    #[serde(default)]
    pub card: CardConfig,

    /// Gradient overrides, merged over the built-in table
    #[serde(default)]
    pub gradients: BTreeMap<String, String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Constants shown on every card
#[derive(Debug, Deserialize)]
pub struct CardConfig {
    /// Year label in the header; defaults to the current local year
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<String>,

    /// Footer branding string
    #[serde(default = "default_watermark")]
    pub watermark: String,

    /// Background used for gradient keys with no table entry
    #[serde(default = "default_fallback_background")]
    pub fallback_background: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            year: None,
            watermark: default_watermark(),
            fallback_background: default_fallback_background(),
        }
    }
}

fn default_watermark() -> String {
    DEFAULT_WATERMARK.to_string()
}

fn default_fallback_background() -> String {
    DEFAULT_FALLBACK_BACKGROUND.to_string()
}

/// Accepts `year = 2025` as well as `year = "2025"`.
fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i64),
        Text(String),
    }

    Ok(Option::<Year>::deserialize(deserializer)?.map(|year| match year {
        Year::Number(n) => n.to_string(),
        Year::Text(s) => s,
    }))
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Gradient table: built-ins, then `[gradients]` overrides, then fallback.
    pub fn gradient_table(&self) -> GradientTable {
        GradientTable::builtin()
            .with_overrides(self.gradients.clone())
            .with_fallback(self.card.fallback_background.clone())
    }

    /// Settings the renderer consumes.
    pub fn card_settings(&self) -> CardSettings {
        CardSettings {
            year_label: self.card.year.clone().unwrap_or_else(current_year_label),
            watermark: self.card.watermark.clone(),
            gradients: self.gradient_table(),
        }
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/wrapcard/config.toml` (~/.config/wrapcard/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("wrapcard").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/wrapcard/` (~/.local/state/wrapcard/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("wrapcard")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/wrapcard/wrapcard.log` (~/.local/state/wrapcard/wrapcard.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("wrapcard.log")
    }
}
