//! Configuration management for MemberDash.
//!
//! Settings are stored as TOML in the platform config directory. Only UI
//! preferences live here; member records are session-only and never
//! persisted.

mod settings;

pub use settings::{Settings, ViewMode};

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The config file could not be read.
    #[error("could not read config file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config file could not be written.
    #[error("could not write config file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The config file is not valid TOML.
    #[error("could not parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The settings could not be serialized.
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A theme name in the settings file is not in the closed theme set.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// UI settings.
    pub settings: Settings,
}

impl Config {
    /// Load the configuration from the default path.
    ///
    /// A missing file is not an error; defaults are returned.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load the configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(Self { settings })
    }

    /// Save the configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        let content = toml::to_string_pretty(&self.settings)?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// The default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("memberdash").join("config.toml"))
    }

    /// Load with a fallback to defaults, logging any failure.
    ///
    /// Used at startup where a broken settings file should not prevent the
    /// application from running.
    pub fn load_or_default() -> Self {
        Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using default: {}", e);
            Config::default()
        })
    }
}
