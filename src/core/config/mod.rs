//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$STANDUP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/standup/config.toml`
//! 3. `~/.standup/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use standup::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! if let Some(dir) = config.state_dir() {
//!     println!("State dir: {}", dir.display());
//! }
//! ```

pub mod schema;

pub use schema::{GlobalConfig, LogFormat};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "STANDUP_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values. A missing config file is not an error.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Configuration built from already parsed values.
    pub fn from_global(global: GlobalConfig) -> Config {
        Config { global, path: None }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    fn find_config_file() -> Option<PathBuf> {
        let candidates = [
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME")
                .map(|home| PathBuf::from(home).join("standup/config.toml")),
            dirs::home_dir().map(|home| home.join(".standup/config.toml")),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Configured default state directory.
    pub fn state_dir(&self) -> Option<&Path> {
        self.global.state_dir.as_deref()
    }

    /// Configured endpoint override.
    pub fn endpoint_override(&self) -> Option<&str> {
        self.global.endpoint_override.as_deref()
    }

    /// Log format, defaulting to text.
    pub fn log_format(&self) -> LogFormat {
        self.global.log_format.unwrap_or_default()
    }

    /// Path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
