//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., the endpoint override
//! must be an http(s) URL).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// state_dir = "/home/me/envs/prod"
/// endpoint_override = "https://ec2.internal.example.com"
/// log_format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default state directory
    pub state_dir: Option<PathBuf>,

    /// Default cloud API endpoint override
    pub endpoint_override: Option<String>,

    /// Log output format
    pub log_format: Option<LogFormat>,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.endpoint_override {
            validate_endpoint(endpoint)?;
        }

        if let Some(dir) = &self.state_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "state_dir must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Check that an endpoint override is an http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let rest = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidValue(format!(
            "invalid endpoint override '{}', must be an http:// or https:// URL",
            endpoint
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: GlobalConfig = toml::from_str(
            r#"
            state_dir = "/envs/prod"
            endpoint_override = "https://ec2.example.com"
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.state_dir, Some(PathBuf::from("/envs/prod")));
        assert_eq!(config.log_format, Some(LogFormat::Json));
        config.validate().unwrap();
    }

    #[test]
    fn empty_config_is_default() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn unknown_log_format_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str(r#"log_format = "xml""#);
        assert!(result.is_err());
    }

    #[test]
    fn endpoint_validation() {
        assert!(validate_endpoint("https://example.com").is_ok());
        assert!(validate_endpoint("http://localhost:4566").is_ok());
        assert!(validate_endpoint("https://").is_err());
        assert!(validate_endpoint("example.com").is_err());
        assert!(validate_endpoint("").is_err());
    }

    #[test]
    fn empty_state_dir_rejected() {
        let config = GlobalConfig {
            state_dir: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
