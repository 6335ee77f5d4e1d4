//! Configuration management for the `MapMind` services
//!
//! Handles loading configuration from an optional TOML file and
//! environment variables, and validates all settings before use.

use crate::MapMindError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `MapMind` services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMindConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Outbound fetch configuration
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default request parameters
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Outbound HTTP fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Default maximum characters returned per fetch
    #[serde(default = "default_max_content_length")]
    pub max_content_length: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default request parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Minimum emotion intensity for emotion searches (0-100)
    #[serde(default = "default_min_intensity")]
    pub min_intensity: f64,
    /// Advisory risk tolerance echoed by routing responses (0-1)
    #[serde(default = "default_risk_tolerance")]
    pub risk_tolerance: f64,
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "MapMind/0.1 (Fetch Service)".to_string()
}

fn default_max_content_length() -> usize {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_min_intensity() -> f64 {
    70.0
}

fn default_risk_tolerance() -> f64 {
    0.5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_fetch_timeout(),
            user_agent: default_user_agent(),
            max_content_length: default_max_content_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_intensity: default_min_intensity(),
            risk_tolerance: default_risk_tolerance(),
        }
    }
}

impl Default for MapMindConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            fetch: FetchConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl MapMindConfig {
    /// Load configuration from `config.toml` and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with MAPMIND_ prefix, e.g.
        // MAPMIND_SERVER_PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("MAPMIND")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: MapMindConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout_seconds == 0 || self.fetch.timeout_seconds > 300 {
            return Err(
                MapMindError::config("Fetch timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.fetch.user_agent.is_empty() {
            return Err(MapMindError::config("Fetch user agent cannot be empty").into());
        }

        if self.fetch.max_content_length == 0 {
            return Err(MapMindError::config("Max content length cannot be zero").into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(MapMindError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(MapMindError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !(0.0..=100.0).contains(&self.defaults.min_intensity) {
            return Err(MapMindError::config("Minimum intensity must be within 0-100").into());
        }

        if !(0.0..=1.0).contains(&self.defaults.risk_tolerance) {
            return Err(MapMindError::config("Risk tolerance must be within 0-1").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapMindConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.fetch.timeout_seconds, 30);
        assert_eq!(config.fetch.max_content_length, 5000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.min_intensity, 70.0);
        assert_eq!(config.defaults.risk_tolerance, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_timeout() {
        let mut config = MapMindConfig::default();
        config.fetch.timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.fetch.timeout_seconds = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_settings() {
        let mut config = MapMindConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = MapMindConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_defaults() {
        let mut config = MapMindConfig::default();
        config.defaults.min_intensity = 150.0;
        assert!(config.validate().is_err());

        let mut config = MapMindConfig::default();
        config.defaults.risk_tolerance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = MapMindConfig::load_from_path(Some(PathBuf::from("/nonexistent/config.toml")))
            .expect("should fall back to defaults");
        assert_eq!(config.server.port, 8080);
    }
}
