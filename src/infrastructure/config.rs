//! Adapter configuration with hierarchical merging.
//!
//! The configuration is constructed once at startup and passed by
//! reference to whatever registers the adapter with the host runtime;
//! nothing mutates it afterwards.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::basic::VERIFY_URL;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid verify_url: {0}. Must be an http(s) URL")]
    InvalidVerifyUrl(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Top-level adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdapterConfig {
    /// Endpoint probed when a user registers their credentials.
    #[serde(default = "default_verify_url")]
    pub verify_url: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_verify_url() -> String {
    VERIFY_URL.to_string()
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            verify_url: default_verify_url(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. lambdatest-auth.yaml (optional project config)
    /// 3. Environment variables (`LT_AUTH_*` prefix, highest priority)
    pub fn load() -> Result<AdapterConfig> {
        let config: AdapterConfig = Figment::new()
            .merge(Serialized::defaults(AdapterConfig::default()))
            .merge(Yaml::file("lambdatest-auth.yaml"))
            .merge(Env::prefixed("LT_AUTH_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<AdapterConfig> {
        let config: AdapterConfig = Figment::new()
            .merge(Serialized::defaults(AdapterConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &AdapterConfig) -> Result<(), ConfigError> {
        if !config.verify_url.starts_with("https://")
            && !config.verify_url.starts_with("http://")
        {
            return Err(ConfigError::InvalidVerifyUrl(config.verify_url.clone()));
        }

        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }

        match config.logging.format.as_str() {
            "json" | "pretty" => {}
            other => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        }

        Ok(())
    }
}
