//! Logging setup.
//!
//! Structured logging via `tracing`, with credential redaction applied
//! to any message that could carry authentication material. No file
//! output: the adapter owns no files.

mod redaction;

pub use redaction::CredentialScrubber;

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::LoggingConfig;

/// Initialize the global tracing subscriber from the logging config.
///
/// The `RUST_LOG` environment variable still takes precedence over the
/// configured level, via `EnvFilter`.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let default_level = parse_log_level(&config.level)?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logger: {e}"))?,
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logger: {e}"))?,
    }

    Ok(())
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(anyhow!("Unknown log level: {other}")),
    }
}
