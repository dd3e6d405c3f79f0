use std::path::PathBuf;

use envmon_server::env::{parse_var, InvalidVar};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Invalid(#[from] InvalidVar),
}

/// Ingestion server configuration loaded from environment variables.
///
/// All fields have defaults suitable for a sensor gateway on a LAN.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Record store file (default: `sensor_data.csv`).
    pub store_path: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl IngestConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default            |
    /// |------------------------|--------------------|
    /// | `HOST`                 | `0.0.0.0`          |
    /// | `PORT`                 | `5000`             |
    /// | `STORE_PATH`           | `sensor_data.csv`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_var(&lookup, "PORT", 5000, "u16")?,
            store_path: lookup("STORE_PATH")
                .unwrap_or_else(|| "sensor_data.csv".into())
                .into(),
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "u64")?,
        })
    }
}
