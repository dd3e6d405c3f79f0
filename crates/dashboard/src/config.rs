use std::path::PathBuf;

use envmon_core::error::CoreError;
use envmon_core::thresholds::ThresholdConfig;
use envmon_server::env::{parse_var, InvalidVar};

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Invalid(#[from] InvalidVar),

    #[error("Failed to read thresholds file {}: {source}", path.display())]
    ThresholdsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid thresholds file {}: {source}", path.display())]
    Thresholds { path: PathBuf, source: CoreError },
}

/// Dashboard server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8050`).
    pub port: u16,
    /// Record store file (default: `sensor_data.csv`).
    pub store_path: PathBuf,
    /// Optional JSON file overriding the built-in thresholds.
    pub thresholds_file: Option<PathBuf>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default            |
    /// |------------------------|--------------------|
    /// | `HOST`                 | `127.0.0.1`        |
    /// | `PORT`                 | `8050`             |
    /// | `STORE_PATH`           | `sensor_data.csv`  |
    /// | `THRESHOLDS_FILE`      | unset              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port: parse_var(&lookup, "PORT", 8050, "u16")?,
            store_path: lookup("STORE_PATH")
                .unwrap_or_else(|| "sensor_data.csv".into())
                .into(),
            thresholds_file: lookup("THRESHOLDS_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "u64")?,
        })
    }

    /// Thresholds from `thresholds_file`, or the built-in defaults.
    pub fn load_thresholds(&self) -> Result<ThresholdConfig, ConfigError> {
        let Some(path) = &self.thresholds_file else {
            return Ok(ThresholdConfig::default());
        };

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ThresholdsIo {
            path: path.clone(),
            source,
        })?;
        ThresholdConfig::from_json(&json).map_err(|source| ConfigError::Thresholds {
            path: path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;
    use envmon_core::sensor::Sensor;
    use envmon_core::thresholds::Bound;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_serve_locally() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8050);
        assert!(config.thresholds_file.is_none());
        assert_eq!(config.load_thresholds().unwrap(), ThresholdConfig::default());
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = DashboardConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_SECS", "-1")]))
            .unwrap_err();
        assert_matches!(
            err,
            ConfigError::Invalid(InvalidVar {
                name: "REQUEST_TIMEOUT_SECS",
                ..
            })
        );
    }

    #[test]
    fn thresholds_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thresholds.json");
        std::fs::write(
            &path,
            r#"[{"sensor": "sound", "bound": {"warning": 70}, "unit": "dB", "weight": 1.0}]"#,
        )
        .unwrap();

        let config = DashboardConfig::from_lookup(lookup(&[(
            "THRESHOLDS_FILE",
            path.to_str().unwrap(),
        )]))
        .unwrap();
        let thresholds = config.load_thresholds().unwrap();
        assert_eq!(thresholds.get(Sensor::Sound).unwrap().bound, Bound::Warning(70.0));
    }

    #[test]
    fn invalid_thresholds_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thresholds.json");
        std::fs::write(
            &path,
            r#"[{"sensor": "sound", "bound": {"warning": 70}, "unit": "dB", "weight": 0.5}]"#,
        )
        .unwrap();

        let config = DashboardConfig {
            thresholds_file: Some(path),
            ..DashboardConfig::from_lookup(lookup(&[])).unwrap()
        };
        assert_matches!(config.load_thresholds(), Err(ConfigError::Thresholds { .. }));

        let missing = DashboardConfig {
            thresholds_file: Some(dir.path().join("absent.json")),
            ..config
        };
        assert_matches!(missing.load_thresholds(), Err(ConfigError::ThresholdsIo { .. }));
    }
}
