//! Configuration System
//!
//! Loads the dashboard configuration from a TOML file and applies
//! `OCTOFIT_*` environment variable overrides on top.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::resource::DEFAULT_CARD_LIMIT;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub sample_api: SampleApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the resource lists come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

pub fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Cards shown under each table
    #[serde(default = "default_card_limit")]
    pub card_limit: usize,
}

fn default_card_limit() -> usize {
    DEFAULT_CARD_LIMIT
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            card_limit: default_card_limit(),
        }
    }
}

/// Development API server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for SampleApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Resolve the configuration for a binary.
    ///
    /// An explicit path must load. Otherwise the first readable file among
    /// the default locations wins, falling back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Default config file locations, in priority order
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("/etc/octofit/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable numbers are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("OCTOFIT_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("OCTOFIT_REQUEST_TIMEOUT").and_then(|v| v.parse().ok()) {
            self.api.request_timeout_secs = timeout;
        }

        if let Some(host) = lookup("OCTOFIT_SAMPLE_HOST") {
            self.sample_api.host = host;
        }
        if let Some(port) = lookup("OCTOFIT_SAMPLE_PORT").and_then(|v| v.parse().ok()) {
            self.sample_api.port = port;
        }

        if let Some(level) = lookup("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Dashboard Configuration
#
# Environment variables override these settings:
# - OCTOFIT_API_URL
# - OCTOFIT_REQUEST_TIMEOUT
# - OCTOFIT_SAMPLE_HOST
# - OCTOFIT_SAMPLE_PORT
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[api]
# Base URL of the OctoFit REST API
base_url = "http://localhost:8000/api"

# Request timeout in seconds
request_timeout_secs = 30

[dashboard]
# Number of cards shown under each table
card_limit = 6

[sample_api]
# Sample API server host
host = "0.0.0.0"

# Sample API server port
port = 8000

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.dashboard.card_limit, 6);
        assert_eq!(config.sample_api.port, 8000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"https://octofit.example/api\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://octofit.example/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("OCTOFIT_API_URL", "http://10.0.0.5:8000/api"),
            ("OCTOFIT_REQUEST_TIMEOUT", "5"),
            ("OCTOFIT_SAMPLE_PORT", "not-a-port"),
            ("OCTOFIT_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.5:8000/api");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.sample_api.port, 8000);
        assert_eq!(config.logging.format, "json");
    }
}
