//! Configuration System
//!
//! Handles loading the terminal client's configuration from TOML files and
//! environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_API_BASE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means no client-side timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

/// Token storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_dir")]
    pub token_dir: String,
}

fn default_token_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("studydesk").join("tokens").to_string_lossy().to_string())
        .unwrap_or_else(|| "./.studydesk/tokens".to_string())
}

impl StorageConfig {
    /// Token directory with a leading `~` expanded
    pub fn token_path(&self) -> PathBuf {
        match (self.token_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.token_dir),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_dir: default_token_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
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

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, or the first default location that exists.
    ///
    /// An explicit path must load; default locations that fail are skipped
    /// with a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
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

    /// Candidate config files in search order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("studydesk").join("config.toml"));
        }
        paths.push(PathBuf::from("./studydesk.toml"));
        paths
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("STUDYDESK_API_URL") {
            self.api.base_url = url;
        }
        if let Some(dir) = lookup("STUDYDESK_TOKEN_DIR") {
            self.storage.token_dir = dir;
        }
        if let Some(level) = lookup("STUDYDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("STUDYDESK_LOG_FORMAT") {
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
    r#"# Study Desk Configuration
#
# Environment variables override these settings:
# - STUDYDESK_API_URL
# - STUDYDESK_TOKEN_DIR
# - STUDYDESK_LOG_LEVEL
# - STUDYDESK_LOG_FORMAT

[api]
# Base URL of the learning platform API
base_url = "http://localhost:8000"

# Request timeout in seconds (unset: wait for the network stack)
# request_timeout_secs = 30

[storage]
# Directory holding one file per session token
token_dir = "~/.local/share/studydesk/tokens"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout(), None);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            Path::new("studydesk.toml"),
            "[api]\nrequest_timeout_secs = 5\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(Path::new("default"), &generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.api.request_timeout_secs, None);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Config::parse(Path::new("bad.toml"), "[api\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STUDYDESK_API_URL", "https://learn.example.com"),
            ("STUDYDESK_TOKEN_DIR", "/tmp/tokens"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "https://learn.example.com");
        assert_eq!(config.storage.token_dir, "/tmp/tokens");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studydesk.toml");
        std::fs::write(&path, "[storage]\ntoken_dir = \"/var/tokens\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.storage.token_dir, "/var/tokens");

        let missing = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
