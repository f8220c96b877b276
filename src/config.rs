// ABOUTME: Application configuration loaded from TOML, environment and command line overrides

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const BACKEND_URL_ENV: &str = "PDF_CHAT_BACKEND_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "PDF_CHAT_REQUEST_TIMEOUT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the ingestion and question-answering service
    pub backend_url: String,
    /// Per-request timeout; unset means wait as long as the backend needs
    pub request_timeout_secs: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: None,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pdf-chat").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the config file, then applies environment overrides.
    ///
    /// An explicitly given path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::read(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_overrides_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.backend_url = url.trim().to_string();
        }
        if let Some(secs) = lookup(REQUEST_TIMEOUT_ENV).and_then(|v| v.trim().parse().ok()) {
            self.request_timeout_secs = Some(secs);
        }
    }

    pub fn with_backend_url(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        self
    }

    pub fn with_timeout(mut self, secs: Option<u64>) -> Self {
        if secs.is_some() {
            self.request_timeout_secs = secs;
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            BaseDirs::new()
                .map(|dirs| dirs.home_dir().join(".pdf-chat").join("logs"))
                .unwrap_or_else(|| PathBuf::from(".pdf-chat/logs"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn reads_partial_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend_url = \"http://example.test:9000\"\n").unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(
            config,
            Config {
                backend_url: "http://example.test:9000".to_string(),
                request_timeout_secs: None,
                log_dir: None,
            }
        );
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend_url = [").unwrap();

        assert!(matches!(Config::read(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn environment_overrides_file_values() {
        let vars: HashMap<&str, &str> = [
            (BACKEND_URL_ENV, " http://override:1234 "),
            (REQUEST_TIMEOUT_ENV, "45"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend_url, "http://override:1234");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides_from(|key| match key {
            BACKEND_URL_ENV => Some("  ".to_string()),
            _ => Some("soon".to_string()),
        });
        assert_eq!(config, Config::default());
    }

    #[test]
    fn cli_values_win() {
        let config = Config::default()
            .with_backend_url(Some("http://cli:1".to_string()))
            .with_timeout(Some(10));
        assert_eq!(config.backend_url, "http://cli:1");
        assert_eq!(config.request_timeout_secs, Some(10));

        let untouched = Config::default().with_backend_url(None).with_timeout(None);
        assert_eq!(untouched, Config::default());
    }
}
