//! Configuration loading
//!
//! Per-field resolution priority:
//! 1. Environment variable (`BASELINE_*`, highest priority)
//! 2. TOML config file (explicit path, or `baseline/config.toml` under the
//!    platform config directory)
//! 3. Compiled default

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

const DEFAULT_BIND_HOST: &str = "127.0.0.1";
const DEFAULT_BIND_PORT: u16 = 5870;
const DEFAULT_API_BASE_URL: &str = "https://api.webstatus.dev";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "baseline-ui/0.1.0 (https://github.com/baseline-badge/baseline)";

/// Badge service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_host: String,
    /// Port the HTTP server binds to
    pub bind_port: u16,
    /// Base URL of the compatibility-data API
    pub api_base_url: String,
    /// Outbound request timeout in seconds
    pub request_timeout_secs: u64,
    /// User agent sent with outbound requests
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            bind_port: DEFAULT_BIND_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse; a missing file at the default
    /// platform location is not an error and falls back to compiled defaults.
    /// Environment overrides apply last either way.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("BASELINE_BIND_HOST") {
            self.bind_host = value;
        }
        if let Ok(value) = std::env::var("BASELINE_BIND_PORT") {
            match value.parse() {
                Ok(port) => self.bind_port = port,
                Err(_) => tracing::warn!(value = %value, "Ignoring invalid BASELINE_BIND_PORT"),
            }
        }
        if let Ok(value) = std::env::var("BASELINE_API_BASE_URL") {
            self.api_base_url = value;
        }
        if let Ok(value) = std::env::var("BASELINE_REQUEST_TIMEOUT_SECS") {
            match value.parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => {
                    tracing::warn!(value = %value, "Ignoring invalid BASELINE_REQUEST_TIMEOUT_SECS")
                }
            }
        }
        if let Ok(value) = std::env::var("BASELINE_USER_AGENT") {
            self.user_agent = value;
        }
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}

/// Default configuration file path for the platform
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("baseline").join("config.toml"))
}
