//! Top-level application configuration.
//!
//! Configuration is stored in `.sightsee/config.yaml` and includes:
//! - The catalog backend URL
//! - An optional request timeout
//!
//! `SIGHTSEE_BACKEND_URL` overrides the configured URL. The environment is
//! read once, when [`Config::catalog_config`] resolves the client settings.

use std::env;
use std::fs;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogConfig, DEFAULT_BACKEND_URL};
use crate::error::{Result, SightseeError};
use crate::paths::config_file;

/// Environment variable overriding the configured backend URL.
pub const BACKEND_URL_ENV_VAR: &str = "SIGHTSEE_BACKEND_URL";

/// Keys accepted by `config get` / `config set`.
pub const VALID_CONFIG_KEYS: &[&str] = &["backend_url", "request_timeout_secs"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,

    /// Per-request timeout in seconds (unset = wait indefinitely)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            SightseeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        // An empty file parses as YAML null.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = config_file();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                SightseeError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            SightseeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Backend URL from the environment, then the config file, then the default
    pub fn backend_url(&self) -> String {
        if let Ok(url) = env::var(BACKEND_URL_ENV_VAR)
            && !url.trim().is_empty()
        {
            return url.trim().to_string();
        }

        self.backend_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Resolve client settings. `override_url` wins over everything else.
    pub fn catalog_config(&self, override_url: Option<&str>) -> CatalogConfig {
        let base_url = override_url
            .map(str::to_string)
            .unwrap_or_else(|| self.backend_url());
        CatalogConfig {
            base_url,
            request_timeout: self.request_timeout(),
        }
    }

    /// Read one key as a display string
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "backend_url" => Ok(self.backend_url.clone()),
            "request_timeout_secs" => Ok(self.request_timeout_secs.map(|s| s.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set one key from a string value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend_url" => {
                let value = value.trim();
                url::Url::parse(value).map_err(|e| {
                    SightseeError::Config(format!("invalid backend_url '{value}': {e}"))
                })?;
                self.backend_url = Some(value.to_string());
            }
            "request_timeout_secs" => {
                let secs: u64 = value.trim().parse().map_err(|_| {
                    SightseeError::Config(format!(
                        "invalid request_timeout_secs '{value}': expected a whole number of seconds"
                    ))
                })?;
                self.request_timeout_secs = Some(secs);
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> SightseeError {
    SightseeError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_CONFIG_KEYS.join(", ")
    ))
}
