//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory and includes:
//! - Backend base URL and request timeout
//! - API token for the backend
//! - Default page size for list screens
//!
//! `HIRETRACK_BASE_URL` and `HIRETRACK_API_TOKEN` override the file, and
//! `HIRETRACK_CONFIG_DIR` relocates the config directory entirely.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::{HiretrackError, Result};

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("", "", "hiretrack"));

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// List screen defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Backend connection configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the ATS REST backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API token sent as a bearer credential
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout: default_timeout(),
        }
    }
}

/// Defaults applied to list screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Rows per page when none is given (default: 25)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    25
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Path of the configuration directory, honoring `HIRETRACK_CONFIG_DIR`.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("HIRETRACK_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        PROJECT_DIRS
            .as_ref()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".hiretrack"))
    }

    /// Path of the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from disk, falling back to defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolved backend base URL: env var first, then config file.
    pub fn base_url(&self) -> Result<String> {
        if let Ok(url) = env::var("HIRETRACK_BASE_URL") {
            return Ok(url);
        }
        self.backend.base_url.clone().ok_or_else(|| {
            HiretrackError::Config(
                "backend base URL not configured. Set HIRETRACK_BASE_URL or run: hiretrack config set backend.base_url <url>".to_string(),
            )
        })
    }

    /// Resolved API token: env var first, then config file.
    pub fn api_token(&self) -> Option<SecretString> {
        if let Ok(token) = env::var("HIRETRACK_API_TOKEN") {
            return Some(SecretString::from(token));
        }
        self.backend
            .api_token
            .as_ref()
            .map(|t| SecretString::from(t.clone()))
    }

    /// Set a configuration value by dot-notation key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend.base_url" => self.backend.base_url = Some(value.to_string()),
            "backend.api_token" => self.backend.api_token = Some(value.to_string()),
            "backend.timeout" => {
                self.backend.timeout = value.parse().map_err(|_| {
                    HiretrackError::Config(format!("invalid timeout '{}': expected seconds", value))
                })?;
            }
            "defaults.page_size" => {
                let size: u32 = value.parse().map_err(|_| {
                    HiretrackError::Config(format!("invalid page size '{}'", value))
                })?;
                if size == 0 {
                    return Err(HiretrackError::Config(
                        "page size must be greater than zero".to_string(),
                    ));
                }
                self.defaults.page_size = size;
            }
            _ => {
                return Err(HiretrackError::Config(format!(
                    "unknown config key '{}'",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Read a configuration value by dot-notation key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "backend.base_url" => Ok(self.backend.base_url.clone().unwrap_or_default()),
            "backend.api_token" => Ok(self
                .backend
                .api_token
                .as_ref()
                .map(|t| mask_sensitive_value(t))
                .unwrap_or_default()),
            "backend.timeout" => Ok(self.backend.timeout.to_string()),
            "defaults.page_size" => Ok(self.defaults.page_size.to_string()),
            _ => Err(HiretrackError::Config(format!(
                "unknown config key '{}'",
                key
            ))),
        }
    }
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
pub fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}
