//
//  wikitude-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Management
//!
//! Persistent settings for the `wt` CLI, stored as TOML in the platform
//! config directory:
//!
//! - Linux: `~/.config/wt/config.toml`
//! - macOS: `~/Library/Application Support/wt/config.toml`
//! - Windows: `%APPDATA%\wt\config\config.toml`
//!
//! ## Format
//!
//! ```toml
//! [core]
//! endpoint = "https://api.wikitude.com"
//! api_version = "3"
//! poll_interval_ms = 10000
//! poll_timeout_secs = 3600
//! # max_poll_attempts = 120
//! ```
//!
//! Tokens are never written here; see [`crate::auth::KeyringStore`].
//!
//! ## Precedence
//!
//! Command-line flags and `WT_*` environment variables override file values,
//! which override the built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{PollOptions, DEFAULT_ENDPOINT};
use crate::auth::{validate_api_version, DEFAULT_API_VERSION};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "endpoint",
    "api_version",
    "poll_interval_ms",
    "max_poll_attempts",
    "poll_timeout_secs",
];

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
}

/// Settings that shape every client built by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Base URL of the Manager API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value sent in the `X-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Delay between status checks of an asynchronous job.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum number of status checks. Unset means no cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_poll_attempts: Option<u32>,

    /// Overall deadline for a job in seconds. `0` disables the deadline.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_poll_interval_ms() -> u64 {
    10_000
}

fn default_poll_timeout_secs() -> u64 {
    3600
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: None,
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads the configuration from [`Config::config_path`], falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(config)
    }

    /// Rejects poll settings that `set` would refuse.
    fn validate(&self) -> Result<()> {
        if self.core.poll_interval_ms == 0 {
            bail!("poll_interval_ms must be greater than zero");
        }
        if self.core.max_poll_attempts == Some(0) {
            bail!("max_poll_attempts must be at least 1");
        }
        Ok(())
    }

    /// Writes the configuration to [`Config::config_path`].
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Writes the configuration to an explicit path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Poll bounds derived from the `poll_*` settings.
    pub fn poll_options(&self) -> PollOptions {
        let timeout = match self.core.poll_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        PollOptions {
            interval: Duration::from_millis(self.core.poll_interval_ms),
            max_attempts: self.core.max_poll_attempts,
            timeout,
        }
    }

    /// Host part of the configured endpoint, used as the keyring key.
    pub fn endpoint_host(&self) -> String {
        endpoint_host(&self.core.endpoint)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "endpoint" => Some(self.core.endpoint.clone()),
            "api_version" => Some(self.core.api_version.clone()),
            "poll_interval_ms" => Some(self.core.poll_interval_ms.to_string()),
            "max_poll_attempts" => self.core.max_poll_attempts.map(|n| n.to_string()),
            "poll_timeout_secs" => Some(self.core.poll_timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Sets `key` to `value` after validating it.
    ///
    /// Returns `Ok(false)` for an unknown key and an error for a value that
    /// does not fit the key. For `max_poll_attempts`, an empty value or
    /// `"none"` clears the cap.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool> {
        match key {
            "endpoint" => {
                let parsed = url::Url::parse(value)
                    .with_context(|| format!("Invalid endpoint URL '{}'", value))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    bail!("Endpoint must use http or https");
                }
                self.core.endpoint = value.trim_end_matches('/').to_string();
            }
            "api_version" => {
                if !validate_api_version(value) {
                    bail!("Invalid API version '{}'. Expected a number such as 3", value);
                }
                self.core.api_version = value.to_string();
            }
            "poll_interval_ms" => {
                let ms: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid interval '{}'", value))?;
                if ms == 0 {
                    bail!("poll_interval_ms must be greater than zero");
                }
                self.core.poll_interval_ms = ms;
            }
            "max_poll_attempts" => {
                self.core.max_poll_attempts = match value {
                    "" | "none" => None,
                    n => {
                        let attempts: u32 = n
                            .parse()
                            .with_context(|| format!("Invalid attempt count '{}'", n))?;
                        if attempts == 0 {
                            bail!("max_poll_attempts must be at least 1");
                        }
                        Some(attempts)
                    }
                };
            }
            "poll_timeout_secs" => {
                self.core.poll_timeout_secs = value
                    .parse()
                    .with_context(|| format!("Invalid timeout '{}'", value))?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Extracts the host (and port, if any) from an endpoint URL.
///
/// Falls back to the input when it cannot be parsed.
pub fn endpoint_host(endpoint: &str) -> String {
    match url::Url::parse(endpoint) {
        Ok(url) => match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            _ => endpoint.to_string(),
        },
        Err(_) => endpoint.to_string(),
    }
}
