//! Configuration loading for the relay.
//!
//! Settings are read once at startup from an optional TOML file and the
//! command line, and are immutable afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::matcher::WatchSet;

/// Default RedisQ listen endpoint.
pub const DEFAULT_SOURCE_URL: &str = "https://redisq.zkillboard.com/listen.php";

/// Complete relay configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Entities to watch
    #[serde(default)]
    pub watch: WatchSet,
    /// Outbound webhook settings
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Killfeed source settings
    #[serde(default)]
    pub source: SourceConfig,
}

impl RelayConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Outbound webhook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Webhook URL; empty means print only
    pub url: String,
    /// Per-request timeout in seconds, 0 disables it
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: 10,
        }
    }
}

impl WebhookConfig {
    /// True when messages should be posted, not just printed.
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Killfeed source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Listen endpoint polled for new kills
    pub url: String,
    /// Capacity of the handoff queue between poller and pipeline
    pub queue_capacity: usize,
    /// Pause after a failed fetch, 0 retries immediately
    pub retry_delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            queue_capacity: 64,
            retry_delay_ms: 0,
        }
    }
}

/// Returns the default configuration as a commented TOML document.
pub fn default_config_toml() -> &'static str {
    r#"# killfeed relay configuration

[watch]
# Character, corporation and alliance names or numeric ids.
# Matching is exact and case-sensitive.
characters = []
corporations = []
alliances = []

[webhook]
# Leave empty to only print notifications to stdout.
url = ""
timeout_secs = 10

[source]
url = "https://redisq.zkillboard.com/listen.php"
queue_capacity = 64
retry_delay_ms = 0
"#
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Error that can occur during TOML serialization.
#[derive(Debug, Error)]
#[error("TOML serialize error: {0}")]
pub struct TomlSerializeError(#[from] pub toml::ser::Error);
