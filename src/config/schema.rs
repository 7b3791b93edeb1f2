//! Configuration schema for cloudctl
//!
//! Configuration is stored at `~/.config/cloudctl/config.toml`

use crate::error::{CloudError, CloudResult};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Chat server and plugin connection
    pub server: ServerConfig,

    /// Watch mode settings
    pub watch: WatchConfig,
}

impl Config {
    /// Ensure the server connection is usable
    pub fn validate_server(&self) -> CloudResult<()> {
        if self.server.url.trim().is_empty() {
            return Err(CloudError::ConfigMissing("server.url"));
        }
        Ok(())
    }

    /// User whose installations are listed by default
    pub fn user_id(&self) -> CloudResult<&str> {
        let user = self.server.user_id.trim();
        if user.is_empty() {
            return Err(CloudError::ConfigMissing("server.user_id"));
        }
        Ok(user)
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,

    /// Record lock, unlock and restart actions
    pub audit_log: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
            audit_log: true,
        }
    }
}

/// Where the cloud plugin lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Chat server base URL
    pub url: String,

    /// Plugin ID the API routes are mounted under
    pub plugin_id: String,

    /// Personal access token
    pub token: String,

    /// Default user ID
    pub user_id: String,

    /// Transport timeout per request
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            plugin_id: "com.mattermost.cloud".to_string(),
            token: String::new(),
            user_id: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Watch mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds between refreshes
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 15 }
    }
}
