//! Configuration management for cloudctl

pub mod schema;

pub use schema::Config;

use crate::error::{CloudError, CloudResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use toml_edit::DocumentMut;
use tracing::{debug, info};

/// Keys accepted by `config set`
pub const VALID_KEYS: &[&str] = &[
    "general.log_format",
    "general.audit_log",
    "server.url",
    "server.plugin_id",
    "server.token",
    "server.user_id",
    "server.timeout_secs",
    "watch.interval_secs",
];

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cloudctl")
            .join("config.toml")
    }

    /// Get the state directory path
    pub fn state_dir() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cloudctl")
    }

    /// Get the audit log path
    pub fn audit_log_path() -> PathBuf {
        Self::state_dir().join("audit.log")
    }

    /// Load configuration, falling back to defaults if the file is missing
    pub async fn load(&self) -> CloudResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> CloudResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CloudError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| CloudError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> CloudResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        self.write(&content).await?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Set a single `section.key` value, keeping the file's comments and layout
    pub async fn set_value(&self, key: &str, value: &str) -> CloudResult<()> {
        let (section, leaf) = key
            .split_once('.')
            .filter(|_| VALID_KEYS.contains(&key))
            .ok_or_else(|| CloudError::User(format!("Unknown config key: {}", key)))?;

        let existing = if self.config_path.exists() {
            fs::read_to_string(&self.config_path).await.map_err(|e| {
                CloudError::io(
                    format!("reading config from {}", self.config_path.display()),
                    e,
                )
            })?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = existing.parse()?;
        doc[section][leaf] = typed_value(key, value)?;

        // Reject edits that would leave an unloadable file behind
        let content = doc.to_string();
        toml::from_str::<Config>(&content).map_err(|e| CloudError::ConfigInvalid {
            path: self.config_path.clone(),
            reason: e.to_string(),
        })?;

        self.ensure_config_dir().await?;
        self.write(&content).await?;

        info!("Set {} in {}", key, self.config_path.display());
        Ok(())
    }

    async fn write(&self, content: &str) -> CloudResult<()> {
        fs::write(&self.config_path, content).await.map_err(|e| {
            CloudError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> CloudResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CloudError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn typed_value(key: &str, value: &str) -> CloudResult<toml_edit::Item> {
    let item = match key {
        "general.audit_log" => toml_edit::value(parse_bool(value)?),
        "server.timeout_secs" | "watch.interval_secs" => toml_edit::value(parse_secs(value)?),
        _ => toml_edit::value(value),
    };
    Ok(item)
}

fn parse_bool(value: &str) -> CloudResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CloudError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_secs(value: &str) -> CloudResult<i64> {
    value
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .map(i64::from)
        .ok_or_else(|| CloudError::User(format!("Invalid number of seconds: {}", value)))
}
