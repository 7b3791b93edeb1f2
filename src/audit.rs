//! Audit trail of actions taken against installations
//!
//! Each lock, unlock or restart is appended as one JSON line to
//! `~/.local/state/cloudctl/audit.log`.

use crate::config::{schema::Config, ConfigManager};
use crate::install::Installation;
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// Mutating actions worth recording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEvent {
    DeletionLock,
    DeletionUnlock,
    Restart,
}

impl AuditEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeletionLock => "installation.lock",
            Self::DeletionUnlock => "installation.unlock",
            Self::Restart => "installation.restart",
        }
    }
}

/// Append-only JSON-lines audit log
pub struct AuditLog {
    enabled: bool,
    path: PathBuf,
}

impl AuditLog {
    pub fn new(config: &Config) -> Self {
        Self {
            enabled: config.general.audit_log,
            path: ConfigManager::audit_log_path(),
        }
    }

    /// Record `event` for `install`.
    ///
    /// Write failures are logged and swallowed.
    pub async fn record(&self, event: AuditEvent, install: &Installation) {
        if !self.enabled {
            return;
        }

        let entry = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event": event.as_str(),
            "data": {
                "installation_id": install.id,
                "name": install.name,
                "owner_id": install.owner_id,
            },
        });

        let mut line = entry.to_string();
        line.push('\n');

        if let Err(e) = self.append(&line).await {
            warn!("Failed to write audit log {}: {}", self.path.display(), e);
        }
    }

    async fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
