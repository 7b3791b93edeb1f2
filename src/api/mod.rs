//! Client capability for the cloud plugin's HTTP API

#[cfg(test)]
pub(crate) mod fake;
pub mod http;

pub use http::HttpClient;

use crate::error::CloudResult;
use crate::install::Installation;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Plugin settings the client needs to know about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfiguration {
    /// How many installations one person may lock against deletion
    #[serde(
        rename = "DeletionLockInstallationsAllowedPerPerson",
        default = "default_locks_allowed"
    )]
    pub deletion_locks_allowed: u32,
}

fn default_locks_allowed() -> u32 {
    1
}

impl Default for PluginConfiguration {
    fn default() -> Self {
        Self {
            deletion_locks_allowed: default_locks_allowed(),
        }
    }
}

/// Body of the deletion lock and unlock requests
#[derive(Debug, Serialize)]
pub struct InstallationIdRequest<'a> {
    pub installation_id: &'a str,
}

/// Body of the restart request
#[derive(Debug, Serialize)]
pub struct InstallationNameRequest<'a> {
    pub installation_name: &'a str,
}

/// Operations offered by the cloud plugin.
///
/// Every failure carries the HTTP status the server answered with, see
/// [`crate::CloudError::status`].
#[async_trait]
pub trait InstallsApi: Send + Sync {
    /// Installations owned by `user_id`
    async fn get_user_installs(&self, user_id: &str) -> CloudResult<Vec<Installation>>;

    /// Installations shared with everyone
    async fn get_shared_installs(&self) -> CloudResult<Vec<Installation>>;

    async fn deletion_lock_installation(&self, installation_id: &str) -> CloudResult<()>;

    async fn deletion_unlock_installation(&self, installation_id: &str) -> CloudResult<()>;

    async fn restart_installation(&self, name: &str) -> CloudResult<()>;

    async fn get_plugin_configuration(&self) -> CloudResult<PluginConfiguration>;
}
