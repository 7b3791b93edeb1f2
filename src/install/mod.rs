//! Cloud installation records as served by the cloud plugin API

pub mod display;

pub use display::{
    can_lock, deletion_locked_install, find_by_id_or_name, find_by_name, locked_count,
    standardize_name,
};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Placeholder shown when an installation has no reachable domain
pub const NO_URL: &str = "No URL";

/// Lifecycle state reported by the provisioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstallationState {
    Stable,
    CreationRequested,
    CreationInProgress,
    CreationFailed,
    UpdateInProgress,
    Hibernating,
    HibernationInProgress,
    WakeUpRequested,
    DeletionRequested,
    DeletionInProgress,
    Deleted,
    /// Any state this client does not know about, kept verbatim
    Other(String),
}

impl InstallationState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Stable => "stable",
            Self::CreationRequested => "creation-requested",
            Self::CreationInProgress => "creation-in-progress",
            Self::CreationFailed => "creation-failed",
            Self::UpdateInProgress => "update-in-progress",
            Self::Hibernating => "hibernating",
            Self::HibernationInProgress => "hibernation-in-progress",
            Self::WakeUpRequested => "wake-up-requested",
            Self::DeletionRequested => "deletion-requested",
            Self::DeletionInProgress => "deletion-in-progress",
            Self::Deleted => "deleted",
            Self::Other(s) => s,
        }
    }

    /// Badge shown next to the installation name
    pub fn badge(&self) -> StateBadge {
        let tone = match self {
            Self::Stable => BadgeTone::Success,
            Self::Hibernating | Self::HibernationInProgress | Self::WakeUpRequested => {
                BadgeTone::Muted
            }
            Self::CreationFailed
            | Self::DeletionRequested
            | Self::DeletionInProgress
            | Self::Deleted => BadgeTone::Danger,
            Self::Other(s) if s.contains("failed") || s.contains("deletion") => BadgeTone::Danger,
            _ => BadgeTone::Pending,
        };
        StateBadge {
            label: self.as_str().replace('-', " "),
            tone,
        }
    }
}

impl Default for InstallationState {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for InstallationState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "stable" => Self::Stable,
            "creation-requested" => Self::CreationRequested,
            "creation-in-progress" => Self::CreationInProgress,
            "creation-failed" => Self::CreationFailed,
            "update-in-progress" => Self::UpdateInProgress,
            "hibernating" => Self::Hibernating,
            "hibernation-in-progress" => Self::HibernationInProgress,
            "wake-up-requested" => Self::WakeUpRequested,
            "deletion-requested" => Self::DeletionRequested,
            "deletion-in-progress" => Self::DeletionInProgress,
            "deleted" => Self::Deleted,
            _ => Self::Other(value),
        }
    }
}

impl From<InstallationState> for String {
    fn from(value: InstallationState) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for InstallationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color family of a state badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Pending,
    Muted,
    Danger,
}

/// Rendered state badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBadge {
    pub label: String,
    pub tone: BadgeTone,
}

/// A DNS record attached to an installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "DomainName", default)]
    pub domain_name: String,
}

/// Which release an installation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release<'a> {
    Version(&'a str),
    Tag(&'a str),
    Unspecified,
}

impl fmt::Display for Release<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Release::Version(v) => write!(f, "Version: {}", v),
            Release::Tag(t) => write!(f, "Tag: {}", t),
            Release::Unspecified => f.write_str("Version: unknown"),
        }
    }
}

/// A provisioned instance of the hosted application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "OwnerID", default)]
    pub owner_id: String,

    #[serde(rename = "State", default)]
    pub state: InstallationState,

    #[serde(rename = "DNSRecords", default, deserialize_with = "null_as_empty")]
    pub dns_records: Vec<DnsRecord>,

    /// Single-domain field sent by older plugin versions
    #[serde(rename = "DNS", default, skip_serializing_if = "String::is_empty")]
    pub dns: String,

    #[serde(rename = "Image", default)]
    pub image: String,

    #[serde(rename = "Version", default)]
    pub version: String,

    #[serde(rename = "Tag", default)]
    pub tag: String,

    #[serde(rename = "Database", default)]
    pub database: String,

    #[serde(rename = "Filestore", default)]
    pub filestore: String,

    #[serde(rename = "Size", default)]
    pub size: String,

    #[serde(rename = "DeletionLocked", default)]
    pub deletion_locked: bool,

    /// Epoch milliseconds, zero when no deletion is scheduled
    #[serde(rename = "ScheduledDeletionTime", default)]
    pub scheduled_deletion_time: i64,

    #[serde(rename = "InstallationLogsURL", default, skip_serializing_if = "String::is_empty")]
    pub installation_logs_url: String,

    #[serde(rename = "ProvisionerLogsURL", default, skip_serializing_if = "String::is_empty")]
    pub provisioner_logs_url: String,
}

impl Installation {
    /// Version wins over tag when the server fills in both
    pub fn release(&self) -> Release<'_> {
        if !self.version.is_empty() {
            Release::Version(&self.version)
        } else if !self.tag.is_empty() {
            Release::Tag(&self.tag)
        } else {
            Release::Unspecified
        }
    }

    /// First reachable domain name, if any
    pub fn primary_domain(&self) -> Option<&str> {
        self.dns_records
            .iter()
            .map(|r| r.domain_name.as_str())
            .find(|d| !d.is_empty())
            .or_else(|| (!self.dns.is_empty()).then_some(self.dns.as_str()))
    }

    /// Link to the installation, or [`NO_URL`]
    pub fn primary_url(&self) -> String {
        match self.primary_domain() {
            Some(domain) => format!("https://{}", domain),
            None => NO_URL.to_string(),
        }
    }

    pub fn scheduled_for_deletion(&self) -> Option<i64> {
        (self.scheduled_deletion_time > 0).then_some(self.scheduled_deletion_time)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal installation for tests
    pub fn install(id: &str, name: &str) -> Installation {
        Installation {
            id: id.to_string(),
            name: name.to_string(),
            owner_id: "user-1".to_string(),
            state: InstallationState::Stable,
            dns_records: vec![DnsRecord {
                domain_name: format!("{}.cloud.example.com", name.to_lowercase()),
            }],
            dns: String::new(),
            image: "mattermost/mattermost-enterprise-edition".to_string(),
            version: "9.5.0".to_string(),
            tag: String::new(),
            database: "aws-rds".to_string(),
            filestore: "aws-s3".to_string(),
            size: "miniSingleton".to_string(),
            deletion_locked: false,
            scheduled_deletion_time: 0,
            installation_logs_url: String::new(),
            provisioner_logs_url: String::new(),
        }
    }
}
