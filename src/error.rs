//! Error types for cloudctl
//!
//! All modules use `CloudResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cloudctl operations
pub type CloudResult<T> = Result<T, CloudError>;

/// All errors that can occur in cloudctl
#[derive(Error, Debug)]
pub enum CloudError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Missing configuration value: {0}")]
    ConfigMissing(&'static str),

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // API errors
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] ureq::Error),

    // Installation errors
    #[error("Installation not found: {0}")]
    InstallationNotFound(String),

    #[error("You may only have at most {max} installations locked for deletion at a time")]
    DeletionLockLimit { max: u32 },

    #[error("Installation {0} is already locked for deletion")]
    AlreadyLocked(String),

    #[error("Installation {0} is not locked for deletion")]
    NotLocked(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML edit error: {0}")]
    TomlEdit(#[from] toml_edit::TomlError),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl CloudError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an API error from a status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if it came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigMissing("server.url") => {
                Some("Run: cloudctl config set server.url https://chat.example.com")
            }
            Self::ConfigMissing("server.user_id") => {
                Some("Run: cloudctl config set server.user_id <your user id>, or pass --user")
            }
            Self::Api { status: 401, .. } => {
                Some("Check server.token or set CLOUDCTL_TOKEN to a valid access token")
            }
            Self::Api { status: 501, .. } => {
                Some("The cloud plugin is installed but not configured on the server")
            }
            Self::DeletionLockLimit { .. } => Some("Unlock another installation first"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CloudError::DeletionLockLimit { max: 2 };
        assert!(err.to_string().contains("at most 2 installations"));
    }

    #[test]
    fn error_hint() {
        let err = CloudError::ConfigMissing("server.url");
        assert!(err.hint().unwrap().contains("server.url"));
        assert_eq!(CloudError::Internal("x".into()).hint(), None);
    }

    #[test]
    fn not_found_only_for_404() {
        assert!(CloudError::api(404, "missing").is_not_found());
        assert!(!CloudError::api(500, "boom").is_not_found());
        assert!(!CloudError::User("nope".into()).is_not_found());
    }
}
