//! Signed-in user lookup for the identity header.

use std::path::{Path, PathBuf};

use prepbot_config::schema::IdentityConfig;
use prepbot_config::toml_loader::default_user_file_path;
use serde::Deserialize;
use tracing::debug;

/// The persisted user record written by the sign-in flow.
///
/// Only `email` matters here; any other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub email: Option<String>,
}

/// Where the identity header value comes from.
#[derive(Debug, Clone)]
pub enum IdentitySource {
    /// Send no identity header.
    Anonymous,
    /// Always send this email.
    Static(String),
    /// Read the user record from this JSON file on every request.
    File(PathBuf),
}

impl IdentitySource {
    /// An explicit email wins, then an explicit record path, then the
    /// platform default record path.
    pub fn from_config(config: &IdentityConfig) -> Self {
        if let Some(ref email) = config.email {
            return Self::Static(email.clone());
        }
        match config.user_file.clone().or_else(default_user_file_path) {
            Some(path) => Self::File(path),
            None => Self::Anonymous,
        }
    }

    /// Resolve the email to send, if any. Never fails: a missing or
    /// unreadable record just means no header.
    pub async fn email(&self) -> Option<String> {
        let email = match self {
            Self::Anonymous => return None,
            Self::Static(email) => Some(email.clone()),
            Self::File(path) => read_user_record(path).await.and_then(|r| r.email),
        };
        email.filter(|e| !e.trim().is_empty())
    }
}

async fn read_user_record(path: &Path) -> Option<UserRecord> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) => {
            debug!(path = %path.display(), "no user record: {e}");
            return None;
        }
    };
    match serde_json::from_str(&data) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!(path = %path.display(), "unreadable user record: {e}");
            None
        }
    }
}
