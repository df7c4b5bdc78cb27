//! Where the signed-in user's identity is read from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Identity configuration.
///
/// The user record is written by the sign-in flow; this client only reads
/// it. `email` overrides the record when set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IdentityConfig {
    /// Path to the persisted user record. `None` means the platform default.
    pub user_file: Option<PathBuf>,
    /// Fixed email to send instead of reading the user record.
    pub email: Option<String>,
}
