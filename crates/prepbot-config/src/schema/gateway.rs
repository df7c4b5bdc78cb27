//! Chat backend connection settings.

use serde::{Deserialize, Serialize};

/// Where and how the chat endpoint is reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the REST backend, e.g. `https://example.com/api`.
    pub base_url: String,
    /// Path of the ask endpoint, appended to `base_url`.
    pub ask_path: String,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
    /// Header carrying the signed-in user's email.
    pub identity_header: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".into(),
            ask_path: "/chatbot/ask".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
            identity_header: "email".into(),
        }
    }
}
