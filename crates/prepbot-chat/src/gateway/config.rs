//! HTTP gateway settings.

use std::time::Duration;

use prepbot_config::schema::GatewayConfig;

/// Connection settings for [`HttpGateway`](super::HttpGateway).
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub ask_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub identity_header: String,
}

impl GatewaySettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_ask_path(mut self, path: impl Into<String>) -> Self {
        self.ask_path = path.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_identity_header(mut self, header: impl Into<String>) -> Self {
        self.identity_header = header.into();
        self
    }

    /// Full URL of the ask endpoint. Tolerates a trailing `/` on the base.
    pub fn ask_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.ask_path.trim_start_matches('/')
        )
    }
}

impl From<&GatewayConfig> for GatewaySettings {
    fn from(config: &GatewayConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            ask_path: config.ask_path.clone(),
            connect_timeout: Duration::from_secs(u64::from(config.connect_timeout_secs)),
            request_timeout: Duration::from_secs(u64::from(config.request_timeout_secs)),
            identity_header: config.identity_header.clone(),
        }
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self::from(&GatewayConfig::default())
    }
}
