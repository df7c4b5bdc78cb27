//! HTTP gateway struct, construction and response parsing.

use reqwest::header::{HeaderName, HeaderValue};
use tracing::warn;

use prepbot_config::PrepbotConfig;

use crate::{AskResponse, GatewayError};

use super::config::GatewaySettings;
use super::identity::IdentitySource;

/// Chat backend client.
pub struct HttpGateway {
    pub(crate) settings: GatewaySettings,
    pub(crate) identity: IdentitySource,
    pub(crate) identity_header: HeaderName,
    pub(crate) http: reqwest::Client,
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("settings", &self.settings)
            .field("identity", &self.identity)
            .finish()
    }
}

impl HttpGateway {
    pub fn new(settings: GatewaySettings, identity: IdentitySource) -> Result<Self, GatewayError> {
        let identity_header = HeaderName::from_bytes(settings.identity_header.as_bytes())
            .map_err(|e| {
                GatewayError::InvalidConfig(format!(
                    "identity header {:?}: {e}",
                    settings.identity_header
                ))
            })?;

        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| GatewayError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            settings,
            identity,
            identity_header,
            http,
        })
    }

    /// Build a gateway from the `[gateway]` and `[identity]` config sections.
    pub fn from_config(config: &PrepbotConfig) -> Result<Self, GatewayError> {
        Self::new(
            GatewaySettings::from(&config.gateway),
            IdentitySource::from_config(&config.identity),
        )
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Header to attach for the current user, if one is signed in.
    pub(crate) async fn identity_header(&self) -> Option<(HeaderName, HeaderValue)> {
        let email = self.identity.email().await?;
        match HeaderValue::from_str(&email) {
            Ok(value) => Some((self.identity_header.clone(), value)),
            Err(e) => {
                warn!("user email cannot be sent as a header: {e}");
                None
            }
        }
    }
}

/// Parse the ask endpoint's JSON body.
///
/// A body without a string `response` field is an error rather than an
/// empty reply.
pub(crate) fn parse_ask_response(json: serde_json::Value) -> Result<AskResponse, GatewayError> {
    match json.get("response").and_then(|r| r.as_str()) {
        Some(text) => Ok(AskResponse {
            response: text.to_string(),
        }),
        None => {
            let body = json.to_string().chars().take(200).collect::<String>();
            Err(GatewayError::Parse(format!(
                "missing `response` field in {body}"
            )))
        }
    }
}

pub(crate) fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Network(e.to_string())
    }
}
