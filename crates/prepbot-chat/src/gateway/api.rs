//! ChatGateway trait implementation for HttpGateway.

use async_trait::async_trait;
use tracing::debug;

use crate::{AskRequest, AskResponse, ChatGateway, GatewayError};

use super::client::{map_transport_error, parse_ask_response, HttpGateway};

#[async_trait]
impl ChatGateway for HttpGateway {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, GatewayError> {
        let url = self.settings.ask_url();
        debug!(url = %url, context = %request.context, "chat backend request");

        let mut builder = self.http.post(&url).json(request);
        if let Some((name, value)) = self.identity_header().await {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GatewayError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(GatewayError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        parse_ask_response(json)
    }
}
