//! Chat engine for prepbot.
//!
//! Provides:
//! - The `ChatGateway` seam and an HTTP implementation for the
//!   `/chatbot/ask` endpoint, with per-request identity headers
//! - `ConversationStore`: message history, loading state and the
//!   send / regenerate / clear lifecycle
//! - Store events for presentation layers

pub mod gateway;
pub mod message;
pub mod store;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use gateway::{GatewaySettings, HttpGateway, IdentitySource, UserRecord};
pub use message::{Feedback, Message, MessageId};
pub use store::{ConversationSnapshot, ConversationStore, StoreEvent, StoreSettings};

/// Answers chat questions. Implemented over HTTP by [`HttpGateway`].
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, GatewayError>;
}

/// Body posted to the ask endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    pub context: String,
}

/// Reply from the ask endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("API error: {0}")]
    Api(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid gateway configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("no message with id {0}")]
    UnknownMessage(MessageId),
    #[error("message {0} was not written by the assistant")]
    NotBotMessage(MessageId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_wire_shape() {
        let request = AskRequest {
            message: "explain recursion".into(),
            context: "interview_preparation".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "explain recursion",
                "context": "interview_preparation",
            })
        );
    }

    #[test]
    fn ask_response_ignores_extra_fields() {
        let response: AskResponse =
            serde_json::from_str(r#"{"response":"Hi there","model":"x"}"#).unwrap();
        assert_eq!(response.response, "Hi there");
    }

    #[test]
    fn error_display() {
        assert_eq!(GatewayError::Timeout.to_string(), "Timeout");
        assert_eq!(
            GatewayError::Api("HTTP 500".into()).to_string(),
            "API error: HTTP 500"
        );
        assert_eq!(
            ChatError::NotBotMessage(MessageId(2)).to_string(),
            "message 2 was not written by the assistant"
        );
    }
}
