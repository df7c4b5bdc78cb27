//! Async send methods for ConversationStore (send, regenerate, quick prompts).

use prepbot_common::new_correlation_id;
use tracing::{debug, warn};

use crate::message::MessageId;
use crate::AskRequest;

use super::manager::ConversationStore;
use super::types::LoadingGuard;

impl ConversationStore {
    /// Send a user message and append the assistant's reply.
    ///
    /// Blank input and sends on a shut-down session are ignored and return
    /// `None`. Otherwise the user message is appended before the request
    /// goes out and its id is returned. A failed request appends the
    /// apology as an error reply; it is never returned to the caller.
    pub async fn send_message(&self, text: impl Into<String>) -> Option<MessageId> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        if self.cancel.is_cancelled() {
            debug!(session = %self.session_id, "send ignored, session is shut down");
            return None;
        }

        let correlation_id = new_correlation_id();
        let user_id = self.append(text.clone(), false, false);
        let _loading = LoadingGuard::acquire(self);

        let request = AskRequest {
            message: text,
            context: self.settings.context.clone(),
        };
        debug!(
            session = %self.session_id,
            correlation_id = %correlation_id,
            message_id = %user_id,
            "sending chat message"
        );

        let outcome = tokio::select! {
            _ = self.cancel.cancelled() => {
                debug!(correlation_id = %correlation_id, "session shut down while waiting for reply");
                return Some(user_id);
            }
            outcome = self.gateway.ask(&request) => outcome,
        };

        // The session may have ended between the reply and this point.
        if self.cancel.is_cancelled() {
            return Some(user_id);
        }

        match outcome {
            Ok(reply) => {
                let reply_id = self.append(reply.response, true, false);
                debug!(correlation_id = %correlation_id, reply = %reply_id, "reply received");
            }
            Err(e) => {
                warn!(
                    session = %self.session_id,
                    correlation_id = %correlation_id,
                    error = %e,
                    "chat request failed"
                );
                self.append(self.settings.apology.clone(), true, true);
            }
        }

        Some(user_id)
    }

    /// Re-ask the user message that precedes `message_id`.
    ///
    /// No-op when the id is unknown, is the first message, or follows
    /// another bot message.
    pub async fn regenerate(&self, message_id: MessageId) -> Option<MessageId> {
        let prompt = {
            let state = self.state();
            let index = state.messages.iter().position(|m| m.id == message_id)?;
            let previous = &state.messages[index.checked_sub(1)?];
            if previous.is_bot {
                None
            } else {
                Some(previous.text.clone())
            }
        };

        match prompt {
            Some(text) => {
                debug!(session = %self.session_id, message_id = %message_id, "regenerating reply");
                self.send_message(text).await
            }
            None => None,
        }
    }

    /// Send the quick prompt at `index`, if there is one.
    pub async fn send_quick_prompt(&self, index: usize) -> Option<MessageId> {
        let text = self.settings.quick_prompts.get(index)?.clone();
        self.send_message(text).await
    }
}
