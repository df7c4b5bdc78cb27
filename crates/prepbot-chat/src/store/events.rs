//! Change notifications for presentation layers.

use serde::{Deserialize, Serialize};

use crate::message::{Feedback, Message, MessageId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum StoreEvent {
    MessageAppended(Message),
    /// The transcript was reset; carries the fresh greeting.
    Cleared(Message),
    LoadingChanged(bool),
    VisibilityChanged(bool),
    FeedbackRecorded { id: MessageId, feedback: Feedback },
    Shutdown,
}

/// Owned copy of the session state, for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSnapshot {
    pub messages: Vec<Message>,
    pub loading: bool,
    pub open: bool,
}
