//! Chat transcript entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a message within one conversation. Never reused by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(MessageId)
    }
}

/// User rating of an assistant reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl Message {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, text, false, false)
    }

    pub fn bot(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, text, true, false)
    }

    /// A bot message standing in for a reply that never arrived.
    pub fn error(id: MessageId, text: impl Into<String>) -> Self {
        Self::new(id, text, true, true)
    }

    fn new(id: MessageId, text: impl Into<String>, is_bot: bool, is_error: bool) -> Self {
        Self {
            id,
            text: text.into(),
            is_bot,
            timestamp: Utc::now(),
            is_error,
            feedback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_flags() {
        let user = Message::user(MessageId(1), "hello");
        assert!(!user.is_bot);
        assert!(!user.is_error);

        let bot = Message::bot(MessageId(2), "Hi there");
        assert!(bot.is_bot);
        assert!(!bot.is_error);

        let err = Message::error(MessageId(3), "sorry");
        assert!(err.is_bot);
        assert!(err.is_error);
        assert!(err.feedback.is_none());
    }

    #[test]
    fn message_id_parses_with_or_without_hash() {
        assert_eq!("7".parse::<MessageId>().unwrap(), MessageId(7));
        assert_eq!(" #12 ".parse::<MessageId>().unwrap(), MessageId(12));
        assert!("abc".parse::<MessageId>().is_err());
    }

    #[test]
    fn is_error_defaults_to_false_when_absent() {
        let json = r#"{"id":4,"text":"hi","is_bot":true,"timestamp":"2024-01-01T00:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, MessageId(4));
        assert!(!msg.is_error);
        assert!(msg.feedback.is_none());
    }

    #[test]
    fn feedback_serializes_snake_case() {
        let json = serde_json::to_string(&Feedback::NotHelpful).unwrap();
        assert_eq!(json, "\"not_helpful\"");
    }
}
