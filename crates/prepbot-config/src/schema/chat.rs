//! Conversation settings: context tag, canned texts and quick prompts.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTEXT: &str = "interview_preparation";

pub const DEFAULT_GREETING: &str = "Hi! I'm your interview preparation assistant. \
Ask me about coding problems, system design, or behavioral questions.";

pub const DEFAULT_APOLOGY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Context tag sent with every question.
    pub context: String,
    /// Synthetic bot message seeded on start and after every clear.
    pub greeting: String,
    /// Bot reply shown when the backend cannot be reached.
    pub apology: String,
    /// Starter questions offered before the user types anything.
    pub quick_prompts: Vec<String>,
    /// Buffered store events per subscriber (valid range: 1-4096).
    pub event_capacity: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT.into(),
            greeting: DEFAULT_GREETING.into(),
            apology: DEFAULT_APOLOGY.into(),
            quick_prompts: vec![
                "How should I prepare for a technical interview?".into(),
                "Explain the difference between a process and a thread.".into(),
                "Give me a common dynamic programming question.".into(),
                "How do I answer \"Tell me about yourself\"?".into(),
            ],
            event_capacity: 64,
        }
    }
}
