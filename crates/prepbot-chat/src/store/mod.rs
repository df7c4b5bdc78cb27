//! Conversation state and the send / regenerate lifecycle.
//!
//! A `ConversationStore` holds the transcript (seeded with a greeting),
//! the loading flag and the visibility flag for one chat session, and is
//! the only thing that talks to the [`ChatGateway`](crate::ChatGateway).

mod chat;
mod events;
mod manager;
mod types;


pub use events::{ConversationSnapshot, StoreEvent};
pub use manager::ConversationStore;
pub use types::StoreSettings;
