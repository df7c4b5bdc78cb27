//! Store settings, session state and the loading guard.

use prepbot_config::schema::ChatConfig;

use crate::message::{Message, MessageId};

use super::events::StoreEvent;
use super::manager::ConversationStore;

/// Fixed texts and the context tag used by a store.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub greeting: String,
    pub apology: String,
    pub context: String,
    pub quick_prompts: Vec<String>,
    pub event_capacity: usize,
}

impl From<&ChatConfig> for StoreSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            greeting: config.greeting.clone(),
            apology: config.apology.clone(),
            context: config.context.clone(),
            quick_prompts: config.quick_prompts.clone(),
            event_capacity: (config.event_capacity as usize).max(1),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

/// Mutable part of a session. Only ever locked for short, synchronous
/// updates.
pub(crate) struct SessionState {
    pub(crate) messages: Vec<Message>,
    /// Sends waiting on the gateway. Loading is `in_flight > 0`.
    pub(crate) in_flight: usize,
    pub(crate) open: bool,
    next_id: u64,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self {
            messages: Vec::new(),
            in_flight: 0,
            open: false,
            next_id: 1,
        }
    }

    pub(crate) fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Holds the store in the loading state for one pending send. Dropping it
/// releases that send's share of the flag, so every exit path lowers it,
/// including cancellation.
pub(crate) struct LoadingGuard<'a> {
    store: &'a ConversationStore,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn acquire(store: &'a ConversationStore) -> Self {
        let started = {
            let mut state = store.state();
            state.in_flight += 1;
            state.in_flight == 1
        };
        if started {
            store.publish(StoreEvent::LoadingChanged(true));
        }
        Self { store }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let finished = {
            let mut state = self.store.state();
            state.in_flight = state.in_flight.saturating_sub(1);
            state.in_flight == 0
        };
        if finished {
            self.store.publish(StoreEvent::LoadingChanged(false));
        }
    }
}
