//! ConversationStore struct, transcript access and session teardown.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use prepbot_common::SessionId;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::message::{Feedback, Message, MessageId};
use crate::{ChatError, ChatGateway};

use super::events::{ConversationSnapshot, StoreEvent};
use super::types::{SessionState, StoreSettings};

/// One chat session: transcript, loading flag and visibility flag.
///
/// All operations take `&self`, so several sends can be pending at once
/// (share the store through an `Arc` to send from spawned tasks).
pub struct ConversationStore {
    pub(super) session_id: SessionId,
    pub(super) gateway: Arc<dyn ChatGateway>,
    pub(super) settings: StoreSettings,
    state: Mutex<SessionState>,
    events: broadcast::Sender<StoreEvent>,
    /// Cancelled when the session is torn down.
    pub(super) cancel: CancellationToken,
}

impl ConversationStore {
    /// Create a session seeded with the greeting.
    pub fn new(gateway: Arc<dyn ChatGateway>, settings: StoreSettings) -> Self {
        let (events, _) = broadcast::channel(settings.event_capacity.max(1));
        let mut state = SessionState::new();
        let greeting_id = state.allocate_id();
        state
            .messages
            .push(Message::bot(greeting_id, settings.greeting.clone()));

        let session_id = SessionId::new();
        debug!(session = %session_id, "conversation started");

        Self {
            session_id,
            gateway,
            settings,
            state: Mutex::new(state),
            events,
            cancel: CancellationToken::new(),
        }
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn publish(&self, event: StoreEvent) -> usize {
        self.events.send(event).unwrap_or(0)
    }

    /// Append a message with a fresh id and announce it.
    pub(super) fn append(&self, text: String, is_bot: bool, is_error: bool) -> MessageId {
        let message = {
            let mut state = self.state();
            let id = state.allocate_id();
            let message = match (is_bot, is_error) {
                (false, _) => Message::user(id, text),
                (true, false) => Message::bot(id, text),
                (true, true) => Message::error(id, text),
            };
            state.messages.push(message.clone());
            message
        };
        let id = message.id;
        self.publish(StoreEvent::MessageAppended(message));
        id
    }

    /// Receive a notification for every change to this session.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Get the full transcript.
    pub fn messages(&self) -> Vec<Message> {
        self.state().messages.clone()
    }

    pub fn message(&self, id: MessageId) -> Option<Message> {
        self.state().messages.iter().find(|m| m.id == id).cloned()
    }

    /// Number of messages in the transcript, greeting included.
    pub fn message_count(&self) -> usize {
        self.state().messages.len()
    }

    /// Whether any send is waiting on the gateway.
    pub fn is_loading(&self) -> bool {
        self.state().in_flight > 0
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        let state = self.state();
        ConversationSnapshot {
            messages: state.messages.clone(),
            loading: state.in_flight > 0,
            open: state.open,
        }
    }

    /// Reset the transcript to a single fresh greeting. Pending sends keep
    /// running and the loading flag is left alone.
    pub fn clear_chat(&self) {
        let greeting = {
            let mut state = self.state();
            let id = state.allocate_id();
            let greeting = Message::bot(id, self.settings.greeting.clone());
            state.messages = vec![greeting.clone()];
            greeting
        };
        debug!(session = %self.session_id, "conversation cleared");
        self.publish(StoreEvent::Cleared(greeting));
    }

    pub fn is_open(&self) -> bool {
        self.state().open
    }

    /// Flip visibility, returning the new value.
    pub fn toggle_open(&self) -> bool {
        let open = {
            let mut state = self.state();
            state.open = !state.open;
            state.open
        };
        self.publish(StoreEvent::VisibilityChanged(open));
        open
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        let changed = {
            let mut state = self.state();
            std::mem::replace(&mut state.open, open) != open
        };
        if changed {
            self.publish(StoreEvent::VisibilityChanged(open));
        }
    }

    /// Text of a message, for a copy action.
    pub fn copy_text(&self, id: MessageId) -> Option<String> {
        self.message(id).map(|m| m.text)
    }

    /// Rate an assistant reply. Rating again overwrites the earlier rating.
    pub fn set_feedback(&self, id: MessageId, feedback: Feedback) -> Result<(), ChatError> {
        {
            let mut state = self.state();
            let message = state
                .messages
                .iter_mut()
                .find(|m| m.id == id)
                .ok_or(ChatError::UnknownMessage(id))?;
            if !message.is_bot {
                return Err(ChatError::NotBotMessage(id));
            }
            message.feedback = Some(feedback);
        }
        debug!(session = %self.session_id, message_id = %id, ?feedback, "feedback recorded");
        self.publish(StoreEvent::FeedbackRecorded { id, feedback });
        Ok(())
    }

    pub fn quick_prompts(&self) -> &[String] {
        &self.settings.quick_prompts
    }

    /// Tear the session down. Pending sends stop waiting and append
    /// nothing; later sends are ignored.
    pub fn shutdown(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.cancel.cancel();
        debug!(session = %self.session_id, "conversation shut down");
        self.publish(StoreEvent::Shutdown);
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ConversationStore {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
