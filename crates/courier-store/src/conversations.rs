use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use courier_shared::types::{ChatId, MessageDirection, MessageId};
use courier_shared::ValidationError;

use crate::models::{Chat, Message};

/// Owns the chat list, the per-chat message threads and the single
/// "selected chat" slot.
///
/// Invariants:
/// - at most one chat is selected at a time;
/// - message threads are append-only and insertion-ordered, timestamps
///   non-decreasing;
/// - `unread` is never negative and only `select_chat` clears it.
#[derive(Debug, Default)]
pub struct ConversationStore {
    chats: Vec<Chat>,
    threads: HashMap<ChatId, Vec<Message>>,
    selected: Option<ChatId>,
}

impl ConversationStore {
    /// Create an empty store with no chats and no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the mock chat list and the first
    /// chat selected (selection clears its unread badge, as always).
    pub fn seeded() -> Self {
        let chats = crate::fixtures::seed_chats();
        let mut threads: HashMap<ChatId, Vec<Message>> = HashMap::new();
        if let Some(first) = chats.first() {
            threads.insert(first.id, crate::fixtures::seed_thread());
        }
        let mut store = Self {
            chats,
            threads,
            selected: None,
        };
        if let Some(first) = store.chats.first().map(|c| c.id) {
            store.select_chat(first);
        }
        store
    }

    /// The chat list in sidebar order.
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Look up one chat by id.
    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    /// The currently selected chat, if any.
    pub fn selected_chat(&self) -> Option<ChatId> {
        self.selected
    }

    /// Select `id` and clear its unread badge.
    ///
    /// Unknown ids are silently ignored: the previous selection (or lack
    /// of one) stays in place.
    pub fn select_chat(&mut self, id: ChatId) {
        let Some(chat) = self.chats.iter_mut().find(|c| c.id == id) else {
            debug!(chat = %id, "select ignored, unknown chat");
            return;
        };
        chat.unread = 0;
        self.selected = Some(id);
        debug!(chat = %id, "chat selected");
    }

    /// Append a message to `id`'s thread.
    ///
    /// Rejects empty or whitespace-only text and unknown chats without
    /// touching any state. On success the chat's preview and activity
    /// time are updated, and a `Received` message landing in a chat other
    /// than the selected one bumps its unread badge.
    pub fn append_message(
        &mut self,
        id: ChatId,
        text: &str,
        direction: MessageDirection,
    ) -> Result<Message, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        let selected = self.selected;
        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ValidationError::UnknownChat(id))?;

        let message = Message {
            id: MessageId::new(),
            text: text.to_owned(),
            timestamp: Utc::now(),
            direction,
        };

        chat.last_message = message.text.clone();
        chat.last_activity = message.timestamp;
        if direction == MessageDirection::Received && selected != Some(id) {
            chat.unread += 1;
        }

        let thread = self.threads.entry(id).or_default();
        thread.push(message.clone());
        debug!(chat = %id, len = thread.len(), "message appended");
        Ok(message)
    }

    /// The ordered message thread for `id`. Empty for chats with no
    /// messages yet and for unknown ids; never mutates.
    pub fn get_messages(&self, id: ChatId) -> &[Message] {
        self.threads.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }
}
