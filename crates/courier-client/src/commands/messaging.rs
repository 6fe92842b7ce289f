//! Chat list and message thread intents.

use serde::Serialize;
use tracing::info;

use courier_shared::types::{ChatId, MessageDirection};
use courier_shared::CourierError;
use courier_store::{Chat, Message};

use crate::commands::lock;
use crate::events::StateEvent;
use crate::state::SharedState;

/// Chat-list row as the sidebar renders it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatDto {
    pub id: ChatId,
    pub name: String,
    pub avatar: Option<String>,
    pub last_message: String,
    pub last_activity: String,
    pub unread: u32,
    pub online: bool,
    pub selected: bool,
}

impl ChatDto {
    fn from_chat(chat: &Chat, selected: Option<ChatId>) -> Self {
        Self {
            id: chat.id,
            name: chat.name.clone(),
            avatar: chat.avatar.clone(),
            last_message: chat.last_message.clone(),
            last_activity: chat.last_activity.to_rfc3339(),
            unread: chat.unread,
            online: chat.online,
            selected: selected == Some(chat.id),
        }
    }
}

/// One message bubble.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub text: String,
    pub timestamp: String,
    pub direction: MessageDirection,
}

impl From<Message> for MessageDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id.to_string(),
            text: m.text,
            timestamp: m.timestamp.to_rfc3339(),
            direction: m.direction,
        }
    }
}

/// The chat list in sidebar order, selection flagged.
pub fn list_chats(state: &SharedState) -> Result<Vec<ChatDto>, CourierError> {
    let guard = lock(state)?;
    let selected = guard.conversations.selected_chat();
    Ok(guard
        .conversations
        .chats()
        .iter()
        .map(|c| ChatDto::from_chat(c, selected))
        .collect())
}

/// Select a chat and clear its unread badge. Unknown ids are ignored and
/// nothing is emitted for them.
pub fn select_chat(state: &SharedState, chat_id: ChatId) -> Result<(), CourierError> {
    let mut guard = lock(state)?;
    guard.conversations.select_chat(chat_id);
    if guard.conversations.selected_chat() == Some(chat_id) {
        guard.notifier.emit(StateEvent::ChatSelected { chat_id });
    }
    Ok(())
}

/// The ordered thread of one chat.
pub fn get_messages(state: &SharedState, chat_id: ChatId) -> Result<Vec<MessageDto>, CourierError> {
    let guard = lock(state)?;
    Ok(guard
        .conversations
        .get_messages(chat_id)
        .iter()
        .cloned()
        .map(MessageDto::from)
        .collect())
}

/// Append a message to a chat's thread.
pub fn append_message(
    state: &SharedState,
    chat_id: ChatId,
    text: &str,
    direction: MessageDirection,
) -> Result<MessageDto, CourierError> {
    let mut guard = lock(state)?;
    let message = guard.conversations.append_message(chat_id, text, direction)?;
    guard.notifier.emit(StateEvent::MessageAppended {
        chat_id,
        message_id: message.id,
    });
    info!(chat = %chat_id, msg = %message.id, "message appended");
    Ok(message.into())
}

/// The send box: append an outgoing message to the addressed chat.
pub fn send_message(
    state: &SharedState,
    chat_id: ChatId,
    text: &str,
) -> Result<MessageDto, CourierError> {
    append_message(state, chat_id, text, MessageDirection::Sent)
}
