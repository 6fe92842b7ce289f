//! Conversation domain models.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to a rendering layer.

use chrono::{DateTime, Utc};
use courier_shared::types::{ChatId, MessageDirection, MessageId};
use serde::{Deserialize, Serialize};

/// One conversation thread as shown in the chat list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: ChatId,
    /// Display name of the peer or group.
    pub name: String,
    /// Optional avatar reference; `None` renders the initials fallback.
    pub avatar: Option<String>,
    /// Text of the most recent message, shown as the list preview.
    pub last_message: String,
    /// When the thread last changed.
    pub last_activity: DateTime<Utc>,
    /// Unread badge count. Cleared only by selecting the chat.
    pub unread: u32,
    /// Presence flag of the peer.
    pub online: bool,
}

/// A single chat message. Immutable once created; threads are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique message identifier, stable for list keying.
    pub id: MessageId,
    /// Message body. Never empty; enforced at the append boundary.
    pub text: String,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
    /// Sent by the local user or received from the peer.
    pub direction: MessageDirection,
}
