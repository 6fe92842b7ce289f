//! Hard-coded seed data for the chat list and the first thread.
//!
//! Ids are fixed (`Uuid::from_u128`) so list keys stay stable across
//! store rebuilds. Activity times are clock-of-day values on the current
//! date, like a chat list freshly synced this afternoon.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use courier_shared::types::{ChatId, MessageDirection, MessageId};

use crate::models::{Chat, Message};

fn today_at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc::now()
        .date_naive()
        .and_hms_opt(hour, min, 0)
        .unwrap_or_default()
        .and_utc()
}

/// Stable id for the n-th seeded chat.
pub fn chat_id(n: u128) -> ChatId {
    ChatId(Uuid::from_u128(0x00c0_0000 + n))
}

/// The mock chat list, sidebar order.
pub fn seed_chats() -> Vec<Chat> {
    let rows: [(u128, &str, &str, (u32, u32), u32, bool); 5] = [
        (1, "Anna Smirnova", "Hey! How are you?", (14, 32), 2, true),
        (2, "Dmitry Ivanov", "Sent you the files", (13, 15), 0, true),
        (3, "Masha Petrova", "Call tomorrow?", (12, 45), 1, false),
        (4, "Dev Team", "New build is ready!", (11, 20), 5, true),
        (5, "Alexander Kozlov", "Thanks for the help!", (10, 10), 0, false),
    ];
    rows.into_iter()
        .map(|(n, name, preview, (h, m), unread, online)| Chat {
            id: chat_id(n),
            name: name.to_owned(),
            avatar: None,
            last_message: preview.to_owned(),
            last_activity: today_at(h, m),
            unread,
            online,
        })
        .collect()
}

/// The opening thread of the first chat.
pub fn seed_thread() -> Vec<Message> {
    let rows: [(u128, &str, (u32, u32), MessageDirection); 3] = [
        (1, "Hey! How are you?", (14, 30), MessageDirection::Received),
        (
            2,
            "Great! Working on a new project",
            (14, 31),
            MessageDirection::Sent,
        ),
        (
            3,
            "Sounds interesting! Tell me more?",
            (14, 32),
            MessageDirection::Received,
        ),
    ];
    rows.into_iter()
        .map(|(n, text, (h, m), direction)| Message {
            id: MessageId(Uuid::from_u128(0x00e0_0000 + n)),
            text: text.to_owned(),
            timestamp: today_at(h, m),
            direction,
        })
        .collect()
}
