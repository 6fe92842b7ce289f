use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifies one conversation thread.
    ChatId
);
id_newtype!(
    /// Identifies one message within a chat. Generated fresh per append;
    /// stable for list keying on the rendering side.
    MessageId
);
id_newtype!(
    /// Identifies one directory contact.
    ContactId
);
id_newtype!(
    /// Identifies one call-history record.
    CallId
);
id_newtype!(
    /// Identifies one media/file item.
    MediaId
);

/// Top-level screens of the interface. Switching sections is plain
/// assignment with no history stack.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Chats,
    Contacts,
    Calls,
    Media,
    Profile,
}

/// Whether a message was sent by the local user or received from the peer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    Sent,
    Received,
}

/// Voice or video call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallMedium {
    Voice,
    Video,
}

/// Outcome recorded in the call history. `Missed` records carry a zero
/// duration; the directory fixtures uphold that, the UI does not re-derive it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallOutcome {
    Incoming,
    Outgoing,
    Missed,
}

/// Kind of a browsable media item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Document,
}
