//! Change notifications for the rendering surface.
//!
//! Every successful mutation broadcasts one [`StateEvent`]; dependent
//! views re-read the state they care about when they receive it. The
//! channel is `tokio::sync::broadcast`, so any number of screens can
//! subscribe and a slow subscriber only lags itself.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

use courier_shared::types::{ChatId, ContactId, MessageId, Section};

/// Capacity of the broadcast buffer; events beyond this lag the slowest
/// subscriber rather than blocking the mutating intent.
const EVENT_BUFFER: usize = 64;

/// Snapshot of the call flags, sent with every call-state change.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallStatePayload {
    pub in_call: bool,
    pub muted: bool,
    pub camera_off: bool,
    pub speaker_on: bool,
}

/// One observable state change.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StateEvent {
    ChatSelected {
        chat_id: ChatId,
    },
    MessageAppended {
        chat_id: ChatId,
        message_id: MessageId,
    },
    SectionChanged {
        section: Section,
    },
    SettingsChanged {
        theme_index: usize,
        font_size_px: u8,
    },
    CallChanged(CallStatePayload),
    CallTick {
        elapsed_secs: u64,
    },
    CallEnded {
        contact_id: ContactId,
        duration_secs: u64,
    },
    ProfileUpdated,
}

/// Sender half of the notification channel, owned by the app state.
#[derive(Debug)]
pub struct Notifier {
    tx: broadcast::Sender<StateEvent>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_BUFFER);
        Self { tx }
    }

    /// Open a fresh subscription; only events emitted afterwards are seen.
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.tx.subscribe()
    }

    /// Broadcast an event. Having no subscribers is normal (headless
    /// tests, teardown) and only traced.
    pub fn emit(&self, event: StateEvent) {
        if self.tx.send(event).is_err() {
            trace!("state event dropped, no subscribers");
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
