//! Read-only reference models served by the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use courier_shared::types::{CallId, CallMedium, CallOutcome, ContactId, MediaId, MediaKind};

/// A directory contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    /// Optional avatar reference; `None` renders the initials fallback.
    pub avatar: Option<String>,
    /// Free-form status line ("In a meeting", ...).
    pub status: String,
    pub online: bool,
}

/// One entry of the call history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallRecord {
    pub id: CallId,
    pub contact_id: ContactId,
    pub outcome: CallOutcome,
    pub medium: CallMedium,
    pub time: DateTime<Utc>,
    /// Zero exactly for missed calls; the fixtures uphold this.
    pub duration_secs: u64,
}

/// One item of the media/file browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    pub name: String,
    pub size_bytes: u64,
    pub timestamp: DateTime<Utc>,
}
