use thiserror::Error;

use crate::types::{ChatId, ContactId};

/// Errors surfaced to the intent layer.
///
/// Callers can tell a rejected input (`Validation`) apart from an intent
/// that arrived in the wrong call state (`Call`). Either way the store
/// involved is left untouched.
#[derive(Error, Debug)]
pub enum CourierError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Call error: {0}")]
    Call(#[from] CallError),

    /// A previous holder of the state lock panicked.
    #[error("State lock poisoned")]
    LockPoisoned,
}

/// A mutation was rejected at the boundary because its input is invalid.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message text is empty")]
    EmptyMessage,

    #[error("Unknown chat: {0}")]
    UnknownChat(ChatId),

    #[error("Unknown contact: {0}")]
    UnknownContact(ContactId),

    #[error("Theme index {index} outside palette of {palette_len}")]
    ThemeOutOfRange { index: usize, palette_len: usize },

    #[error("Font size {0}px outside supported range")]
    FontSizeOutOfRange(u8),

    #[error("Display name is empty")]
    EmptyDisplayName,
}

/// The call state machine refused a transition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CallError {
    #[error("Already in a call")]
    AlreadyInCall,

    #[error("Not in a call")]
    NotInCall,
}
