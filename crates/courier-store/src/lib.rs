//! # courier-store
//!
//! In-memory conversation state: the ordered message history per chat,
//! the single chat selection, and the chat-list metadata the sidebar
//! renders (preview, activity time, unread badge).
//!
//! This is the one store with update semantics. Everything it exposes is
//! observable through reads after the mutating call returns; a rejected
//! mutation leaves the store exactly as it was.

pub mod conversations;
pub mod fixtures;
pub mod models;

pub use conversations::ConversationStore;
pub use models::{Chat, Message};
