//! Intent command handlers.
//!
//! Each sub-module groups related intents by domain. Every handler takes
//! the shared state, performs one synchronous mutate-then-notify cycle
//! under the lock, and returns either a snapshot for the caller or a
//! typed rejection that left the state untouched.

pub mod calls;
pub mod directory;
pub mod messaging;
pub mod profile;
pub mod sections;
pub mod settings;

use std::sync::MutexGuard;

use courier_shared::CourierError;

use crate::state::{AppState, SharedState};

/// Take the state lock, mapping poisoning into the error channel instead
/// of panicking in the intent path.
pub(crate) fn lock(state: &SharedState) -> Result<MutexGuard<'_, AppState>, CourierError> {
    state.lock().map_err(|_| CourierError::LockPoisoned)
}
