//! The 1 Hz duration ticker of an active call.
//!
//! The task is an owned resource of [`crate::AppState`]: it is created by
//! `start_call`, aborted by `end_call` (and by a replacing `start_call`),
//! and aborted on drop so a torn-down state can never leak a recurring
//! timer. It also stops itself the moment `tick` reports the session is
//! no longer active.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use courier_shared::constants::CALL_TICK_SECS;

use crate::events::StateEvent;
use crate::state::SharedState;

/// Abort-on-drop wrapper around the ticker task.
#[derive(Debug)]
pub(crate) struct TickerHandle(JoinHandle<()>);

impl TickerHandle {
    pub(crate) fn abort(&self) {
        self.0.abort();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Spawn the ticker for the current call session.
///
/// Must run inside a tokio runtime. The lock is taken per tick and never
/// held across an await.
pub(crate) fn spawn(state: SharedState) -> TickerHandle {
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(CALL_TICK_SECS));
        // The first interval tick resolves immediately; consume it so the
        // session counts its first second a full period after start.
        interval.tick().await;
        loop {
            interval.tick().await;
            let Ok(mut guard) = state.lock() else {
                break;
            };
            match guard.calls.tick() {
                Ok(elapsed_secs) => {
                    guard.notifier.emit(StateEvent::CallTick { elapsed_secs });
                }
                Err(_) => break,
            }
        }
        debug!("call ticker stopped");
    });
    TickerHandle(handle)
}
