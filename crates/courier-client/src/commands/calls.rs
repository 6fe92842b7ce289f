//! Call lifecycle intents: start, toggles, end.
//!
//! `start_call` and `end_call` also manage the session's 1 Hz ticker
//! task; every path that leaves the active phase stops it.

use serde::Serialize;
use tracing::info;

use courier_shared::format::format_elapsed;
use courier_shared::types::{CallMedium, ContactId};
use courier_shared::{CallError, CourierError, ValidationError};

use crate::call::{CallSession, CallSummary};
use crate::commands::lock;
use crate::events::{CallStatePayload, StateEvent};
use crate::state::SharedState;
use crate::ticker;

/// Snapshot of the active call for the call overlay.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallDto {
    pub contact_id: ContactId,
    pub contact_name: String,
    pub medium: CallMedium,
    pub elapsed_secs: u64,
    /// `mm:ss` form of `elapsed_secs`, ready to paint.
    pub elapsed: String,
    pub muted: bool,
    pub camera_off: bool,
    pub speaker_on: bool,
}

impl CallDto {
    fn from_session(session: &CallSession, contact_name: String) -> Self {
        Self {
            contact_id: session.contact_id,
            contact_name,
            medium: session.medium,
            elapsed_secs: session.elapsed_secs,
            elapsed: format_elapsed(session.elapsed_secs),
            muted: session.muted,
            camera_off: session.camera_off,
            speaker_on: session.speaker_on,
        }
    }
}

fn call_payload(session: Option<&CallSession>) -> CallStatePayload {
    match session {
        Some(s) => CallStatePayload {
            in_call: true,
            muted: s.muted,
            camera_off: s.camera_off,
            speaker_on: s.speaker_on,
        },
        None => CallStatePayload {
            in_call: false,
            muted: false,
            camera_off: false,
            speaker_on: false,
        },
    }
}

/// Start a voice or video call to a directory contact.
///
/// Rejects unknown contacts and refuses to replace a live session. On
/// success the ticker task is spawned, so this must run inside a tokio
/// runtime.
pub fn start_call(
    state: &SharedState,
    contact_id: ContactId,
    medium: CallMedium,
) -> Result<CallDto, CourierError> {
    let state_for_ticker = state.clone();
    let mut guard = lock(state)?;

    let contact_name = guard
        .directory
        .contact(contact_id)
        .map(|c| c.name.clone())
        .ok_or(ValidationError::UnknownContact(contact_id))?;

    guard.calls.start(contact_id, medium)?;

    // A stale ticker can only exist if a previous session ended uncleanly;
    // replace it either way so exactly one is live.
    if let Some(old) = guard.call_ticker.take() {
        old.abort();
    }
    guard.call_ticker = Some(ticker::spawn(state_for_ticker));

    let payload = call_payload(guard.calls.session());
    guard.notifier.emit(StateEvent::CallChanged(payload));
    info!(contact = %contact_id, ?medium, "call started");

    let session = guard
        .calls
        .session()
        .ok_or(CourierError::Call(CallError::NotInCall))?;
    Ok(CallDto::from_session(session, contact_name))
}

/// End the active call, stop its ticker and release the session.
pub fn end_call(state: &SharedState) -> Result<CallSummary, CourierError> {
    let mut guard = lock(state)?;

    if let Some(ticker) = guard.call_ticker.take() {
        ticker.abort();
    }
    let summary = guard.calls.end()?;

    guard
        .notifier
        .emit(StateEvent::CallChanged(call_payload(None)));
    guard.notifier.emit(StateEvent::CallEnded {
        contact_id: summary.contact_id,
        duration_secs: summary.duration_secs,
    });
    info!(contact = %summary.contact_id, secs = summary.duration_secs, "call ended");
    Ok(summary)
}

/// Flip the microphone mute flag of the active call.
pub fn toggle_mute(state: &SharedState) -> Result<bool, CourierError> {
    let mut guard = lock(state)?;
    let muted = guard.calls.toggle_mute()?;
    let payload = call_payload(guard.calls.session());
    guard.notifier.emit(StateEvent::CallChanged(payload));
    info!(muted, "mute toggled");
    Ok(muted)
}

/// Flip the camera-off flag of the active call.
pub fn toggle_camera(state: &SharedState) -> Result<bool, CourierError> {
    let mut guard = lock(state)?;
    let camera_off = guard.calls.toggle_camera()?;
    let payload = call_payload(guard.calls.session());
    guard.notifier.emit(StateEvent::CallChanged(payload));
    info!(camera_off, "camera toggled");
    Ok(camera_off)
}

/// Flip the loudspeaker flag of the active call.
pub fn toggle_speaker(state: &SharedState) -> Result<bool, CourierError> {
    let mut guard = lock(state)?;
    let speaker_on = guard.calls.toggle_speaker()?;
    let payload = call_payload(guard.calls.session());
    guard.notifier.emit(StateEvent::CallChanged(payload));
    info!(speaker_on, "speaker toggled");
    Ok(speaker_on)
}

/// Snapshot of the active call, `None` when idle.
pub fn current_call(state: &SharedState) -> Result<Option<CallDto>, CourierError> {
    let guard = lock(state)?;
    let Some(session) = guard.calls.session() else {
        return Ok(None);
    };
    let contact_name = guard
        .directory
        .contact(session.contact_id)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    Ok(Some(CallDto::from_session(session, contact_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn session() -> (SharedState, ContactId) {
        let state = Arc::new(Mutex::new(AppState::seeded()));
        let contact = state.lock().unwrap().directory.list_contacts()[0].id;
        (state, contact)
    }

    #[tokio::test]
    async fn start_rejects_unknown_contact_and_double_start() {
        let (state, contact) = session();

        let err = start_call(&state, ContactId::new(), CallMedium::Voice).unwrap_err();
        assert!(matches!(
            err,
            CourierError::Validation(ValidationError::UnknownContact(_))
        ));

        start_call(&state, contact, CallMedium::Voice).unwrap();
        let err = start_call(&state, contact, CallMedium::Video).unwrap_err();
        assert!(matches!(
            err,
            CourierError::Call(CallError::AlreadyInCall)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_counts_seconds_while_active() {
        let (state, contact) = session();
        let dto = start_call(&state, contact, CallMedium::Voice).unwrap();
        assert_eq!(dto.elapsed, "00:00");

        tokio::time::sleep(Duration::from_millis(3100)).await;
        let dto = current_call(&state).unwrap().unwrap();
        assert_eq!(dto.elapsed_secs, 3);
        assert_eq!(dto.elapsed, "00:03");
    }

    #[tokio::test(start_paused = true)]
    async fn end_call_stops_the_ticker() {
        let (state, contact) = session();
        start_call(&state, contact, CallMedium::Video).unwrap();
        tokio::time::sleep(Duration::from_millis(2100)).await;

        let summary = end_call(&state).unwrap();
        assert_eq!(summary.duration_secs, 2);
        assert!(current_call(&state).unwrap().is_none());

        // Long after the call: nothing ticks, nothing panics.
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(current_call(&state).unwrap().is_none());
        assert!(state.lock().unwrap().call_ticker.is_none());
    }

    #[tokio::test]
    async fn toggles_require_an_active_call() {
        let (state, contact) = session();
        for result in [
            toggle_mute(&state),
            toggle_camera(&state),
            toggle_speaker(&state),
        ] {
            assert!(matches!(
                result.unwrap_err(),
                CourierError::Call(CallError::NotInCall)
            ));
        }
        assert!(matches!(
            end_call(&state).unwrap_err(),
            CourierError::Call(CallError::NotInCall)
        ));

        start_call(&state, contact, CallMedium::Video).unwrap();
        assert!(toggle_mute(&state).unwrap());
        assert!(toggle_camera(&state).unwrap());
        assert!(toggle_speaker(&state).unwrap());
    }

    #[tokio::test]
    async fn a_second_call_starts_with_fresh_toggles() {
        let (state, contact) = session();
        start_call(&state, contact, CallMedium::Voice).unwrap();
        toggle_mute(&state).unwrap();
        end_call(&state).unwrap();

        let dto = start_call(&state, contact, CallMedium::Video).unwrap();
        assert!(!dto.muted);
        assert_eq!(dto.medium, CallMedium::Video);
        assert_eq!(dto.elapsed_secs, 0);
    }

    #[tokio::test]
    async fn call_events_reach_subscribers() {
        let (state, contact) = session();
        let mut events = state.lock().unwrap().notifier.subscribe();

        start_call(&state, contact, CallMedium::Voice).unwrap();
        assert!(matches!(
            events.try_recv().unwrap(),
            StateEvent::CallChanged(CallStatePayload { in_call: true, .. })
        ));

        end_call(&state).unwrap();
        assert!(matches!(
            events.try_recv().unwrap(),
            StateEvent::CallChanged(CallStatePayload { in_call: false, .. })
        ));
        assert!(matches!(
            events.try_recv().unwrap(),
            StateEvent::CallEnded { .. }
        ));
    }
}
