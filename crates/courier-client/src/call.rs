//! The call-session state machine.
//!
//! The session's logical state (phase, elapsed time, local media toggles)
//! is owned here, independent of any rendered call screen, so it survives
//! view remounts and is testable without a rendering surface. At most one
//! session exists at a time.

use serde::Serialize;

use courier_shared::types::{CallMedium, ContactId};
use courier_shared::CallError;

/// Lifecycle phase of a call session.
///
/// There is no real signaling layer, so `Connecting` is passed through
/// immediately on start; a signaling layer driving this machine would
/// hold it there until the peer answers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallPhase {
    Connecting,
    Active,
    Ended,
}

/// The live state of an in-progress call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CallSession {
    pub contact_id: ContactId,
    pub medium: CallMedium,
    pub phase: CallPhase,
    pub elapsed_secs: u64,
    pub muted: bool,
    pub camera_off: bool,
    pub speaker_on: bool,
}

/// What `end` hands back for the renderer to show (and a future call
/// transport to log).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CallSummary {
    pub contact_id: ContactId,
    pub medium: CallMedium,
    pub duration_secs: u64,
}

/// Owns the optional [`CallSession`] and enforces its transitions.
#[derive(Debug, Default)]
pub struct CallController {
    session: Option<CallSession>,
}

impl CallController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session, if one exists.
    pub fn session(&self) -> Option<&CallSession> {
        self.session.as_ref()
    }

    fn active_mut(&mut self) -> Result<&mut CallSession, CallError> {
        match self.session.as_mut() {
            Some(s) if s.phase == CallPhase::Active => Ok(s),
            _ => Err(CallError::NotInCall),
        }
    }

    /// Start a call. Legal only when idle; a live session is never
    /// replaced implicitly.
    pub fn start(
        &mut self,
        contact_id: ContactId,
        medium: CallMedium,
    ) -> Result<&CallSession, CallError> {
        if self.session.is_some() {
            return Err(CallError::AlreadyInCall);
        }
        let mut session = CallSession {
            contact_id,
            medium,
            phase: CallPhase::Connecting,
            elapsed_secs: 0,
            muted: false,
            camera_off: false,
            speaker_on: false,
        };
        // No signaling in scope: connect resolves instantly.
        session.phase = CallPhase::Active;
        self.session = Some(session);
        self.session.as_ref().ok_or(CallError::NotInCall)
    }

    /// Advance the duration clock by one second. Legal only while active;
    /// the ticker task stops on the first error this returns.
    pub fn tick(&mut self) -> Result<u64, CallError> {
        let session = self.active_mut()?;
        session.elapsed_secs += 1;
        Ok(session.elapsed_secs)
    }

    /// Flip the microphone mute flag; returns the new value.
    pub fn toggle_mute(&mut self) -> Result<bool, CallError> {
        let session = self.active_mut()?;
        session.muted = !session.muted;
        Ok(session.muted)
    }

    /// Flip the camera-off flag; returns the new value.
    pub fn toggle_camera(&mut self) -> Result<bool, CallError> {
        let session = self.active_mut()?;
        session.camera_off = !session.camera_off;
        Ok(session.camera_off)
    }

    /// Flip the loudspeaker flag; returns the new value.
    pub fn toggle_speaker(&mut self) -> Result<bool, CallError> {
        let session = self.active_mut()?;
        session.speaker_on = !session.speaker_on;
        Ok(session.speaker_on)
    }

    /// End the active call and release the session.
    pub fn end(&mut self) -> Result<CallSummary, CallError> {
        let mut session = self.session.take().ok_or(CallError::NotInCall)?;
        session.phase = CallPhase::Ended;
        Ok(CallSummary {
            contact_id: session.contact_id,
            medium: session.medium,
            duration_secs: session.elapsed_secs,
        })
    }
}
