//! Profile-screen intents.

use tracing::info;

use courier_shared::CourierError;

use crate::commands::lock;
use crate::events::StateEvent;
use crate::profile::UserProfile;
use crate::state::SharedState;

/// The local user's profile as currently held.
pub fn get_profile(state: &SharedState) -> Result<UserProfile, CourierError> {
    Ok(lock(state)?.profile.clone())
}

/// Replace the profile wholesale (the profile screen edits a draft and
/// saves it in one go). Invalid drafts are rejected, the held profile
/// stays as it was.
pub fn update_profile(state: &SharedState, profile: UserProfile) -> Result<(), CourierError> {
    profile.validate()?;
    let mut guard = lock(state)?;
    guard.profile = profile;
    guard.notifier.emit(StateEvent::ProfileUpdated);
    info!("profile updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use courier_shared::ValidationError;
    use std::sync::{Arc, Mutex};

    #[test]
    fn save_and_reload() {
        let state: SharedState = Arc::new(Mutex::new(AppState::seeded()));
        let mut draft = get_profile(&state).unwrap();
        draft.bio = "Out of office".into();
        draft.notify_sound = false;

        update_profile(&state, draft.clone()).unwrap();
        assert_eq!(get_profile(&state).unwrap(), draft);
    }

    #[test]
    fn invalid_draft_is_rejected() {
        let state: SharedState = Arc::new(Mutex::new(AppState::seeded()));
        let before = get_profile(&state).unwrap();
        let draft = UserProfile {
            display_name: "".into(),
            ..before.clone()
        };

        let err = update_profile(&state, draft).unwrap_err();
        assert!(matches!(
            err,
            CourierError::Validation(ValidationError::EmptyDisplayName)
        ));
        assert_eq!(get_profile(&state).unwrap(), before);
    }
}
