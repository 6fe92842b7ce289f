//! Section navigation.

use tracing::debug;

use courier_shared::types::Section;
use courier_shared::CourierError;

use crate::commands::lock;
use crate::events::StateEvent;
use crate::state::SharedState;

/// Mount a top-level screen. Plain assignment: always succeeds, keeps no
/// history, and transient per-screen state is free to be discarded.
pub fn set_active_section(state: &SharedState, section: Section) -> Result<Section, CourierError> {
    let mut guard = lock(state)?;
    guard.section = section;
    guard.notifier.emit(StateEvent::SectionChanged { section });
    debug!(?section, "section changed");
    Ok(section)
}

/// The currently mounted section.
pub fn active_section(state: &SharedState) -> Result<Section, CourierError> {
    Ok(lock(state)?.section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::sync::{Arc, Mutex};

    #[test]
    fn every_section_mounts_and_notifies() {
        let state: SharedState = Arc::new(Mutex::new(AppState::seeded()));
        let mut events = state.lock().unwrap().notifier.subscribe();
        assert_eq!(active_section(&state).unwrap(), Section::Chats);

        for section in [
            Section::Contacts,
            Section::Calls,
            Section::Media,
            Section::Profile,
            Section::Chats,
        ] {
            set_active_section(&state, section).unwrap();
            assert_eq!(active_section(&state).unwrap(), section);
            assert_eq!(
                events.try_recv().unwrap(),
                StateEvent::SectionChanged { section }
            );
        }
    }
}
