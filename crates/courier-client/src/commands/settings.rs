//! Display-settings intents: accent theme and font scale.
//!
//! Settings live once in the shared state; a change event fans out to
//! every mounted screen immediately, nothing is cached per screen.

use tracing::info;

use courier_shared::CourierError;

use crate::commands::lock;
use crate::events::StateEvent;
use crate::settings::DisplaySettings;
use crate::state::SharedState;

/// Current theme and font scale.
pub fn get_settings(state: &SharedState) -> Result<DisplaySettings, CourierError> {
    Ok(lock(state)?.settings.clone())
}

fn emit_settings(guard: &crate::state::AppState) {
    guard.notifier.emit(StateEvent::SettingsChanged {
        theme_index: guard.settings.theme_index(),
        font_size_px: guard.settings.font_size_px(),
    });
}

/// Select an accent theme from the fixed palette.
pub fn set_theme(state: &SharedState, index: usize) -> Result<usize, CourierError> {
    let mut guard = lock(state)?;
    guard.settings.set_theme(index)?;
    emit_settings(&guard);
    info!(theme = index, "theme changed");
    Ok(index)
}

/// Set the interface font size in pixels.
pub fn set_font_size(state: &SharedState, px: u8) -> Result<u8, CourierError> {
    let mut guard = lock(state)?;
    guard.settings.set_font_size(px)?;
    emit_settings(&guard);
    info!(px, "font size changed");
    Ok(px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use courier_shared::ValidationError;
    use std::sync::{Arc, Mutex};

    fn session() -> SharedState {
        Arc::new(Mutex::new(AppState::seeded()))
    }

    #[test]
    fn accepted_change_is_visible_to_every_reader() {
        let state = session();
        let mut events = state.lock().unwrap().notifier.subscribe();

        set_font_size(&state, 16).unwrap();
        set_theme(&state, 2).unwrap();

        let settings = get_settings(&state).unwrap();
        assert_eq!(settings.font_size_px(), 16);
        assert_eq!(settings.theme_index(), 2);

        assert_eq!(
            events.try_recv().unwrap(),
            StateEvent::SettingsChanged {
                theme_index: 0,
                font_size_px: 16
            }
        );
        assert_eq!(
            events.try_recv().unwrap(),
            StateEvent::SettingsChanged {
                theme_index: 2,
                font_size_px: 16
            }
        );
    }

    #[test]
    fn rejected_values_change_nothing_and_emit_nothing() {
        let state = session();
        let mut events = state.lock().unwrap().notifier.subscribe();
        let before = get_settings(&state).unwrap();

        for px in [11, 21] {
            let err = set_font_size(&state, px).unwrap_err();
            assert!(matches!(
                err,
                CourierError::Validation(ValidationError::FontSizeOutOfRange(_))
            ));
        }
        let err = set_theme(&state, 99).unwrap_err();
        assert!(matches!(
            err,
            CourierError::Validation(ValidationError::ThemeOutOfRange { .. })
        ));

        assert_eq!(get_settings(&state).unwrap(), before);
        assert!(events.try_recv().is_err());
    }
}
