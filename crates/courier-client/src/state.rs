//! Application state shared across all intent commands.
//!
//! The [`AppState`] struct is wrapped in `Arc<Mutex<..>>` and handed to
//! every command handler, so each intent runs as one synchronous
//! mutate-then-notify cycle under the lock.

use std::sync::{Arc, Mutex};

use courier_directory::Directory;
use courier_shared::types::Section;
use courier_store::ConversationStore;

use crate::call::CallController;
use crate::events::Notifier;
use crate::profile::UserProfile;
use crate::settings::DisplaySettings;
use crate::ticker::TickerHandle;

/// Shorthand for the shared, lock-guarded application state.
pub type SharedState = Arc<Mutex<AppState>>;

/// Central application state.
pub struct AppState {
    /// Chat list, message threads and the single selection.
    pub conversations: ConversationStore,

    /// Read-only contacts / call history / media collections.
    pub directory: Directory,

    /// Which top-level screen is mounted.
    pub section: Section,

    /// Accent theme and font scale, read by every screen.
    pub settings: DisplaySettings,

    /// The local user's editable profile.
    pub profile: UserProfile,

    /// The call-session state machine.
    pub calls: CallController,

    /// Handle of the 1 Hz duration ticker while a call is active.
    /// Aborts the task when dropped, so tearing the state down can never
    /// leak a recurring timer.
    pub(crate) call_ticker: Option<TickerHandle>,

    /// Broadcast channel the rendering surface subscribes to.
    pub notifier: Notifier,
}

impl AppState {
    /// Create a state with an empty conversation store and defaults
    /// everywhere else. The directory is reference data and always
    /// carries its fixtures.
    pub fn new() -> Self {
        Self {
            conversations: ConversationStore::new(),
            directory: Directory::seeded(),
            section: Section::default(),
            settings: DisplaySettings::default(),
            profile: UserProfile::default(),
            calls: CallController::new(),
            call_ticker: None,
            notifier: Notifier::new(),
        }
    }

    /// Create the state every screen starts from: seeded chat list and
    /// directory, chats section active, default theme and font.
    pub fn seeded() -> Self {
        Self {
            conversations: ConversationStore::seeded(),
            ..Self::new()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
