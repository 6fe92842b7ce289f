//! The local user's profile: identity fields plus the notification and
//! privacy switches of the profile screen. Session-local, like every
//! other setting here.

use serde::{Deserialize, Serialize};

use courier_shared::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub username: String,
    pub bio: String,
    pub email: String,
    pub phone: String,

    // Notifications
    pub notify_messages: bool,
    pub notify_sound: bool,
    pub notify_calls: bool,

    // Privacy & security
    pub show_online_status: bool,
    pub show_last_seen: bool,
    pub two_factor_enabled: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            display_name: "Vladimir Ivanov".into(),
            username: "@vladimir_ivanov".into(),
            bio: "Developer. Building things I enjoy".into(),
            email: "vladimir@example.com".into(),
            phone: "+7 (999) 123-45-67".into(),
            notify_messages: true,
            notify_sound: true,
            notify_calls: true,
            show_online_status: true,
            show_last_seen: true,
            two_factor_enabled: false,
        }
    }
}

impl UserProfile {
    /// A profile must at least carry a display name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::EmptyDisplayName);
        }
        Ok(())
    }
}
