//! Read-only directory queries for the contacts, calls and media screens.

use serde::Serialize;

use courier_directory::{CallFilter, Contact, MediaFilter, MediaItem};
use courier_shared::format::format_elapsed;
use courier_shared::types::{CallId, CallMedium, CallOutcome, ContactId};
use courier_shared::CourierError;

use crate::commands::lock;
use crate::state::SharedState;

/// Call-log row with the contact name joined in and the duration already
/// formatted (missed calls render without one).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallRecordDto {
    pub id: CallId,
    pub contact_id: ContactId,
    pub contact_name: String,
    pub outcome: CallOutcome,
    pub medium: CallMedium,
    pub time: String,
    pub duration: Option<String>,
}

/// The contact grid.
pub fn list_contacts(state: &SharedState) -> Result<Vec<Contact>, CourierError> {
    Ok(lock(state)?.directory.list_contacts().to_vec())
}

/// The call history under one of the log tabs.
pub fn list_calls(state: &SharedState, filter: CallFilter) -> Result<Vec<CallRecordDto>, CourierError> {
    let guard = lock(state)?;
    Ok(guard
        .directory
        .list_calls(filter)
        .into_iter()
        .map(|record| {
            let contact_name = guard
                .directory
                .contact(record.contact_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            CallRecordDto {
                id: record.id,
                contact_id: record.contact_id,
                contact_name,
                outcome: record.outcome,
                medium: record.medium,
                time: record.time.to_rfc3339(),
                duration: (record.duration_secs > 0).then(|| format_elapsed(record.duration_secs)),
            }
        })
        .collect())
}

/// The media browser under one of its tabs.
pub fn list_media(state: &SharedState, filter: MediaFilter) -> Result<Vec<MediaItem>, CourierError> {
    Ok(lock(state)?.directory.list_media(filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::sync::{Arc, Mutex};

    fn session() -> SharedState {
        Arc::new(Mutex::new(AppState::seeded()))
    }

    #[test]
    fn call_rows_join_contact_names() {
        let state = session();
        let rows = list_calls(&state, CallFilter::All).unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| !r.contact_name.is_empty()));
    }

    #[test]
    fn missed_rows_carry_no_duration() {
        let state = session();
        for row in list_calls(&state, CallFilter::All).unwrap() {
            match row.outcome {
                CallOutcome::Missed => assert!(row.duration.is_none()),
                _ => assert!(row.duration.is_some()),
            }
        }
    }

    #[test]
    fn durations_render_mm_ss() {
        let state = session();
        let rows = list_calls(&state, CallFilter::All).unwrap();
        assert_eq!(rows[0].duration.as_deref(), Some("12:34"));
    }

    #[test]
    fn media_tab_filters() {
        let state = session();
        let all = list_media(&state, MediaFilter::All).unwrap();
        let images = list_media(&state, MediaFilter::Images).unwrap();
        assert!(images.len() < all.len());
    }
}
