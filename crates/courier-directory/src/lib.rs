//! # courier-directory
//!
//! Read-only reference collections behind the contacts, calls and media
//! screens. In a complete client these would be paged query results from
//! a backend; here they are static fixtures behind the same synchronous
//! query surface, so a real provider can slot in later.
//!
//! Queries filter by predicate and clone out; nothing here ever mutates
//! the backing collections.

pub mod fixtures;
pub mod models;

use courier_shared::constants::RECENT_CALLS_WINDOW;
use courier_shared::types::{CallOutcome, ContactId, MediaKind};

pub use models::{CallRecord, Contact, MediaItem};

/// Predicate for the call-history tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallFilter {
    #[default]
    All,
    Missed,
    /// Fixed-size prefix of the history in list order, not a time window.
    Recent,
}

/// Predicate for the media-browser tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaFilter {
    #[default]
    All,
    Images,
    Videos,
    Documents,
}

/// The directory provider: synchronous, read-only queries over static
/// collections.
#[derive(Debug)]
pub struct Directory {
    contacts: Vec<Contact>,
    calls: Vec<CallRecord>,
    media: Vec<MediaItem>,
}

impl Directory {
    /// Build the directory from the hard-coded fixtures.
    pub fn seeded() -> Self {
        Self {
            contacts: fixtures::seed_contacts(),
            calls: fixtures::seed_calls(),
            media: fixtures::seed_media(),
        }
    }

    pub fn list_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Look up one contact by id.
    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn list_calls(&self, filter: CallFilter) -> Vec<CallRecord> {
        match filter {
            CallFilter::All => self.calls.clone(),
            CallFilter::Missed => self
                .calls
                .iter()
                .filter(|c| c.outcome == CallOutcome::Missed)
                .cloned()
                .collect(),
            CallFilter::Recent => self
                .calls
                .iter()
                .take(RECENT_CALLS_WINDOW)
                .cloned()
                .collect(),
        }
    }

    pub fn list_media(&self, filter: MediaFilter) -> Vec<MediaItem> {
        let kind = match filter {
            MediaFilter::All => return self.media.clone(),
            MediaFilter::Images => MediaKind::Image,
            MediaFilter::Videos => MediaKind::Video,
            MediaFilter::Documents => MediaKind::Document,
        };
        self.media
            .iter()
            .filter(|m| m.kind == kind)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missed_calls_all_have_zero_duration() {
        let dir = Directory::seeded();
        let missed = dir.list_calls(CallFilter::Missed);
        assert!(!missed.is_empty());
        assert!(missed
            .iter()
            .all(|c| c.outcome == CallOutcome::Missed && c.duration_secs == 0));
    }

    #[test]
    fn recent_is_a_fixed_prefix_in_list_order() {
        let dir = Directory::seeded();
        let all = dir.list_calls(CallFilter::All);
        let recent = dir.list_calls(CallFilter::Recent);
        assert_eq!(recent.len(), RECENT_CALLS_WINDOW);
        assert_eq!(recent.as_slice(), &all[..RECENT_CALLS_WINDOW]);
    }

    #[test]
    fn media_filters_partition_the_collection() {
        let dir = Directory::seeded();
        let all = dir.list_media(MediaFilter::All);
        let images = dir.list_media(MediaFilter::Images);
        let videos = dir.list_media(MediaFilter::Videos);
        let documents = dir.list_media(MediaFilter::Documents);

        assert_eq!(all.len(), images.len() + videos.len() + documents.len());
        assert!(images.iter().all(|m| m.kind == MediaKind::Image));
        assert!(videos.iter().all(|m| m.kind == MediaKind::Video));
        assert!(documents.iter().all(|m| m.kind == MediaKind::Document));
    }

    #[test]
    fn filtering_does_not_mutate_the_backing_collection() {
        let dir = Directory::seeded();
        let before = dir.list_calls(CallFilter::All);
        let _ = dir.list_calls(CallFilter::Missed);
        let _ = dir.list_media(MediaFilter::Videos);
        assert_eq!(dir.list_calls(CallFilter::All), before);
        assert_eq!(dir.list_contacts().len(), 7);
    }

    #[test]
    fn contact_lookup() {
        let dir = Directory::seeded();
        let first = dir.list_contacts()[0].clone();
        assert_eq!(dir.contact(first.id), Some(&first));
        assert!(dir.contact(ContactId::new()).is_none());
    }
}
