//! Hard-coded directory collections.
//!
//! Contacts 1-5 line up with the seeded chats; fixed ids keep list keys
//! stable. Call durations are in seconds (a missed call is zero).

use chrono::{DateTime, Utc};
use uuid::Uuid;

use courier_shared::types::{
    CallId, CallMedium, CallOutcome, ContactId, MediaId, MediaKind,
};

use crate::models::{CallRecord, Contact, MediaItem};

fn today_at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc::now()
        .date_naive()
        .and_hms_opt(hour, min, 0)
        .unwrap_or_default()
        .and_utc()
}

/// Stable id for the n-th seeded contact.
pub fn contact_id(n: u128) -> ContactId {
    ContactId(Uuid::from_u128(0x00c1_0000 + n))
}

pub fn seed_contacts() -> Vec<Contact> {
    let rows: [(u128, &str, &str, bool); 7] = [
        (1, "Anna Smirnova", "Working on a project", true),
        (2, "Dmitry Ivanov", "In a meeting", true),
        (3, "Masha Petrova", "Busy", false),
        (4, "Dev Team", "Active", true),
        (5, "Alexander Kozlov", "Stepped away", false),
        (6, "Elena Volkova", "Available", true),
        (7, "Igor Morozov", "On vacation", false),
    ];
    rows.into_iter()
        .map(|(n, name, status, online)| Contact {
            id: contact_id(n),
            name: name.to_owned(),
            avatar: None,
            status: status.to_owned(),
            online,
        })
        .collect()
}

pub fn seed_calls() -> Vec<CallRecord> {
    use CallMedium::{Video, Voice};
    use CallOutcome::{Incoming, Missed, Outgoing};

    let rows: [(u128, u128, CallOutcome, CallMedium, (u32, u32), u64); 5] = [
        (1, 1, Incoming, Video, (14, 32), 754),
        (2, 2, Outgoing, Voice, (13, 15), 312),
        (3, 3, Missed, Video, (12, 45), 0),
        (4, 4, Incoming, Voice, (11, 20), 1545),
        (5, 5, Outgoing, Video, (10, 10), 510),
    ];
    rows.into_iter()
        .map(|(n, contact, outcome, medium, (h, m), duration_secs)| CallRecord {
            id: CallId(Uuid::from_u128(0x00c2_0000 + n)),
            contact_id: contact_id(contact),
            outcome,
            medium,
            time: today_at(h, m),
            duration_secs,
        })
        .collect()
}

pub fn seed_media() -> Vec<MediaItem> {
    use MediaKind::{Document, Image, Video};

    let rows: [(u128, MediaKind, &str, u64, (u32, u32)); 8] = [
        (1, Image, "Screenshot_2024.png", 2_411_520, (14, 32)),
        (2, Video, "presentation.mp4", 47_290_368, (13, 15)),
        (3, Document, "document.pdf", 1_258_291, (12, 45)),
        (4, Image, "photo_2024.jpg", 3_984_588, (11, 20)),
        (5, Document, "report.xlsx", 876_544, (10, 10)),
        (6, Video, "video_call.mp4", 82_208_358, (9, 30)),
        (7, Image, "design_mockup.png", 5_452_595, (8, 15)),
        (8, Document, "contract.docx", 657_408, (7, 45)),
    ];
    rows.into_iter()
        .map(|(n, kind, name, size_bytes, (h, m))| MediaItem {
            id: MediaId(Uuid::from_u128(0x00c3_0000 + n)),
            kind,
            name: name.to_owned(),
            size_bytes,
            timestamp: today_at(h, m),
        })
        .collect()
}
