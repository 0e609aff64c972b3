//! Shared fixtures for edit session tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use scribe_core::mock::{MockAlarmManager, MockNoteStore};
use scribe_core::{Note, NoteId, NoteMetadata, NoteType};
use scribe_edit::{EditConfig, EditEvent, EditSession, EventReceiver};

pub struct Fixture {
    pub store: Arc<MockNoteStore>,
    pub alarms: Arc<MockAlarmManager>,
    pub session: EditSession,
    pub events: EventReceiver,
}

pub fn setup(store: MockNoteStore) -> Fixture {
    setup_with_config(store, EditConfig::default())
}

pub fn setup_with_config(store: MockNoteStore, config: EditConfig) -> Fixture {
    let store = Arc::new(store);
    let alarms = Arc::new(MockAlarmManager::new());
    let (session, events) = EditSession::with_store(store.clone(), alarms.clone(), config);
    Fixture {
        store,
        alarms,
        session,
        events,
    }
}

/// Take every event emitted so far.
pub fn drain(events: &mut EventReceiver) -> Vec<EditEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

pub fn old_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap()
}

pub fn text_note(id: NoteId, title: &str, content: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        ..Note::blank(old_date())
    }
}

pub fn list_note(id: NoteId, title: &str, items: &[(&str, bool)]) -> Note {
    Note {
        id,
        note_type: NoteType::List,
        title: title.to_string(),
        content: items
            .iter()
            .map(|(content, _)| *content)
            .collect::<Vec<_>>()
            .join("\n"),
        metadata: NoteMetadata::List {
            checked: items.iter().map(|(_, checked)| *checked).collect(),
        },
        ..Note::blank(old_date())
    }
}
