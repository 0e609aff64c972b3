//! In-memory collaborators for deterministic testing.
//!
//! [`MockNoteStore`] implements both [`NotesRepository`] and
//! [`LabelsRepository`] over shared maps, and [`MockAlarmManager`] records
//! scheduled alarms. Both keep a call log for assertions.
//!
//! ## Usage
//!
//! ```rust
//! use scribe_core::mock::MockNoteStore;
//! use scribe_core::Label;
//!
//! let store = MockNoteStore::new().with_label(Label::new(1, "work"));
//! assert_eq!(store.note_count(), 0);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::defaults::NO_ID;
use crate::error::{Error, Result};
use crate::models::*;
use crate::traits::{LabelsRepository, NotesRepository, ReminderAlarmManager};

/// A recorded call against a mock collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub operation: String,
    pub id: i64,
}

#[derive(Debug, Default)]
struct StoreData {
    notes: BTreeMap<NoteId, Note>,
    labels: HashMap<LabelId, Label>,
    label_refs: Vec<LabelRef>,
    last_id: NoteId,
}

#[derive(Debug, Clone, Default)]
struct MockConfig {
    latency_ms: u64,
    fail_writes: bool,
}

/// In-memory notes and labels store.
#[derive(Clone, Default)]
pub struct MockNoteStore {
    data: Arc<Mutex<StoreData>>,
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl MockNoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a note. Its ID must not be [`NO_ID`].
    pub fn with_note(self, note: Note) -> Self {
        {
            let mut data = self.data.lock().unwrap();
            data.last_id = data.last_id.max(note.id);
            data.notes.insert(note.id, note);
        }
        self
    }

    /// Seed a label.
    pub fn with_label(self, label: Label) -> Self {
        self.data.lock().unwrap().labels.insert(label.id, label);
        self
    }

    /// Seed a label reference.
    pub fn with_label_ref(self, note_id: NoteId, label_id: LabelId) -> Self {
        self.data
            .lock()
            .unwrap()
            .label_refs
            .push(LabelRef::new(note_id, label_id));
        self
    }

    /// Set simulated latency for every operation.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        Arc::make_mut(&mut self.config).latency_ms = latency_ms;
        self
    }

    /// Make every write fail with a storage error.
    pub fn with_failing_writes(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail_writes = true;
        self
    }

    /// Current stored copy of a note.
    pub fn note(&self, id: NoteId) -> Option<Note> {
        self.data.lock().unwrap().notes.get(&id).cloned()
    }

    /// Number of stored notes.
    pub fn note_count(&self) -> usize {
        self.data.lock().unwrap().notes.len()
    }

    /// All stored label references.
    pub fn label_refs(&self) -> Vec<LabelRef> {
        self.data.lock().unwrap().label_refs.clone()
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of logged calls for an operation.
    pub fn call_count(&self, operation: &str) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    async fn record(&self, operation: &str, id: i64) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }
        tracing::trace!(subsystem = "store", component = "mock_store", op = operation, id, "Mock call");
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            id,
        });
    }

    fn check_write(&self, operation: &str) -> Result<()> {
        if self.config.fail_writes {
            return Err(Error::Storage(format!("{operation} rejected by mock store")));
        }
        Ok(())
    }
}

#[async_trait]
impl NotesRepository for MockNoteStore {
    async fn get_note_by_id(&self, id: NoteId) -> Result<Option<Note>> {
        self.record("get_note_by_id", id).await;
        Ok(self.note(id))
    }

    async fn get_note_by_id_with_labels(&self, id: NoteId) -> Result<Option<NoteWithLabels>> {
        self.record("get_note_by_id_with_labels", id).await;
        let data = self.data.lock().unwrap();
        Ok(data.notes.get(&id).map(|note| {
            let labels = data
                .label_refs
                .iter()
                .filter(|r| r.note_id == id)
                .filter_map(|r| data.labels.get(&r.label_id).cloned())
                .collect();
            NoteWithLabels {
                note: note.clone(),
                labels,
            }
        }))
    }

    async fn insert_note(&self, note: &Note) -> Result<NoteId> {
        self.record("insert_note", note.id).await;
        self.check_write("insert_note")?;
        let mut data = self.data.lock().unwrap();
        let id = if note.id == NO_ID {
            data.last_id + 1
        } else {
            note.id
        };
        data.last_id = data.last_id.max(id);
        data.notes.insert(id, Note { id, ..note.clone() });
        Ok(id)
    }

    async fn update_note(&self, note: &Note) -> Result<()> {
        self.record("update_note", note.id).await;
        self.check_write("update_note")?;
        self.data
            .lock()
            .unwrap()
            .notes
            .insert(note.id, note.clone());
        Ok(())
    }

    async fn delete_note(&self, note: &Note) -> Result<()> {
        self.record("delete_note", note.id).await;
        self.check_write("delete_note")?;
        let mut data = self.data.lock().unwrap();
        data.notes.remove(&note.id);
        data.label_refs.retain(|r| r.note_id != note.id);
        Ok(())
    }
}

#[async_trait]
impl LabelsRepository for MockNoteStore {
    async fn get_label_by_id(&self, id: LabelId) -> Result<Option<Label>> {
        self.record("get_label_by_id", id).await;
        Ok(self.data.lock().unwrap().labels.get(&id).cloned())
    }

    async fn insert_label_refs(&self, refs: &[LabelRef]) -> Result<()> {
        self.record("insert_label_refs", refs.len() as i64).await;
        self.check_write("insert_label_refs")?;
        let mut data = self.data.lock().unwrap();
        for r in refs {
            if !data.label_refs.contains(r) {
                data.label_refs.push(*r);
            }
        }
        Ok(())
    }
}

/// Alarm scheduler that remembers scheduled reminders.
#[derive(Clone, Default)]
pub struct MockAlarmManager {
    alarms: Arc<Mutex<HashMap<NoteId, Reminder>>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl MockAlarmManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reminder currently scheduled for a note.
    pub fn alarm(&self, note_id: NoteId) -> Option<Reminder> {
        self.alarms.lock().unwrap().get(&note_id).cloned()
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, id: NoteId) {
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            id,
        });
    }
}

#[async_trait]
impl ReminderAlarmManager for MockAlarmManager {
    async fn set_note_reminder_alarm(&self, note: &Note) -> Result<()> {
        self.record("set_note_reminder_alarm", note.id);
        match &note.reminder {
            Some(reminder) => {
                self.alarms
                    .lock()
                    .unwrap()
                    .insert(note.id, reminder.clone());
                Ok(())
            }
            None => Err(Error::InvalidInput(format!(
                "note {} has no reminder to schedule",
                note.id
            ))),
        }
    }

    async fn remove_alarm(&self, note_id: NoteId) -> Result<()> {
        self.record("remove_alarm", note_id);
        self.alarms.lock().unwrap().remove(&note_id);
        Ok(())
    }
}
