//! Core traits for scribe abstractions.
//!
//! These traits define the collaborators the editor consumes: the notes
//! store, the labels store, and the reminder alarm scheduler. Concrete
//! backends implement them; [`crate::mock`] provides in-memory versions.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note CRUD operations.
#[async_trait]
pub trait NotesRepository: Send + Sync {
    /// Fetch a note by ID, `None` if it doesn't exist.
    async fn get_note_by_id(&self, id: NoteId) -> Result<Option<Note>>;

    /// Fetch a note by ID together with its labels.
    async fn get_note_by_id_with_labels(&self, id: NoteId) -> Result<Option<NoteWithLabels>>;

    /// Insert a note and return its assigned ID.
    ///
    /// A note whose ID is [`crate::defaults::NO_ID`] gets a fresh ID.
    async fn insert_note(&self, note: &Note) -> Result<NoteId>;

    /// Replace the stored note having the same ID.
    async fn update_note(&self, note: &Note) -> Result<()>;

    /// Permanently delete a note and its label references.
    async fn delete_note(&self, note: &Note) -> Result<()>;
}

// =============================================================================
// LABEL REPOSITORY TRAITS
// =============================================================================

/// Repository for label operations.
#[async_trait]
pub trait LabelsRepository: Send + Sync {
    /// Fetch a label by ID, `None` if it doesn't exist.
    async fn get_label_by_id(&self, id: LabelId) -> Result<Option<Label>>;

    /// Attach labels to notes.
    async fn insert_label_refs(&self, refs: &[LabelRef]) -> Result<()>;
}

// =============================================================================
// REMINDER TRAITS
// =============================================================================

/// Schedules reminder alarms with the host platform.
#[async_trait]
pub trait ReminderAlarmManager: Send + Sync {
    /// Schedule the alarm for the note's reminder.
    async fn set_note_reminder_alarm(&self, note: &Note) -> Result<()>;

    /// Cancel any alarm scheduled for a note.
    async fn remove_alarm(&self, note_id: NoteId) -> Result<()>;
}
