//! Session-scoped state of the note editor.

use serde::{Deserialize, Serialize};

use scribe_core::{Label, Note, NoteId, NoteStatus, NoteType, PinnedStatus, Reminder};

use crate::items::EditListItem;

/// Everything an edit session knows about the note being edited.
///
/// `note` lags behind the UI: text edits land in `items` and are folded back
/// into `note` when the session commits. `status`, `pinned` and `reminder`
/// are kept apart from `note` for the same reason and copied into it on
/// commit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    /// Whether the note was created by this session.
    pub is_new_note: bool,
    pub note: Note,
    /// Labels on the note. Always reflects the UI.
    pub labels: Vec<Label>,
    pub status: NoteStatus,
    pub pinned: PinnedStatus,
    pub reminder: Option<Reminder>,
    /// Authoritative row list.
    pub items: Vec<EditListItem>,
}

impl Default for EditState {
    fn default() -> Self {
        let note = Note::unloaded();
        Self {
            is_new_note: false,
            status: note.status,
            pinned: note.pinned,
            reminder: None,
            labels: Vec::new(),
            items: Vec::new(),
            note,
        }
    }
}

impl EditState {
    /// Whether the note is in trash.
    pub fn is_in_trash(&self) -> bool {
        self.status == NoteStatus::Deleted
    }

    /// Number of checklist item rows.
    pub fn checklist_item_count(&self) -> usize {
        self.items.iter().filter(|item| item.as_item().is_some()).count()
    }

    pub fn ui_state(&self) -> NoteUiState {
        NoteUiState {
            note_type: self.note.note_type,
            status: self.status,
            pinned: self.pinned,
            reminder: self.reminder.clone(),
        }
    }
}

/// Observable note properties shown around the editor (toolbar, menus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteUiState {
    pub note_type: NoteType,
    pub status: NoteStatus,
    pub pinned: PinnedStatus,
    pub reminder: Option<Reminder>,
}

impl Default for NoteUiState {
    fn default() -> Self {
        EditState::default().ui_state()
    }
}

/// State kept by the host across process recreation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub note_id: NoteId,
    pub is_new_note: bool,
}
