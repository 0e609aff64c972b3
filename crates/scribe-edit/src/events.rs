//! One-shot events sent from an edit session to the presentation layer.
//!
//! Events are delivered at most once through an unbounded
//! `tokio::sync::mpsc` channel. The receiver is handed out when the session
//! is created; once it is dropped, emitted events are silently discarded.

use serde::Serialize;
use tokio::sync::mpsc;

use scribe_core::{Note, NoteId, NoteStatus};

/// Request to move input focus to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusChange {
    /// Row index in the item list.
    pub item_pos: usize,
    /// Cursor offset in the row text, in characters.
    pub pos: usize,
    /// Whether the row was already displayed before the change.
    pub item_exists: bool,
}

/// User-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMessage {
    BlankNoteDiscarded,
    RestoredNote,
    CantEditInTrash,
}

/// Status change of one or more notes, kept by the UI to offer undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    /// Notes as they were before the change.
    pub notes: Vec<Note>,
    pub old_status: NoteStatus,
    pub new_status: NoteStatus,
}

/// Content handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareData {
    pub title: String,
    pub content: String,
}

/// Event emitted by an edit session.
///
/// Serialized as JSON with a `type` tag, e.g.
/// `{"type":"ShowReminderDialog","note_id":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum EditEvent {
    Focus(FocusChange),
    Message { message: EditMessage },
    StatusChange(StatusChange),
    Share(ShareData),
    /// Ask before deleting a note in trash forever.
    ShowDeleteConfirm,
    /// Ask before dropping checked items on checklist to text conversion.
    ShowRemoveCheckedConfirm,
    ShowReminderDialog { note_id: NoteId },
    ShowLabelsScreen { note_id: NoteId },
    Exit,
}

impl EditEvent {
    /// Dot-namespaced event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            EditEvent::Focus(_) => "focus.change",
            EditEvent::Message { .. } => "message.show",
            EditEvent::StatusChange(_) => "note.status_changed",
            EditEvent::Share(_) => "note.share",
            EditEvent::ShowDeleteConfirm => "confirm.delete",
            EditEvent::ShowRemoveCheckedConfirm => "confirm.remove_checked",
            EditEvent::ShowReminderDialog { .. } => "navigate.reminder",
            EditEvent::ShowLabelsScreen { .. } => "navigate.labels",
            EditEvent::Exit => "navigate.exit",
        }
    }
}

/// Receiving half of a session's event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<EditEvent>;

/// Sending half of a session's event channel.
#[derive(Debug, Clone)]
pub struct EventEmitter {
    tx: mpsc::UnboundedSender<EditEvent>,
}

impl EventEmitter {
    /// Create an emitter and the receiver its events are delivered to.
    pub fn channel() -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emit an event. If the receiver was dropped, the event is discarded.
    pub fn emit(&self, event: EditEvent) {
        tracing::debug!(event_type = event.event_type(), "Edit event emit");
        let _ = self.tx.send(event);
    }

    /// Whether the receiver is still listening.
    pub fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }
}
