//! User actions as values, so they can be queued and replayed in order.

use scribe_core::{Label, LabelId, NoteId, Reminder, Result};

use crate::session::EditSession;
use crate::state::SavedState;

/// An editor action dispatched to an [`EditSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    Start { note_id: NoteId, label_id: LabelId },
    Restore(SavedState),
    Save,
    Exit,
    ToggleNoteType,
    ConvertToText { keep_checked_items: bool },
    TogglePin,
    ChangeReminder,
    ChangeLabels,
    ReminderChanged(Option<Reminder>),
    LabelsChanged(Vec<Label>),
    MoveNoteAndExit,
    RestoreNoteAndEdit,
    CopyNote {
        untitled_name: String,
        copy_suffix: String,
    },
    ShareNote,
    DeleteNote,
    DeleteNoteForeverAndExit,
    UncheckAllItems,
    DeleteCheckedItems,
    TitleChanged(String),
    ContentChanged(String),
    ItemTextChanged {
        pos: usize,
        text: String,
        is_paste: bool,
    },
    ItemChecked { pos: usize, checked: bool },
    ItemBackspacePressed(usize),
    ItemDeleteClicked(usize),
    ItemAddClicked(usize),
    ItemsSwapped { from: usize, to: usize },
    NoteLabelClicked,
    NoteClickedToEdit,
}

impl EditAction {
    /// Operation name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            EditAction::Start { .. } => "start",
            EditAction::Restore(_) => "restore",
            EditAction::Save => "save_note",
            EditAction::Exit => "exit",
            EditAction::ToggleNoteType => "toggle_note_type",
            EditAction::ConvertToText { .. } => "convert_to_text",
            EditAction::TogglePin => "toggle_pin",
            EditAction::ChangeReminder => "change_reminder",
            EditAction::ChangeLabels => "change_labels",
            EditAction::ReminderChanged(_) => "reminder_changed",
            EditAction::LabelsChanged(_) => "labels_changed",
            EditAction::MoveNoteAndExit => "move_note_and_exit",
            EditAction::RestoreNoteAndEdit => "restore_note_and_edit",
            EditAction::CopyNote { .. } => "copy_note",
            EditAction::ShareNote => "share_note",
            EditAction::DeleteNote => "delete_note",
            EditAction::DeleteNoteForeverAndExit => "delete_note_forever_and_exit",
            EditAction::UncheckAllItems => "uncheck_all_items",
            EditAction::DeleteCheckedItems => "delete_checked_items",
            EditAction::TitleChanged(_) => "title_changed",
            EditAction::ContentChanged(_) => "content_changed",
            EditAction::ItemTextChanged { .. } => "item_text_changed",
            EditAction::ItemChecked { .. } => "item_checked",
            EditAction::ItemBackspacePressed(_) => "item_backspace_pressed",
            EditAction::ItemDeleteClicked(_) => "item_delete_clicked",
            EditAction::ItemAddClicked(_) => "item_add_clicked",
            EditAction::ItemsSwapped { .. } => "items_swapped",
            EditAction::NoteLabelClicked => "note_label_clicked",
            EditAction::NoteClickedToEdit => "note_clicked_to_edit",
        }
    }
}

impl EditSession {
    /// Run one action against the session.
    pub async fn apply(&mut self, action: EditAction) -> Result<()> {
        match action {
            EditAction::Start { note_id, label_id } => self.start(note_id, label_id).await?,
            EditAction::Restore(saved) => self.restore(saved).await?,
            EditAction::Save => {
                self.save_note().await?;
            }
            EditAction::Exit => self.exit().await?,
            EditAction::ToggleNoteType => self.toggle_note_type(),
            EditAction::ConvertToText { keep_checked_items } => {
                self.convert_to_text(keep_checked_items)
            }
            EditAction::TogglePin => self.toggle_pin(),
            EditAction::ChangeReminder => self.change_reminder(),
            EditAction::ChangeLabels => self.change_labels(),
            EditAction::ReminderChanged(reminder) => self.on_reminder_change(reminder),
            EditAction::LabelsChanged(labels) => self.on_labels_change(labels),
            EditAction::MoveNoteAndExit => self.move_note_and_exit().await?,
            EditAction::RestoreNoteAndEdit => self.restore_note_and_edit(),
            EditAction::CopyNote {
                untitled_name,
                copy_suffix,
            } => self.copy_note(&untitled_name, &copy_suffix).await?,
            EditAction::ShareNote => self.share_note(),
            EditAction::DeleteNote => self.delete_note().await?,
            EditAction::DeleteNoteForeverAndExit => self.delete_note_forever_and_exit().await?,
            EditAction::UncheckAllItems => self.uncheck_all_items(),
            EditAction::DeleteCheckedItems => self.delete_checked_items(),
            EditAction::TitleChanged(text) => self.on_title_changed(&text),
            EditAction::ContentChanged(text) => self.on_content_changed(&text),
            EditAction::ItemTextChanged {
                pos,
                text,
                is_paste,
            } => self.on_item_text_changed(pos, &text, is_paste),
            EditAction::ItemChecked { pos, checked } => self.on_item_checked(pos, checked),
            EditAction::ItemBackspacePressed(pos) => self.on_item_backspace_pressed(pos),
            EditAction::ItemDeleteClicked(pos) => self.on_item_delete_clicked(pos),
            EditAction::ItemAddClicked(pos) => self.on_item_add_clicked(pos),
            EditAction::ItemsSwapped { from, to } => self.on_item_swapped(from, to),
            EditAction::NoteLabelClicked => self.on_note_label_clicked(),
            EditAction::NoteClickedToEdit => self.on_note_clicked_to_edit(),
        }
        Ok(())
    }
}
