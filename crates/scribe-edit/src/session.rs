//! Edit session: state controller behind the note editor screen.
//!
//! An [`EditSession`] owns the single in-session copy of the note being
//! edited, its labels and the rows derived from them. The presentation layer
//! reports user input through the `on_*` callbacks and the menu operations,
//! observes [`NoteUiState`] and the published rows through `watch` channels,
//! and consumes one-shot [`EditEvent`]s from the receiver returned by
//! [`EditSession::new`].
//!
//! Rows are the source of truth for text while editing. The note is brought
//! up to date with [`EditSession::update_note`] before anything that needs
//! current text (saving, type conversion, status changes, sharing).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, instrument, trace, warn};
use uuid::Uuid;

use scribe_core::{
    Error, Label, LabelId, LabelRef, LabelsRepository, Note, NoteId, NoteMetadata, NoteStatus,
    NoteType, NoteWithLabels, NotesRepository, PinnedStatus, Reminder, ReminderAlarmManager,
    Result, NO_ID,
};

use crate::config::{EditConfig, ShownDateField};
use crate::events::{
    EditEvent, EditMessage, EventEmitter, EventReceiver, FocusChange, ShareData, StatusChange,
};
use crate::items::{create_list_items, EditItem, EditListItem};
use crate::state::{EditState, NoteUiState, SavedState};

/// State controller for one editor screen instance.
pub struct EditSession {
    id: Uuid,
    notes: Arc<dyn NotesRepository>,
    labels: Arc<dyn LabelsRepository>,
    alarms: Arc<dyn ReminderAlarmManager>,
    config: EditConfig,
    state: EditState,
    events: EventEmitter,
    ui_state_tx: watch::Sender<NoteUiState>,
    items_tx: watch::Sender<Vec<EditListItem>>,
}

impl EditSession {
    /// Create a session and the receiver its events are delivered to.
    pub fn new(
        notes: Arc<dyn NotesRepository>,
        labels: Arc<dyn LabelsRepository>,
        alarms: Arc<dyn ReminderAlarmManager>,
        config: EditConfig,
    ) -> (Self, EventReceiver) {
        let (events, rx) = EventEmitter::channel();
        let state = EditState::default();
        let (ui_state_tx, _) = watch::channel(state.ui_state());
        let (items_tx, _) = watch::channel(Vec::new());
        let session = Self {
            id: Uuid::now_v7(),
            notes,
            labels,
            alarms,
            config,
            state,
            events,
            ui_state_tx,
            items_tx,
        };
        (session, rx)
    }

    /// Create a session over a store serving both notes and labels.
    pub fn with_store<S>(
        store: Arc<S>,
        alarms: Arc<dyn ReminderAlarmManager>,
        config: EditConfig,
    ) -> (Self, EventReceiver)
    where
        S: NotesRepository + LabelsRepository + 'static,
    {
        let notes: Arc<dyn NotesRepository> = store.clone();
        let labels: Arc<dyn LabelsRepository> = store;
        Self::new(notes, labels, alarms, config)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// The note as of the last commit. May lag behind the rows.
    pub fn note(&self) -> &Note {
        &self.state.note
    }

    pub fn labels(&self) -> &[Label] {
        &self.state.labels
    }

    pub fn items(&self) -> &[EditListItem] {
        &self.state.items
    }

    pub fn ui_state(&self) -> NoteUiState {
        self.state.ui_state()
    }

    pub fn is_new_note(&self) -> bool {
        self.state.is_new_note
    }

    /// Observe note type, status, pinned status and reminder.
    pub fn subscribe_ui_state(&self) -> watch::Receiver<NoteUiState> {
        self.ui_state_tx.subscribe()
    }

    /// Observe the row list. Only structural changes are published; text
    /// edits and swaps are already shown by the UI that reported them.
    pub fn subscribe_items(&self) -> watch::Receiver<Vec<EditListItem>> {
        self.items_tx.subscribe()
    }

    /// State the host must keep to rebuild this session after recreation.
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            note_id: self.state.note.id,
            is_new_note: self.state.is_new_note,
        }
    }

    // =========================================================================
    // Loading and persistence
    // =========================================================================

    /// Reload the note of a session whose host was recreated.
    ///
    /// Call before [`EditSession::start`] so that it keeps editing the same
    /// note instead of creating another one.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn restore(&mut self, saved: SavedState) -> Result<()> {
        self.state.is_new_note = saved.is_new_note;
        match self.notes.get_note_by_id(saved.note_id).await? {
            Some(note) => self.state.note = note,
            None => warn!(note_id = saved.note_id, "Saved note no longer exists"),
        }
        Ok(())
    }

    /// Start editing the note `note_id`, or a new blank note if it doesn't
    /// exist. `label_id` is set on a newly created note if that label exists.
    ///
    /// Only the first call chooses the note: later calls reload the note
    /// already being edited, whatever their arguments.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn start(&mut self, note_id: NoteId, label_id: LabelId) -> Result<()> {
        let is_first_start = self.state.note.id == NO_ID;
        let lookup_id = if is_first_start {
            note_id
        } else {
            self.state.note.id
        };

        let (note, labels) = match self.notes.get_note_by_id_with_labels(lookup_id).await? {
            Some(NoteWithLabels { note, labels }) => (note, labels),
            None => {
                let mut note = Note::blank(Utc::now());
                note.id = self.notes.insert_note(&note).await?;

                let label = if label_id == NO_ID {
                    None
                } else {
                    self.labels.get_label_by_id(label_id).await?
                };
                if let Some(label) = &label {
                    self.labels
                        .insert_label_refs(&[LabelRef::new(note.id, label.id)])
                        .await?;
                }

                self.state.is_new_note = true;
                info!(note_id = note.id, "Created new blank note");
                (note, label.into_iter().collect())
            }
        };

        info!(note_id = note.id, note_type = ?note.note_type, status = ?note.status, "Editing note");
        self.state.status = note.status;
        self.state.pinned = note.pinned;
        self.state.reminder = note.reminder.clone();
        self.state.note = note;
        self.state.labels = labels;

        self.publish_ui_state();
        self.update_list_items();

        if is_first_start && self.state.is_new_note {
            if let Some(pos) = self.find_item_pos(EditListItem::is_content) {
                self.focus_item_at(pos, 0, false);
            }
        }
        Ok(())
    }

    /// Bring the note up to date with the rows and session flags.
    ///
    /// Doesn't touch the last modified date or the store.
    pub fn update_note(&mut self) {
        let state = &mut self.state;
        if state.items.is_empty() {
            // Nothing shown yet, only the session flags can differ.
            state.note.status = state.status;
            state.note.pinned = state.pinned;
            state.note.reminder = state.reminder.clone();
            return;
        }

        let title = state
            .items
            .iter()
            .find_map(|item| match item {
                EditListItem::Title { title, .. } => Some(title.clone()),
                _ => None,
            })
            .unwrap_or_else(|| state.note.title.clone());

        let (content, metadata) = match state.note.note_type {
            NoteType::Text => {
                let content = state
                    .items
                    .iter()
                    .find_map(|item| match item {
                        EditListItem::Content { content, .. } => Some(content.clone()),
                        _ => None,
                    })
                    .unwrap_or_else(|| state.note.content.clone());
                (content, NoteMetadata::Blank)
            }
            NoteType::List => {
                let items: Vec<&EditItem> =
                    state.items.iter().filter_map(EditListItem::as_item).collect();
                let content = items
                    .iter()
                    .map(|item| item.content.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                let checked = items.iter().map(|item| item.checked).collect();
                (content, NoteMetadata::List { checked })
            }
        };

        state.note = Note {
            title,
            content,
            metadata,
            status: state.status,
            pinned: state.pinned,
            reminder: state.reminder.clone(),
            ..state.note.clone()
        };
    }

    /// Commit the rows and write the note if it differs from the stored one.
    ///
    /// The compare-and-write runs in a task detached from the caller, so it
    /// completes even if the session is torn down while it is in flight.
    /// Returns whether the note was written.
    #[instrument(skip(self), fields(session_id = %self.id, note_id = self.state.note.id))]
    pub async fn save_note(&mut self) -> Result<bool> {
        self.update_note();

        let notes = Arc::clone(&self.notes);
        let note = self.state.note.clone();
        let saved = tokio::spawn(async move { persist_if_changed(notes.as_ref(), note).await })
            .await
            .map_err(|e| Error::Internal(format!("save task failed: {e}")))??;

        match saved {
            Some(note) => {
                self.state.note = note;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Leave the editor, discarding the note if it is blank.
    #[instrument(skip(self), fields(session_id = %self.id, note_id = self.state.note.id))]
    pub async fn exit(&mut self) -> Result<()> {
        self.update_note();
        if self.state.note.is_blank() {
            debug!("Discarding blank note");
            self.notes.delete_note(&self.state.note).await?;
            self.emit_message(EditMessage::BlankNoteDiscarded);
        }
        info!("Exiting editor");
        self.events.emit(EditEvent::Exit);
        Ok(())
    }

    // =========================================================================
    // Menu operations
    // =========================================================================

    /// Convert between text and checklist.
    ///
    /// A checklist with checked items isn't converted; the user is asked
    /// whether to drop them first, see [`EditSession::convert_to_text`].
    pub fn toggle_note_type(&mut self) {
        self.update_note();

        let note = &self.state.note;
        let converted = match note.note_type {
            NoteType::Text => note.as_list_note(),
            NoteType::List if note.has_checked_items() => {
                self.events.emit(EditEvent::ShowRemoveCheckedConfirm);
                return;
            }
            NoteType::List => note.as_text_note(true),
        };
        debug!(session_id = %self.id, note_type = ?converted.note_type, "Converted note type");
        self.state.note = converted;

        self.publish_ui_state();
        self.update_list_items();
    }

    /// Convert a checklist to text once the user decided about checked items.
    pub fn convert_to_text(&mut self, keep_checked_items: bool) {
        self.update_note();
        self.state.note = self.state.note.as_text_note(keep_checked_items);
        self.publish_ui_state();
        self.update_list_items();
    }

    /// Toggle between pinned and unpinned.
    ///
    /// # Panics
    ///
    /// If the note can't be pinned in its current status; the UI must not
    /// offer pinning then.
    pub fn toggle_pin(&mut self) {
        self.state.pinned = match self.state.pinned {
            PinnedStatus::Pinned => PinnedStatus::Unpinned,
            PinnedStatus::Unpinned => PinnedStatus::Pinned,
            PinnedStatus::CantPin => panic!("can't pin a note with status {:?}", self.state.status),
        };
        self.publish_ui_state();
    }

    /// Ask the UI to show the reminder dialog.
    pub fn change_reminder(&self) {
        self.events.emit(EditEvent::ShowReminderDialog {
            note_id: self.state.note.id,
        });
    }

    /// Ask the UI to show the labels screen.
    pub fn change_labels(&self) {
        self.events.emit(EditEvent::ShowLabelsScreen {
            note_id: self.state.note.id,
        });
    }

    /// The reminder dialog set or removed the reminder.
    pub fn on_reminder_change(&mut self, reminder: Option<Reminder>) {
        self.state.reminder = reminder;
        self.publish_ui_state();
    }

    /// The labels screen changed the note's labels.
    pub fn on_labels_change(&mut self, labels: Vec<Label>) {
        self.update_note();
        self.state.labels = labels;
        self.update_list_items();
    }

    /// Archive an active note, or unarchive it, then exit.
    pub async fn move_note_and_exit(&mut self) -> Result<()> {
        let new_status = if self.state.status == NoteStatus::Active {
            NoteStatus::Archived
        } else {
            NoteStatus::Active
        };
        self.change_note_status_and_exit(new_status).await
    }

    /// Take the note out of trash and keep editing it.
    pub fn restore_note_and_edit(&mut self) {
        self.update_note();
        self.state.status = NoteStatus::Active;
        self.state.pinned = PinnedStatus::Unpinned;
        self.state.note.status = self.state.status;
        self.state.note.pinned = self.state.pinned;
        info!(session_id = %self.id, note_id = self.state.note.id, "Restored note from trash");

        self.publish_ui_state();
        // Rows become editable again.
        self.update_list_items();

        self.emit_message(EditMessage::RestoredNote);
    }

    /// Save the note and continue editing a copy of it.
    ///
    /// A blank note isn't copied, only its title row changes since it will be
    /// discarded on exit anyway.
    #[instrument(skip(self), fields(session_id = %self.id, note_id = self.state.note.id))]
    pub async fn copy_note(&mut self, untitled_name: &str, copy_suffix: &str) -> Result<()> {
        self.save_note().await?;

        let new_title = Note::copied_title(&self.state.note.title, untitled_name, copy_suffix);

        if !self.state.note.is_blank() {
            let now = Utc::now();
            let copy = Note {
                id: NO_ID,
                title: new_title.clone(),
                added_date: now,
                last_modified_date: now,
                reminder: self.state.reminder.clone(),
                ..self.state.note.clone()
            };
            let id = self.notes.insert_note(&copy).await?;
            self.state.note = Note { id, ..copy };
            info!(copy_id = id, "Copied note");

            if self.state.reminder.is_some() {
                self.alarms.set_note_reminder_alarm(&self.state.note).await?;
            }

            let refs = self.create_label_refs(id);
            if !refs.is_empty() {
                self.labels.insert_label_refs(&refs).await?;
            }
        }

        let title_pos = self.find_item_pos(EditListItem::is_title);
        if let Some(pos) = title_pos {
            if let EditListItem::Title { title, .. } = &mut self.state.items[pos] {
                title.clone_from(&new_title);
            }
            self.focus_item_at(pos, new_title.chars().count(), true);
        }
        Ok(())
    }

    /// Ask the UI to share the note's current text.
    pub fn share_note(&mut self) {
        self.update_note();
        self.events.emit(EditEvent::Share(ShareData {
            title: self.state.note.title.clone(),
            content: self.state.note.as_text(),
        }));
    }

    /// Send the note to trash and exit, or ask to delete it forever if it
    /// already is in trash.
    pub async fn delete_note(&mut self) -> Result<()> {
        if self.state.is_in_trash() {
            self.events.emit(EditEvent::ShowDeleteConfirm);
            Ok(())
        } else {
            self.change_note_status_and_exit(NoteStatus::Deleted).await
        }
    }

    #[instrument(skip(self), fields(session_id = %self.id, note_id = self.state.note.id))]
    pub async fn delete_note_forever_and_exit(&mut self) -> Result<()> {
        info!("Deleting note forever");
        self.notes.delete_note(&self.state.note).await?;
        self.exit().await
    }

    pub fn uncheck_all_items(&mut self) {
        self.change_list_items(|list| {
            for item in list.iter_mut().filter_map(EditListItem::as_item_mut) {
                item.checked = false;
            }
        });
    }

    pub fn delete_checked_items(&mut self) {
        self.change_list_items(|list| {
            list.retain(|item| !matches!(item, EditListItem::Item(i) if i.checked));
        });
    }

    #[instrument(skip(self), fields(session_id = %self.id, note_id = self.state.note.id))]
    async fn change_note_status_and_exit(&mut self, new_status: NoteStatus) -> Result<()> {
        self.update_note();

        if !self.state.note.is_blank() {
            // A blank note is discarded on exit, so its status isn't worth changing.
            let old_note = self.state.note.clone();
            self.state.status = new_status;
            self.state.pinned = PinnedStatus::after_transition_to(new_status);

            if new_status == NoteStatus::Deleted && self.state.reminder.is_some() {
                self.state.reminder = None;
                self.alarms.remove_alarm(old_note.id).await?;
            }
            self.publish_ui_state();

            self.save_note().await?;
            info!(old_status = ?old_note.status, new_status = ?new_status, "Changed note status");

            self.events.emit(EditEvent::StatusChange(StatusChange {
                old_status: old_note.status,
                new_status,
                notes: vec![old_note],
            }));
        }

        self.exit().await
    }

    // =========================================================================
    // Row callbacks
    // =========================================================================

    /// The user edited the title row.
    pub fn on_title_changed(&mut self, text: &str) {
        match self.state.items.iter_mut().find(|item| item.is_title()) {
            Some(EditListItem::Title { title, editable: true }) => title.replace_range(.., text),
            Some(_) => warn!("Title change on a read-only row"),
            None => {}
        }
    }

    /// The user edited the content row of a text note.
    pub fn on_content_changed(&mut self, text: &str) {
        match self.state.items.iter_mut().find(|item| item.is_content()) {
            Some(EditListItem::Content {
                content,
                editable: true,
            }) => content.replace_range(.., text),
            Some(_) => warn!("Content change on a read-only row"),
            None => {}
        }
    }

    /// The user edited the text of the checklist item at `pos`.
    pub fn on_item_text_changed(&mut self, pos: usize, text: &str, is_paste: bool) {
        match self.editable_item_mut(pos) {
            Some(item) => {
                trace!(pos, "Item text changed");
                item.content.replace_range(.., text);
            }
            None => {
                warn!(pos, "Text change on a row that isn't an editable checklist item");
                return;
            }
        }
        self.on_item_changed(pos, is_paste);
    }

    /// The user checked or unchecked the checklist item at `pos`.
    pub fn on_item_checked(&mut self, pos: usize, checked: bool) {
        match self.editable_item_mut(pos) {
            Some(item) => item.checked = checked,
            None => warn!(pos, "Check change on a row that isn't an editable checklist item"),
        }
    }

    /// Split the checklist item at `pos` if its text contains line breaks.
    ///
    /// The first line stays in the item and each following line becomes a
    /// new unchecked item below it. Focus goes to the last new item: at its
    /// end for pasted text, at its start for a typed line break.
    pub fn on_item_changed(&mut self, pos: usize, is_paste: bool) {
        let lines: Vec<String> = match self.state.items.get(pos).and_then(EditListItem::as_item) {
            Some(item) if item.editable && item.content.contains('\n') => {
                item.content.split('\n').map(str::to_owned).collect()
            }
            _ => return,
        };

        let last_len = lines.last().map_or(0, |line| line.chars().count());
        let added = lines.len() - 1;
        self.change_list_items(|list| {
            let mut lines = lines.into_iter();
            if let Some(item) = list[pos].as_item_mut() {
                item.content = lines.next().unwrap_or_default();
            }
            for (i, line) in lines.enumerate() {
                list.insert(pos + 1 + i, EditListItem::Item(EditItem::new(line, false, true)));
            }
        });
        trace!(pos, added, "Split item on line breaks");

        self.focus_item_at(pos + added, if is_paste { last_len } else { 0 }, false);
    }

    /// Backspace at the start of the checklist item at `pos`: merge it into
    /// the previous item and focus the merge boundary.
    pub fn on_item_backspace_pressed(&mut self, pos: usize) {
        if pos == 0 {
            return;
        }
        let (prev_len, text) = match (
            self.state.items.get(pos - 1).and_then(EditListItem::as_item),
            self.state.items.get(pos).and_then(EditListItem::as_item),
        ) {
            (Some(prev), Some(item)) if prev.editable && item.editable => {
                (prev.content.chars().count(), item.content.clone())
            }
            (Some(_), Some(_)) => {
                warn!(pos, "Backspace on a read-only checklist item");
                return;
            }
            _ => return,
        };

        self.change_list_items(|list| {
            if let Some(prev) = list[pos - 1].as_item_mut() {
                prev.content.push_str(&text);
            }
            list.remove(pos);
        });

        self.focus_item_at(pos - 1, prev_len, true);
    }

    /// Delete the checklist item at `pos`, moving focus to the end of the
    /// previous item, or of the next item if there is no previous one.
    pub fn on_item_delete_clicked(&mut self, pos: usize) {
        if self.editable_item_mut(pos).is_none() {
            warn!(pos, "Delete on a row that isn't an editable checklist item");
            return;
        }

        let prev = pos
            .checked_sub(1)
            .and_then(|p| self.state.items.get(p))
            .and_then(EditListItem::as_item);
        let next = self.state.items.get(pos + 1).and_then(EditListItem::as_item);
        // Positions are those after the removal.
        let focus = match (prev, next) {
            (Some(prev), _) => Some((pos - 1, prev.content.chars().count())),
            (None, Some(next)) => Some((pos, next.content.chars().count())),
            (None, None) => None,
        };

        self.change_list_items(|list| {
            list.remove(pos);
        });

        if let Some((item_pos, text_pos)) = focus {
            self.focus_item_at(item_pos, text_pos, true);
        }
    }

    /// Add a blank item at `pos`, the position of the add-item row.
    ///
    /// Only accepted on an editable checklist, between the title row and the
    /// add-item row inclusive.
    pub fn on_item_add_clicked(&mut self, pos: usize) {
        if self.state.note.note_type != NoteType::List {
            warn!(pos, "Item add on a note that isn't a checklist");
            return;
        }
        let first = self.find_item_pos(EditListItem::is_title).map_or(0, |p| p + 1);
        let add_pos = self.find_item_pos(|item| *item == EditListItem::ItemAdd);
        match add_pos {
            Some(last) if (first..=last).contains(&pos) => {}
            Some(_) => {
                warn!(pos, "Item add outside the checklist");
                return;
            }
            None => {
                warn!(pos, "Item add on a read-only checklist");
                return;
            }
        }
        self.change_list_items(|list| {
            list.insert(pos, EditListItem::Item(EditItem::empty()));
        });
        self.focus_item_at(pos, 0, false);
    }

    pub fn on_note_label_clicked(&self) {
        self.change_labels();
    }

    /// The user tapped the note to edit it.
    pub fn on_note_clicked_to_edit(&self) {
        if self.state.is_in_trash() {
            // Editing would bump the last modified date, which the trash
            // auto-delete delay is counted from.
            self.emit_message(EditMessage::CantEditInTrash);
        }
    }

    /// Whether checklist items can be dragged to reorder them.
    pub fn is_note_drag_enabled(&self) -> bool {
        !self.state.is_in_trash() && self.state.checklist_item_count() > 1
    }

    /// The UI swapped two rows while dragging. Not published, the UI already
    /// shows the new order.
    pub fn on_item_swapped(&mut self, from: usize, to: usize) {
        let len = self.state.items.len();
        if from >= len || to >= len {
            warn!(from, to, len, "Swap out of bounds");
            return;
        }
        if self.editable_item_mut(from).is_none() || self.editable_item_mut(to).is_none() {
            warn!(from, to, "Swap of a row that isn't an editable checklist item");
            return;
        }
        self.state.items.swap(from, to);
    }

    pub fn strikethrough_checked_items(&self) -> bool {
        self.config.strikethrough_checked
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn create_label_refs(&self, note_id: NoteId) -> Vec<LabelRef> {
        self.state
            .labels
            .iter()
            .map(|label| LabelRef::new(note_id, label.id))
            .collect()
    }

    fn shown_date(&self) -> Option<DateTime<Utc>> {
        if self.state.is_new_note {
            return None;
        }
        match self.config.shown_date_field {
            ShownDateField::None => None,
            ShownDateField::Added => Some(self.state.note.added_date),
            ShownDateField::Modified => Some(self.state.note.last_modified_date),
        }
    }

    /// Rebuild every row from the note. Commit first if the rows hold edits.
    fn update_list_items(&mut self) {
        let can_edit = !self.state.is_in_trash();
        self.state.items = create_list_items(
            &self.state.note,
            &self.state.labels,
            self.shown_date(),
            can_edit,
        );
        self.publish_items();
    }

    fn change_list_items(&mut self, change: impl FnOnce(&mut Vec<EditListItem>)) {
        change(&mut self.state.items);
        self.publish_items();
    }

    /// The checklist item at `pos`, if the user may edit it.
    fn editable_item_mut(&mut self, pos: usize) -> Option<&mut EditItem> {
        self.state
            .items
            .get_mut(pos)
            .and_then(EditListItem::as_item_mut)
            .filter(|item| item.editable)
    }

    fn find_item_pos(&self, predicate: impl Fn(&EditListItem) -> bool) -> Option<usize> {
        self.state.items.iter().position(predicate)
    }

    fn publish_items(&self) {
        self.items_tx.send_replace(self.state.items.clone());
    }

    fn publish_ui_state(&self) {
        let ui_state = self.state.ui_state();
        self.ui_state_tx.send_if_modified(|current| {
            if *current == ui_state {
                false
            } else {
                *current = ui_state;
                true
            }
        });
    }

    fn focus_item_at(&self, item_pos: usize, pos: usize, item_exists: bool) {
        self.events.emit(EditEvent::Focus(FocusChange {
            item_pos,
            pos,
            item_exists,
        }));
    }

    fn emit_message(&self, message: EditMessage) {
        self.events.emit(EditEvent::Message { message });
    }
}

/// Write `note` unless the store already holds an identical copy.
///
/// Returns the written note, with its last modified date refreshed.
async fn persist_if_changed(notes: &dyn NotesRepository, note: Note) -> Result<Option<Note>> {
    let old_note = notes.get_note_by_id(note.id).await?;
    if old_note.as_ref() == Some(&note) {
        debug!(note_id = note.id, "Note unchanged, skipping save");
        return Ok(None);
    }

    let note = Note {
        last_modified_date: Utc::now(),
        ..note
    };
    notes.update_note(&note).await?;
    debug!(note_id = note.id, "Saved note");
    Ok(Some(note))
}
