//! Edit session behavior against in-memory stores.

mod common;

use chrono::Utc;

use common::{drain, list_note, old_date, setup, setup_with_config, text_note};
use scribe_core::defaults::{COPY_SUFFIX, UNTITLED_NAME};
use scribe_core::mock::MockNoteStore;
use scribe_core::{
    Label, LabelRef, NoteMetadata, NoteStatus, NoteType, PinnedStatus, Reminder, NO_ID,
};
use scribe_edit::{
    EditConfig, EditEvent, EditItem, EditListItem, EditMessage, FocusChange, SavedState,
    ShareData, ShownDateField,
};

fn focus(item_pos: usize, pos: usize, item_exists: bool) -> EditEvent {
    EditEvent::Focus(FocusChange {
        item_pos,
        pos,
        item_exists,
    })
}

fn message(message: EditMessage) -> EditEvent {
    EditEvent::Message { message }
}

fn item_contents(items: &[EditListItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(EditListItem::as_item)
        .map(|item| item.content.clone())
        .collect()
}

// =============================================================================
// start / restore
// =============================================================================

#[tokio::test]
async fn test_start_new_note_creates_blank_note() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, NO_ID).await.unwrap();

    assert_eq!(f.store.note_count(), 1);
    assert!(f.session.is_new_note());
    let id = f.session.note().id;
    assert_ne!(id, NO_ID);
    assert!(f.store.note(id).unwrap().is_blank());

    assert_eq!(
        f.session.items(),
        &[
            EditListItem::Title {
                title: String::new(),
                editable: true
            },
            EditListItem::Content {
                content: String::new(),
                editable: true
            },
        ]
    );
    assert_eq!(drain(&mut f.events), vec![focus(1, 0, false)]);
}

#[tokio::test]
async fn test_start_new_note_with_label() {
    let label = Label::new(3, "work");
    let mut f = setup(MockNoteStore::new().with_label(label.clone()));
    f.session.start(NO_ID, 3).await.unwrap();

    let id = f.session.note().id;
    assert_eq!(f.session.labels(), &[label.clone()]);
    assert_eq!(f.store.label_refs(), vec![LabelRef::new(id, 3)]);
    assert_eq!(
        f.session.items().last(),
        Some(&EditListItem::Labels {
            labels: vec![label]
        })
    );
}

#[tokio::test]
async fn test_start_new_note_with_missing_label() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, 9).await.unwrap();

    assert!(f.session.labels().is_empty());
    assert!(f.store.label_refs().is_empty());
}

#[tokio::test]
async fn test_start_twice_reuses_note() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, NO_ID).await.unwrap();
    let id = f.session.note().id;
    drain(&mut f.events);

    f.session.start(NO_ID, NO_ID).await.unwrap();

    assert_eq!(f.store.note_count(), 1);
    assert_eq!(f.session.note().id, id);
    assert!(drain(&mut f.events).is_empty());
}

#[tokio::test]
async fn test_start_existing_note() {
    let label = Label::new(2, "home");
    let store = MockNoteStore::new()
        .with_note(text_note(5, "Title", "Body"))
        .with_label(label.clone())
        .with_label_ref(5, 2);
    let mut f = setup(store);
    f.session.start(5, NO_ID).await.unwrap();

    assert!(!f.session.is_new_note());
    assert_eq!(f.store.note_count(), 1);
    assert_eq!(
        f.session.items(),
        &[
            EditListItem::Title {
                title: "Title".to_string(),
                editable: true
            },
            EditListItem::Content {
                content: "Body".to_string(),
                editable: true
            },
            EditListItem::Labels {
                labels: vec![label]
            },
        ]
    );
    assert!(drain(&mut f.events).is_empty());
}

#[tokio::test]
async fn test_date_row_shown_for_existing_note() {
    let store = MockNoteStore::new().with_note(text_note(1, "t", "c"));
    let config = EditConfig::default().with_shown_date_field(ShownDateField::Added);
    let mut f = setup_with_config(store, config);
    f.session.start(1, NO_ID).await.unwrap();

    assert_eq!(f.session.items()[0], EditListItem::Date { date: old_date() });
}

#[tokio::test]
async fn test_date_row_hidden_for_new_note() {
    let config = EditConfig::default().with_shown_date_field(ShownDateField::Modified);
    let mut f = setup_with_config(MockNoteStore::new(), config);
    f.session.start(NO_ID, NO_ID).await.unwrap();

    assert!(f.session.items()[0].is_title());
}

#[tokio::test]
async fn test_restore_then_start_keeps_editing_same_note() {
    let mut first = setup(MockNoteStore::new());
    first.session.start(NO_ID, NO_ID).await.unwrap();
    let saved = first.session.saved_state();
    assert!(saved.is_new_note);

    // A recreated host builds a new session over the same store.
    let store = (*first.store).clone();
    let mut second = setup(store);
    second.session.restore(saved).await.unwrap();
    second.session.start(NO_ID, NO_ID).await.unwrap();

    assert_eq!(second.store.note_count(), 1);
    assert_eq!(second.session.note().id, saved.note_id);
    assert!(second.session.is_new_note());
    assert!(drain(&mut second.events).is_empty());
}

#[tokio::test]
async fn test_restore_missing_note_falls_back_to_new_note() {
    let mut f = setup(MockNoteStore::new());
    f.session
        .restore(SavedState {
            note_id: 40,
            is_new_note: false,
        })
        .await
        .unwrap();
    f.session.start(NO_ID, NO_ID).await.unwrap();

    assert_eq!(f.store.note_count(), 1);
    assert!(f.session.is_new_note());
}

// =============================================================================
// commit / save / exit
// =============================================================================

#[tokio::test]
async fn test_update_note_from_text_rows() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "c")));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_title_changed("New title");
    f.session.on_content_changed("New body");
    assert_eq!(f.session.note().title, "t");

    f.session.update_note();
    assert_eq!(f.session.note().title, "New title");
    assert_eq!(f.session.note().content, "New body");
    assert_eq!(f.session.note().metadata, NoteMetadata::Blank);
    assert_eq!(f.session.note().last_modified_date, old_date());
}

#[tokio::test]
async fn test_update_note_list_metadata_matches_rows() {
    let note = list_note(1, "t", &[("a", true), ("b", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    // Rows: title, a, b, add
    f.session.on_item_add_clicked(3);
    f.session.on_item_text_changed(3, "c", false);
    f.session.update_note();

    let note = f.session.note();
    assert_eq!(note.content, "a\nb\nc");
    assert_eq!(
        note.metadata,
        NoteMetadata::List {
            checked: vec![true, false, false]
        }
    );
    assert_eq!(f.session.state().checklist_item_count(), 3);
}

#[tokio::test]
async fn test_save_writes_only_when_changed() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "c")));
    f.session.start(1, NO_ID).await.unwrap();

    assert!(!f.session.save_note().await.unwrap());
    assert_eq!(f.store.call_count("update_note"), 0);

    f.session.on_title_changed("changed");
    assert!(f.session.save_note().await.unwrap());
    let stored = f.store.note(1).unwrap();
    assert_eq!(stored.title, "changed");
    assert!(stored.last_modified_date > old_date());
    assert_eq!(stored, *f.session.note());

    assert!(!f.session.save_note().await.unwrap());
    assert_eq!(f.store.call_count("update_note"), 1);
}

#[tokio::test]
async fn test_exit_blank_note_discards_it() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, NO_ID).await.unwrap();
    drain(&mut f.events);

    f.session.exit().await.unwrap();

    assert_eq!(f.store.note_count(), 0);
    assert_eq!(
        drain(&mut f.events),
        vec![message(EditMessage::BlankNoteDiscarded), EditEvent::Exit]
    );
}

#[tokio::test]
async fn test_exit_commits_rows_before_blank_check() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, NO_ID).await.unwrap();
    drain(&mut f.events);

    f.session.on_content_changed("typed just before leaving");
    f.session.exit().await.unwrap();

    assert_eq!(f.store.note_count(), 1);
    assert_eq!(f.store.call_count("delete_note"), 0);
    assert_eq!(f.session.note().content, "typed just before leaving");
    assert_eq!(drain(&mut f.events), vec![EditEvent::Exit]);
}

#[tokio::test]
async fn test_exit_non_blank_note_keeps_it() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, NO_ID).await.unwrap();
    drain(&mut f.events);

    f.session.on_content_changed("something");
    f.session.save_note().await.unwrap();
    f.session.exit().await.unwrap();

    assert_eq!(f.store.note_count(), 1);
    assert_eq!(f.store.call_count("delete_note"), 0);
    assert_eq!(drain(&mut f.events), vec![EditEvent::Exit]);
}

// =============================================================================
// note type
// =============================================================================

#[tokio::test]
async fn test_toggle_text_to_list() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "")));
    f.session.start(1, NO_ID).await.unwrap();
    let ui_state = f.session.subscribe_ui_state();

    f.session.on_content_changed("a\nb\nc");
    f.session.toggle_note_type();

    assert_eq!(f.session.note().note_type, NoteType::List);
    assert_eq!(ui_state.borrow().note_type, NoteType::List);
    assert_eq!(
        &f.session.items()[1..],
        &[
            EditListItem::Item(EditItem::new("a", false, true)),
            EditListItem::Item(EditItem::new("b", false, true)),
            EditListItem::Item(EditItem::new("c", false, true)),
            EditListItem::ItemAdd,
        ]
    );
}

#[tokio::test]
async fn test_toggle_list_to_text_refused_with_checked_items() {
    let note = list_note(1, "t", &[("a", false), ("b", true), ("c", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.toggle_note_type();

    assert_eq!(f.session.note().note_type, NoteType::List);
    assert_eq!(drain(&mut f.events), vec![EditEvent::ShowRemoveCheckedConfirm]);
    assert_eq!(item_contents(f.session.items()), vec!["a", "b", "c"]);

    f.session.convert_to_text(false);

    assert_eq!(f.session.note().note_type, NoteType::Text);
    assert_eq!(f.session.note().content, "a\nc");
    assert_eq!(
        f.session.items()[1],
        EditListItem::Content {
            content: "a\nc".to_string(),
            editable: true
        }
    );
}

#[tokio::test]
async fn test_toggle_list_to_text_without_checked_items() {
    let note = list_note(1, "t", &[("a", false), ("b", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.toggle_note_type();

    assert_eq!(f.session.note().note_type, NoteType::Text);
    assert_eq!(f.session.note().content, "a\nb");
    assert!(drain(&mut f.events).is_empty());
}

#[tokio::test]
async fn test_convert_to_text_keeping_checked_items() {
    let note = list_note(1, "t", &[("a", true), ("b", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.convert_to_text(true);
    assert_eq!(f.session.note().content, "a\nb");
}

// =============================================================================
// pin / reminder / labels
// =============================================================================

#[tokio::test]
async fn test_toggle_pin_cycles() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "c")));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.toggle_pin();
    assert_eq!(f.session.ui_state().pinned, PinnedStatus::Pinned);
    f.session.toggle_pin();
    assert_eq!(f.session.ui_state().pinned, PinnedStatus::Unpinned);

    f.session.toggle_pin();
    f.session.save_note().await.unwrap();
    assert_eq!(f.store.note(1).unwrap().pinned, PinnedStatus::Pinned);
}

#[tokio::test]
#[should_panic(expected = "can't pin")]
async fn test_toggle_pin_on_archived_note_panics() {
    let note = scribe_core::Note {
        status: NoteStatus::Archived,
        pinned: PinnedStatus::CantPin,
        ..text_note(1, "t", "c")
    };
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();
    f.session.toggle_pin();
}

#[tokio::test]
async fn test_reminder_change_is_saved() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "c")));
    f.session.start(1, NO_ID).await.unwrap();

    let reminder = Reminder::new(Utc::now()).with_recurrence("RRULE:FREQ=DAILY");
    f.session.on_reminder_change(Some(reminder.clone()));
    assert_eq!(f.session.ui_state().reminder, Some(reminder.clone()));

    f.session.save_note().await.unwrap();
    assert_eq!(f.store.note(1).unwrap().reminder, Some(reminder));
}

#[tokio::test]
async fn test_navigation_events_carry_note_id() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(4, "t", "c")));
    f.session.start(4, NO_ID).await.unwrap();

    f.session.change_reminder();
    f.session.change_labels();
    f.session.on_note_label_clicked();

    assert_eq!(
        drain(&mut f.events),
        vec![
            EditEvent::ShowReminderDialog { note_id: 4 },
            EditEvent::ShowLabelsScreen { note_id: 4 },
            EditEvent::ShowLabelsScreen { note_id: 4 },
        ]
    );
}

#[tokio::test]
async fn test_labels_change_rebuilds_rows_and_keeps_edits() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "c")));
    f.session.start(1, NO_ID).await.unwrap();
    let mut items_rx = f.session.subscribe_items();
    items_rx.borrow_and_update();

    f.session.on_title_changed("edited");
    f.session.on_labels_change(vec![Label::new(8, "ideas")]);

    assert!(items_rx.has_changed().unwrap());
    let items = f.session.items();
    assert_eq!(
        items[0],
        EditListItem::Title {
            title: "edited".to_string(),
            editable: true
        }
    );
    assert!(matches!(items.last(), Some(EditListItem::Labels { labels }) if labels[0].id == 8));
}

// =============================================================================
// status transitions
// =============================================================================

#[tokio::test]
async fn test_delete_moves_to_trash_and_clears_reminder() {
    let note = scribe_core::Note {
        pinned: PinnedStatus::Pinned,
        reminder: Some(Reminder::new(Utc::now())),
        ..text_note(1, "t", "c")
    };
    let mut f = setup(MockNoteStore::new().with_note(note.clone()));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.delete_note().await.unwrap();

    let stored = f.store.note(1).unwrap();
    assert_eq!(stored.status, NoteStatus::Deleted);
    assert_eq!(stored.pinned, PinnedStatus::CantPin);
    assert_eq!(stored.reminder, None);
    assert_eq!(f.alarms.get_calls().len(), 1);
    assert_eq!(f.alarms.get_calls()[0].operation, "remove_alarm");

    let events = drain(&mut f.events);
    assert_eq!(events.len(), 2);
    match &events[0] {
        EditEvent::StatusChange(change) => {
            assert_eq!(change.old_status, NoteStatus::Active);
            assert_eq!(change.new_status, NoteStatus::Deleted);
            assert_eq!(change.notes, vec![note]);
        }
        other => panic!("Expected StatusChange, got {other:?}"),
    }
    assert_eq!(events[1], EditEvent::Exit);
}

#[tokio::test]
async fn test_delete_in_trash_asks_confirmation() {
    let note = scribe_core::Note {
        status: NoteStatus::Deleted,
        pinned: PinnedStatus::CantPin,
        ..text_note(1, "t", "c")
    };
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.delete_note().await.unwrap();

    assert_eq!(drain(&mut f.events), vec![EditEvent::ShowDeleteConfirm]);
    assert_eq!(f.store.call_count("update_note"), 0);
}

#[tokio::test]
async fn test_delete_forever() {
    let note = scribe_core::Note {
        status: NoteStatus::Deleted,
        pinned: PinnedStatus::CantPin,
        ..text_note(1, "t", "c")
    };
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.delete_note_forever_and_exit().await.unwrap();

    assert_eq!(f.store.note_count(), 0);
    assert_eq!(drain(&mut f.events), vec![EditEvent::Exit]);
}

#[tokio::test]
async fn test_archive_and_unarchive() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "c")));
    f.session.start(1, NO_ID).await.unwrap();
    f.session.move_note_and_exit().await.unwrap();

    let stored = f.store.note(1).unwrap();
    assert_eq!(stored.status, NoteStatus::Archived);
    assert_eq!(stored.pinned, PinnedStatus::CantPin);
    assert_status_change_then_exit(
        drain(&mut f.events),
        NoteStatus::Active,
        NoteStatus::Archived,
    );

    let mut f = setup((*f.store).clone());
    f.session.start(1, NO_ID).await.unwrap();
    f.session.move_note_and_exit().await.unwrap();

    let stored = f.store.note(1).unwrap();
    assert_eq!(stored.status, NoteStatus::Active);
    assert_eq!(stored.pinned, PinnedStatus::Unpinned);
    assert_status_change_then_exit(
        drain(&mut f.events),
        NoteStatus::Archived,
        NoteStatus::Active,
    );
}

fn assert_status_change_then_exit(events: Vec<EditEvent>, old: NoteStatus, new: NoteStatus) {
    assert_eq!(events.len(), 2, "unexpected events: {events:?}");
    match &events[0] {
        EditEvent::StatusChange(change) => {
            assert_eq!(change.old_status, old);
            assert_eq!(change.new_status, new);
            assert_eq!(change.notes.len(), 1);
            assert_eq!(change.notes[0].status, old);
        }
        other => panic!("Expected StatusChange, got {other:?}"),
    }
    assert_eq!(events[1], EditEvent::Exit);
}

#[tokio::test]
async fn test_trash_without_reminder_leaves_alarms_alone() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "c")));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.delete_note().await.unwrap();

    assert_eq!(f.store.note(1).unwrap().status, NoteStatus::Deleted);
    assert!(f.alarms.get_calls().is_empty());
    assert_status_change_then_exit(
        drain(&mut f.events),
        NoteStatus::Active,
        NoteStatus::Deleted,
    );
}

#[tokio::test]
async fn test_status_change_skipped_for_blank_note() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, NO_ID).await.unwrap();
    drain(&mut f.events);

    f.session.delete_note().await.unwrap();

    assert_eq!(f.store.call_count("update_note"), 0);
    assert_eq!(f.store.note_count(), 0);
    assert_eq!(
        drain(&mut f.events),
        vec![message(EditMessage::BlankNoteDiscarded), EditEvent::Exit]
    );
}

#[tokio::test]
async fn test_restore_from_trash_reenables_editing() {
    let note = scribe_core::Note {
        status: NoteStatus::Deleted,
        pinned: PinnedStatus::CantPin,
        ..list_note(1, "t", &[("a", false), ("b", false)])
    };
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    assert!(f
        .session
        .items()
        .iter()
        .filter_map(EditListItem::as_item)
        .all(|item| !item.editable));
    assert!(!f.session.items().contains(&EditListItem::ItemAdd));
    assert!(!f.session.is_note_drag_enabled());

    f.session.on_note_clicked_to_edit();
    assert_eq!(
        drain(&mut f.events),
        vec![message(EditMessage::CantEditInTrash)]
    );

    f.session.restore_note_and_edit();

    let ui_state = f.session.ui_state();
    assert_eq!(ui_state.status, NoteStatus::Active);
    assert_eq!(ui_state.pinned, PinnedStatus::Unpinned);
    assert!(f.session.items().contains(&EditListItem::ItemAdd));
    assert!(f.session.is_note_drag_enabled());
    assert_eq!(drain(&mut f.events), vec![message(EditMessage::RestoredNote)]);

    f.session.on_note_clicked_to_edit();
    assert!(drain(&mut f.events).is_empty());

    f.session.save_note().await.unwrap();
    assert_eq!(f.store.note(1).unwrap().status, NoteStatus::Active);
}

// =============================================================================
// copy / share
// =============================================================================

#[tokio::test]
async fn test_copy_note() {
    let reminder = Reminder::new(Utc::now());
    let note = scribe_core::Note {
        reminder: Some(reminder.clone()),
        ..text_note(1, "Groceries", "milk")
    };
    let store = MockNoteStore::new()
        .with_note(note)
        .with_label(Label::new(6, "home"))
        .with_label_ref(1, 6);
    let mut f = setup(store);
    f.session.start(1, NO_ID).await.unwrap();

    f.session.copy_note(UNTITLED_NAME, COPY_SUFFIX).await.unwrap();

    let copy_id = f.session.note().id;
    assert_ne!(copy_id, 1);
    assert_eq!(f.store.note_count(), 2);

    let copy = f.store.note(copy_id).unwrap();
    assert_eq!(copy.title, "Groceries - Copy");
    assert_eq!(copy.content, "milk");
    assert_eq!(copy.reminder, Some(reminder.clone()));
    assert!(copy.added_date > old_date());
    assert_eq!(f.store.note(1).unwrap().title, "Groceries");

    assert!(f.store.label_refs().contains(&LabelRef::new(copy_id, 6)));
    assert_eq!(f.alarms.alarm(copy_id), Some(reminder));

    assert_eq!(
        f.session.items()[0],
        EditListItem::Title {
            title: "Groceries - Copy".to_string(),
            editable: true
        }
    );
    assert_eq!(drain(&mut f.events), vec![focus(0, 16, true)]);
}

#[tokio::test]
async fn test_copy_blank_note_only_changes_title() {
    let mut f = setup(MockNoteStore::new());
    f.session.start(NO_ID, NO_ID).await.unwrap();
    drain(&mut f.events);

    f.session.copy_note(UNTITLED_NAME, COPY_SUFFIX).await.unwrap();

    assert_eq!(f.store.note_count(), 1);
    assert_eq!(f.store.call_count("insert_note"), 1);
    assert_eq!(
        f.session.items()[0],
        EditListItem::Title {
            title: "Untitled - Copy".to_string(),
            editable: true
        }
    );
    assert_eq!(drain(&mut f.events), vec![focus(0, 15, true)]);
}

#[tokio::test]
async fn test_share_note_uses_current_text() {
    let note = list_note(1, "List", &[("a", true), ("b", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_text_changed(2, "bb", false);
    f.session.share_note();

    assert_eq!(
        drain(&mut f.events),
        vec![EditEvent::Share(ShareData {
            title: "List".to_string(),
            content: "a\nbb".to_string(),
        })]
    );
}

// =============================================================================
// checklist rows
// =============================================================================

#[tokio::test]
async fn test_line_break_splits_item() {
    let note = list_note(1, "t", &[("hello", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_text_changed(1, "hel\nloxyz", false);

    assert_eq!(item_contents(f.session.items()), vec!["hel", "loxyz"]);
    assert_eq!(drain(&mut f.events), vec![focus(2, 0, false)]);
}

#[tokio::test]
async fn test_paste_splits_into_many_items() {
    let note = list_note(1, "t", &[("first", true), ("last", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_text_changed(1, "a\nb\ncd", true);

    let items: Vec<EditItem> = f
        .session
        .items()
        .iter()
        .filter_map(EditListItem::as_item)
        .cloned()
        .collect();
    assert_eq!(
        items,
        vec![
            EditItem::new("a", true, true),
            EditItem::new("b", false, true),
            EditItem::new("cd", false, true),
            EditItem::new("last", false, true),
        ]
    );
    assert_eq!(drain(&mut f.events), vec![focus(3, 2, false)]);
}

#[tokio::test]
async fn test_text_change_without_line_break_not_published() {
    let note = list_note(1, "t", &[("a", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();
    let mut items_rx = f.session.subscribe_items();
    items_rx.borrow_and_update();

    f.session.on_item_text_changed(1, "abc", false);

    assert!(!items_rx.has_changed().unwrap());
    assert_eq!(item_contents(f.session.items()), vec!["abc"]);
    assert!(drain(&mut f.events).is_empty());
}

#[tokio::test]
async fn test_backspace_merges_into_previous_item() {
    let note = list_note(1, "t", &[("abc", false), ("de", false), ("f", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_backspace_pressed(2);

    assert_eq!(item_contents(f.session.items()), vec!["abcde", "f"]);
    assert_eq!(drain(&mut f.events), vec![focus(1, 3, true)]);
}

#[tokio::test]
async fn test_backspace_on_first_item_does_nothing() {
    let note = list_note(1, "t", &[("abc", false), ("de", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_backspace_pressed(1);

    assert_eq!(item_contents(f.session.items()), vec!["abc", "de"]);
    assert!(drain(&mut f.events).is_empty());
}

#[tokio::test]
async fn test_delete_item_focuses_previous_item() {
    let note = list_note(1, "t", &[("a", false), ("bb", false), ("ccc", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_delete_clicked(3);

    assert_eq!(item_contents(f.session.items()), vec!["a", "bb"]);
    assert_eq!(drain(&mut f.events), vec![focus(2, 2, true)]);
}

#[tokio::test]
async fn test_delete_first_item_focuses_next_item() {
    let note = list_note(1, "t", &[("a", false), ("bb", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_delete_clicked(1);

    assert_eq!(item_contents(f.session.items()), vec!["bb"]);
    assert_eq!(drain(&mut f.events), vec![focus(1, 2, true)]);
}

#[tokio::test]
async fn test_add_item() {
    let note = list_note(1, "t", &[("a", false)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_item_add_clicked(2);

    assert_eq!(f.session.items()[2], EditListItem::Item(EditItem::empty()));
    assert_eq!(f.session.items()[3], EditListItem::ItemAdd);
    assert_eq!(drain(&mut f.events), vec![focus(2, 0, false)]);
}

#[tokio::test]
async fn test_swap_mutates_in_place_without_publishing() {
    let note = list_note(1, "t", &[("a", false), ("b", true)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();
    let mut items_rx = f.session.subscribe_items();
    items_rx.borrow_and_update();

    assert!(f.session.is_note_drag_enabled());
    f.session.on_item_swapped(1, 2);

    assert!(!items_rx.has_changed().unwrap());
    assert_eq!(item_contents(f.session.items()), vec!["b", "a"]);

    f.session.update_note();
    assert_eq!(f.session.note().content, "b\na");
    assert_eq!(
        f.session.note().metadata,
        NoteMetadata::List {
            checked: vec![true, false]
        }
    );
}

#[tokio::test]
async fn test_uncheck_all_and_delete_checked() {
    let note = list_note(1, "t", &[("a", true), ("b", false), ("c", true)]);
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.delete_checked_items();
    assert_eq!(item_contents(f.session.items()), vec!["b"]);

    f.session.on_item_checked(1, true);
    f.session.on_item_add_clicked(2);
    f.session.on_item_checked(2, true);
    f.session.uncheck_all_items();

    assert!(f
        .session
        .items()
        .iter()
        .filter_map(EditListItem::as_item)
        .all(|item| !item.checked));
    assert_eq!(item_contents(f.session.items()), vec!["b", ""]);
    assert!(f.session.is_note_drag_enabled());
}

// =============================================================================
// read-only rows
// =============================================================================

fn trashed(note: scribe_core::Note) -> scribe_core::Note {
    scribe_core::Note {
        status: NoteStatus::Deleted,
        pinned: PinnedStatus::CantPin,
        ..note
    }
}

#[tokio::test]
async fn test_trashed_checklist_rejects_row_edits() {
    let note = trashed(list_note(1, "t", &[("a", false), ("b", true)]));
    let mut f = setup(MockNoteStore::new().with_note(note));
    f.session.start(1, NO_ID).await.unwrap();
    let rows = f.session.items().to_vec();

    f.session.on_title_changed("edited in trash");
    f.session.on_item_text_changed(1, "x\ny", false);
    f.session.on_item_checked(1, true);
    f.session.on_item_backspace_pressed(2);
    f.session.on_item_delete_clicked(1);
    f.session.on_item_add_clicked(3);
    f.session.on_item_swapped(1, 2);

    assert_eq!(f.session.items(), rows.as_slice());
    assert!(drain(&mut f.events).is_empty());

    assert!(!f.session.save_note().await.unwrap());
    let stored = f.store.note(1).unwrap();
    assert_eq!(stored.title, "t");
    assert_eq!(stored.last_modified_date, old_date());
}

#[tokio::test]
async fn test_trashed_text_note_rejects_edits() {
    let mut f = setup(MockNoteStore::new().with_note(trashed(text_note(1, "t", "c"))));
    f.session.start(1, NO_ID).await.unwrap();

    f.session.on_title_changed("edited in trash");
    f.session.on_content_changed("edited in trash");

    assert!(!f.session.save_note().await.unwrap());
    assert_eq!(f.store.call_count("update_note"), 0);
    assert_eq!(f.store.note(1).unwrap().content, "c");
}

#[tokio::test]
async fn test_item_add_refused_on_text_note() {
    let mut f = setup(MockNoteStore::new().with_note(text_note(1, "t", "body")));
    f.session.start(1, NO_ID).await.unwrap();
    let rows = f.session.items().to_vec();

    f.session.on_item_add_clicked(2);

    assert_eq!(f.session.items(), rows.as_slice());
    assert_eq!(f.session.state().checklist_item_count(), 0);
    assert!(drain(&mut f.events).is_empty());
}

#[tokio::test]
async fn test_item_add_refused_outside_checklist() {
    let store = MockNoteStore::new()
        .with_note(list_note(1, "t", &[("a", false)]))
        .with_label(Label::new(2, "home"))
        .with_label_ref(1, 2);
    let mut f = setup(store);
    f.session.start(1, NO_ID).await.unwrap();
    // Rows: title, a, add, labels
    let rows = f.session.items().to_vec();

    f.session.on_item_add_clicked(0);
    f.session.on_item_add_clicked(3);
    f.session.on_item_add_clicked(4);

    assert_eq!(f.session.items(), rows.as_slice());
    assert!(drain(&mut f.events).is_empty());

    f.session.on_item_add_clicked(1);
    assert_eq!(item_contents(f.session.items()), vec!["", "a"]);
    assert_eq!(drain(&mut f.events), vec![focus(1, 0, false)]);
}
