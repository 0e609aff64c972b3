//! Rows displayed by the note editor.

use chrono::{DateTime, Utc};
use serde::Serialize;

use scribe_core::{Label, Note, NoteType};

/// A checklist entry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditItem {
    pub content: String,
    pub checked: bool,
    pub editable: bool,
}

impl EditItem {
    pub fn new(content: impl Into<String>, checked: bool, editable: bool) -> Self {
        Self {
            content: content.into(),
            checked,
            editable,
        }
    }

    /// A blank, unchecked, editable item.
    pub fn empty() -> Self {
        Self::new(String::new(), false, true)
    }
}

/// One row of the editor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditListItem {
    Date { date: DateTime<Utc> },
    Title { title: String, editable: bool },
    /// Body of a text note.
    Content { content: String, editable: bool },
    Item(EditItem),
    /// The "add item" affordance under a checklist.
    ItemAdd,
    Labels { labels: Vec<Label> },
}

impl EditListItem {
    pub fn is_title(&self) -> bool {
        matches!(self, EditListItem::Title { .. })
    }

    pub fn is_content(&self) -> bool {
        matches!(self, EditListItem::Content { .. })
    }

    pub fn as_item(&self) -> Option<&EditItem> {
        match self {
            EditListItem::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut EditItem> {
        match self {
            EditListItem::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// Build the rows showing `note` with `labels`.
///
/// `date` adds a date row on top. Rows are read-only unless `can_edit`, and
/// the add-item row only exists for editable checklists.
pub fn create_list_items(
    note: &Note,
    labels: &[Label],
    date: Option<DateTime<Utc>>,
    can_edit: bool,
) -> Vec<EditListItem> {
    let mut items = Vec::new();

    if let Some(date) = date {
        items.push(EditListItem::Date { date });
    }

    items.push(EditListItem::Title {
        title: note.title.clone(),
        editable: can_edit,
    });

    match note.note_type {
        NoteType::Text => items.push(EditListItem::Content {
            content: note.content.clone(),
            editable: can_edit,
        }),
        NoteType::List => {
            items.extend(
                note.list_items()
                    .into_iter()
                    .map(|item| EditListItem::Item(EditItem::new(item.content, item.checked, can_edit))),
            );
            if can_edit {
                items.push(EditListItem::ItemAdd);
            }
        }
    }

    if !labels.is_empty() {
        items.push(EditListItem::Labels {
            labels: labels.to_vec(),
        });
    }

    items
}
