//! Core data models for scribe.
//!
//! These types are shared by every scribe crate and represent the domain
//! entities: notes, labels and reminders.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::defaults::NO_ID;
use crate::error::{Error, Result};

/// Identifier of a note, assigned by the notes store.
pub type NoteId = i64;

/// Identifier of a label, assigned by the labels store.
pub type LabelId = i64;

/// Leading list bullet stripped from lines when a text note becomes a checklist.
static BULLET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-+*•]\s+").expect("bullet pattern is valid"));

// =============================================================================
// ENUMS
// =============================================================================

/// Kind of note content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    Text,
    List,
}

impl NoteType {
    /// Stable value used by stores.
    pub fn value(self) -> i32 {
        match self {
            NoteType::Text => 0,
            NoteType::List => 1,
        }
    }

    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            0 => Ok(NoteType::Text),
            1 => Ok(NoteType::List),
            _ => Err(Error::InvalidInput(format!("unknown note type {value}"))),
        }
    }
}

/// Lifecycle status of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    Active,
    Archived,
    /// In trash.
    Deleted,
}

impl NoteStatus {
    /// Stable value used by stores.
    pub fn value(self) -> i32 {
        match self {
            NoteStatus::Active => 0,
            NoteStatus::Archived => 1,
            NoteStatus::Deleted => 2,
        }
    }

    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            0 => Ok(NoteStatus::Active),
            1 => Ok(NoteStatus::Archived),
            2 => Ok(NoteStatus::Deleted),
            _ => Err(Error::InvalidInput(format!("unknown note status {value}"))),
        }
    }
}

/// Describes how a note or a group of notes are pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinnedStatus {
    CantPin,
    Unpinned,
    Pinned,
}

impl PinnedStatus {
    /// Stable value used by stores.
    pub fn value(self) -> i32 {
        match self {
            PinnedStatus::CantPin => 0,
            PinnedStatus::Unpinned => 1,
            PinnedStatus::Pinned => 2,
        }
    }

    pub fn from_value(value: i32) -> Result<Self> {
        match value {
            0 => Ok(PinnedStatus::CantPin),
            1 => Ok(PinnedStatus::Unpinned),
            2 => Ok(PinnedStatus::Pinned),
            _ => Err(Error::InvalidInput(format!("unknown pinned status {value}"))),
        }
    }

    /// Pinned status a note takes when it moves to `status`.
    ///
    /// Only active notes can be pinned, and they come back unpinned.
    pub fn after_transition_to(status: NoteStatus) -> Self {
        if status == NoteStatus::Active {
            PinnedStatus::Unpinned
        } else {
            PinnedStatus::CantPin
        }
    }
}

// =============================================================================
// NOTE TYPES
// =============================================================================

/// Type-specific data attached to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoteMetadata {
    /// Text notes carry no metadata.
    Blank,
    /// One checked flag per checklist line.
    List { checked: Vec<bool> },
}

impl NoteMetadata {
    /// Whether the metadata carries no information worth keeping.
    pub fn is_blank(&self) -> bool {
        match self {
            NoteMetadata::Blank => true,
            NoteMetadata::List { checked } => !checked.iter().any(|&c| c),
        }
    }
}

/// A scheduled notification attached to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub start: DateTime<Utc>,
    /// Recurrence rule, `None` for a one-shot reminder.
    pub recurrence: Option<String>,
    pub next: DateTime<Utc>,
    /// Number of occurrences so far, starting at 1.
    pub count: i32,
    pub done: bool,
}

impl Reminder {
    /// A one-shot reminder firing at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            recurrence: None,
            next: start,
            count: 1,
            done: false,
        }
    }

    pub fn with_recurrence(mut self, rule: impl Into<String>) -> Self {
        self.recurrence = Some(rule.into());
        self
    }
}

/// One line of a checklist note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNoteItem {
    pub content: String,
    pub checked: bool,
}

/// A user-authored text or checklist note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub title: String,
    /// Text content; for checklists, one line per item.
    pub content: String,
    pub metadata: NoteMetadata,
    pub added_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub status: NoteStatus,
    pub pinned: PinnedStatus,
    pub reminder: Option<Reminder>,
}

impl Note {
    /// A new, unsaved, empty text note dated `date`.
    pub fn blank(date: DateTime<Utc>) -> Self {
        Self {
            id: NO_ID,
            note_type: NoteType::Text,
            title: String::new(),
            content: String::new(),
            metadata: NoteMetadata::Blank,
            added_date: date,
            last_modified_date: date,
            status: NoteStatus::Active,
            pinned: PinnedStatus::Unpinned,
            reminder: None,
        }
    }

    /// The blank note dated at the Unix epoch, used before a note is loaded.
    pub fn unloaded() -> Self {
        Self::blank(Utc.timestamp_opt(0, 0).single().unwrap_or_default())
    }

    /// Whether the note has nothing worth keeping.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty() && self.metadata.is_blank()
    }

    /// Whether any checklist item is checked.
    pub fn has_checked_items(&self) -> bool {
        matches!(&self.metadata, NoteMetadata::List { checked } if checked.iter().any(|&c| c))
    }

    /// Checklist items of a list note; empty for text notes.
    pub fn list_items(&self) -> Vec<ListNoteItem> {
        match &self.metadata {
            NoteMetadata::List { checked } if !checked.is_empty() => self
                .content
                .split('\n')
                .zip(checked.iter())
                .map(|(content, &checked)| ListNoteItem {
                    content: content.to_string(),
                    checked,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Convert to a checklist with one unchecked item per line.
    pub fn as_list_note(&self) -> Note {
        match self.note_type {
            NoteType::List => self.clone(),
            NoteType::Text => {
                let lines: Vec<String> = self
                    .content
                    .trim()
                    .split('\n')
                    .map(|line| BULLET_REGEX.replace(line, "").into_owned())
                    .collect();
                let checked = vec![false; lines.len()];
                Note {
                    note_type: NoteType::List,
                    content: lines.join("\n"),
                    metadata: NoteMetadata::List { checked },
                    ..self.clone()
                }
            }
        }
    }

    /// Convert to a text note, one line per checklist item.
    ///
    /// Checked items are dropped unless `keep_checked_items` is set.
    pub fn as_text_note(&self, keep_checked_items: bool) -> Note {
        match self.note_type {
            NoteType::Text => self.clone(),
            NoteType::List => {
                let content = self
                    .list_items()
                    .into_iter()
                    .filter(|item| keep_checked_items || !item.checked)
                    .map(|item| item.content)
                    .collect::<Vec<_>>()
                    .join("\n");
                Note {
                    note_type: NoteType::Text,
                    content,
                    metadata: NoteMetadata::Blank,
                    ..self.clone()
                }
            }
        }
    }

    /// Flattened text of the note, used for sharing.
    pub fn as_text(&self) -> String {
        self.as_text_note(true).content
    }

    /// Title given to a copy of a note titled `title`.
    ///
    /// `"Groceries"` becomes `"Groceries - Copy"`, then `"Groceries - Copy 2"`,
    /// `"Groceries - Copy 3"` and so on. A blank title uses `untitled_name`.
    pub fn copied_title(title: &str, untitled_name: &str, copy_suffix: &str) -> String {
        let pattern = format!(r"^(.*) - {}(?:\s+([1-9]\d*))?$", regex::escape(copy_suffix));
        let numbered = Regex::new(&pattern)
            .ok()
            .and_then(|re| re.captures(title))
            .and_then(|c| {
                let name = c.get(1).map_or("", |m| m.as_str());
                // A copy number too large to increment is treated as plain title text.
                let next = match c.get(2) {
                    Some(m) => m.as_str().parse::<u64>().ok()?.checked_add(1)?,
                    None => 2,
                };
                Some(format!("{name} - {copy_suffix} {next}"))
            });

        match numbered {
            Some(title) => title,
            None if title.trim().is_empty() => format!("{untitled_name} - {copy_suffix}"),
            None => format!("{title} - {copy_suffix}"),
        }
    }
}

// =============================================================================
// LABEL TYPES
// =============================================================================

/// A user-defined label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
}

impl Label {
    pub fn new(id: LabelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Association of a label to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelRef {
    pub note_id: NoteId,
    pub label_id: LabelId,
}

impl LabelRef {
    pub fn new(note_id: NoteId, label_id: LabelId) -> Self {
        Self { note_id, label_id }
    }
}

/// A note together with its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteWithLabels {
    pub note: Note,
    pub labels: Vec<Label>,
}
