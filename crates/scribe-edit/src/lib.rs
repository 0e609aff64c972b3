//! # scribe-edit
//!
//! Edit session state management for the scribe note editor.
//!
//! An [`EditSession`] keeps a note, its labels and the editor rows consistent
//! under user actions, and decides when to write to the notes store. An
//! [`EditRunner`] serializes actions for one session on its own task.

pub mod action;
pub mod config;
pub mod events;
pub mod items;
pub mod runner;
pub mod session;
pub mod state;

pub use action::EditAction;
pub use config::{EditConfig, ShownDateField};
pub use events::{
    EditEvent, EditMessage, EventEmitter, EventReceiver, FocusChange, ShareData, StatusChange,
};
pub use items::{create_list_items, EditItem, EditListItem};
pub use runner::{EditHandle, EditRunner};
pub use session::EditSession;
pub use state::{EditState, NoteUiState, SavedState};
