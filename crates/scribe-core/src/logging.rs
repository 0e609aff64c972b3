//! Structured logging schema and field name constants for scribe.
//!
//! This module documents the field schema: `tracing` macros take field names
//! as identifiers, so call sites spell these names out literally and the
//! constants serve as the reference for them.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | An editor action failed and its result was dropped |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Session lifecycle (start, exit), status changes, copies |
//! | DEBUG | Decision points (save skipped, blank discard, event emission) |
//! | TRACE | Per-row edits |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Edit session identifier. Format: UUIDv7 (time-ordered).
pub const SESSION_ID: &str = "session_id";

/// Subsystem originating the log event.
/// Values: "edit", "store", "alarm"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "session", "runner", "mock_store"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "start", "save_note", "toggle_note_type"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note identifier being operated on.
pub const NOTE_ID: &str = "note_id";

/// Label identifier being operated on.
pub const LABEL_ID: &str = "label_id";

/// Lifecycle status of a note.
pub const NOTE_STATUS: &str = "status";

/// Type of a note ("text" or "list").
pub const NOTE_TYPE: &str = "note_type";

// ─── Row fields ────────────────────────────────────────────────────────────

/// Index of an editor row.
pub const ITEM_POS: &str = "pos";

/// Number of editor rows.
pub const ITEM_COUNT: &str = "item_count";

// ─── Event fields ──────────────────────────────────────────────────────────

/// Dot-namespaced event type.
pub const EVENT_TYPE: &str = "event_type";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
