//! Centralized default constants for scribe.
//!
//! Crates reference these constants instead of defining their own magic
//! values.

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifier of a note or label that was never persisted.
pub const NO_ID: i64 = 0;

// =============================================================================
// NOTE COPIES
// =============================================================================

/// Name used in place of a blank title when a note is copied.
pub const UNTITLED_NAME: &str = "Untitled";

/// Suffix appended to the title of a copied note.
pub const COPY_SUFFIX: &str = "Copy";

// =============================================================================
// EDITOR
// =============================================================================

/// Whether checked checklist items are drawn struck through.
pub const STRIKETHROUGH_CHECKED: bool = true;

/// Capacity of the per-session action queue.
pub const ACTION_QUEUE_CAPACITY: usize = 64;
