//! Editor configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use scribe_core::defaults::{ACTION_QUEUE_CAPACITY, STRIKETHROUGH_CHECKED};
use scribe_core::Error;

/// Which note date the date row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShownDateField {
    /// No date row.
    #[default]
    None,
    Added,
    Modified,
}

impl FromStr for ShownDateField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ShownDateField::None),
            "added" => Ok(ShownDateField::Added),
            "modified" => Ok(ShownDateField::Modified),
            other => Err(Error::Config(format!("unknown shown date field '{other}'"))),
        }
    }
}

/// Configuration for an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConfig {
    /// Date shown at the top of existing notes.
    pub shown_date_field: ShownDateField,
    /// Whether checked items are drawn struck through.
    pub strikethrough_checked: bool,
    /// Capacity of the runner's action queue.
    pub action_queue_capacity: usize,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            shown_date_field: ShownDateField::None,
            strikethrough_checked: STRIKETHROUGH_CHECKED,
            action_queue_capacity: ACTION_QUEUE_CAPACITY,
        }
    }
}

impl EditConfig {
    /// Create config from environment variables (with defaults).
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `SCRIBE_SHOWN_DATE` | `none` | Date row: `none`, `added` or `modified` |
    /// | `SCRIBE_STRIKETHROUGH_CHECKED` | `true` | Strike through checked items |
    /// | `SCRIBE_ACTION_QUEUE` | `64` | Runner action queue capacity |
    ///
    /// Unparseable values fall back to their default.
    pub fn from_env() -> Self {
        let shown_date_field = std::env::var("SCRIBE_SHOWN_DATE")
            .ok()
            .and_then(|v| match v.parse::<ShownDateField>() {
                Ok(field) => Some(field),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring SCRIBE_SHOWN_DATE");
                    None
                }
            })
            .unwrap_or_default();

        let strikethrough_checked = std::env::var("SCRIBE_STRIKETHROUGH_CHECKED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(STRIKETHROUGH_CHECKED);

        let action_queue_capacity = std::env::var("SCRIBE_ACTION_QUEUE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(ACTION_QUEUE_CAPACITY)
            .max(1);

        Self {
            shown_date_field,
            strikethrough_checked,
            action_queue_capacity,
        }
    }

    /// Set the date shown on existing notes.
    pub fn with_shown_date_field(mut self, field: ShownDateField) -> Self {
        self.shown_date_field = field;
        self
    }

    /// Enable or disable strikethrough on checked items.
    pub fn with_strikethrough_checked(mut self, enabled: bool) -> Self {
        self.strikethrough_checked = enabled;
        self
    }

    /// Set the runner's action queue capacity.
    pub fn with_action_queue_capacity(mut self, capacity: usize) -> Self {
        self.action_queue_capacity = capacity.max(1);
        self
    }
}
