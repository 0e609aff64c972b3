//! # scribe-core
//!
//! Core types, traits, and abstractions for the scribe note editor.
//!
//! This crate provides the domain model (notes, labels, reminders) and the
//! collaborator traits that the editor crate depends on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod mock;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use defaults::NO_ID;
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
