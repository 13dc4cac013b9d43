//! Data model for the command catalog.
//!
//! A [`CatalogEntry`] is the raw, source-agnostic record describing one
//! command (from the default tables, a package table, or a document scan).
//! A [`Suggestion`] is the presentation-ready form served to completion
//! consumers. [`Suggestion::from_entry`] is the single place where
//! presentation rules (escape prefixing, sort keys) are applied.

mod definition;
mod entry;
mod environments;
mod suggestion;

pub use definition::MacroDefinition;
pub use entry::{CatalogEntry, PostAction};
pub use environments::environment_entry;
pub use suggestion::{Suggestion, SuggestionKind};
