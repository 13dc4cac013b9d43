//! Intellisense layer: the completion provider and the surround feature.
//!
//! [`CommandProvider`] is the single owner of all mutable catalog state:
//! changes go through explicit mutation methods, reads go through the
//! cooldown-cached snapshot. [`surround`] re-derives wrapper snippets
//! from the same snapshot and computes template-substitution edits.
//!
//! The layer is single-threaded: callers serialize `provide()` and the
//! mutation entry points on one control thread.

mod provider;
pub mod surround;

pub use provider::CommandProvider;
