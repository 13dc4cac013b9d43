//! # texicon-base
//!
//! Core library for TeX-style command intellisense: catalog extraction,
//! multi-source merging, and snippet surround.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! intel     → completion provider (merge + cooldown cache), surround feature
//!   ↓
//! host      → collaborator traits (documents, flags, picker, edit sink)
//!   ↓
//! data      → on-disk catalog tables, lazy per-package cache
//!   ↓
//! extract   → regex scanners (command usages, macro definitions, packages)
//!   ↓
//! catalog   → CatalogEntry, Suggestion, normalization, environment snippets
//!   ↓
//! base      → primitives (escape/data constants, line offsets)
//! ```

// ============================================================================
// MODULES (dependency order: base → catalog → extract → data → host → intel)
// ============================================================================

/// Foundation: escape character, data-file constants, line offsets
pub mod base;

/// Data model: catalog entries, suggestions, macro definitions
pub mod catalog;

/// Extraction engine: regex scanners over raw document text
pub mod extract;

/// Persisted catalog tables: defaults, symbols, per-package cache
pub mod data;

/// Collaborator interfaces: workspace host, picker, edit sink
pub mod host;

/// Intellisense layer: completion provider and surround feature
pub mod intel;

// Re-export the types most callers need
pub use catalog::{CatalogEntry, MacroDefinition, PostAction, Suggestion, SuggestionKind};
pub use data::{DataError, DataStore};
pub use host::{DocumentView, EditSink, IntelFlags, Selection, SelectionPicker, WorkspaceHost};
pub use intel::{CommandProvider, surround};
