//! Collaborator interfaces: the seams to the hosting editor.
//!
//! The core never talks to an editor directly. Everything it needs
//! (file contents, feature flags, the active document, the interactive
//! picker, edit application) comes through these traits, converted at
//! the host boundary. Tests supply in-memory implementations.

use std::path::{Path, PathBuf};

use text_size::TextRange;

/// The active document, if any.
#[derive(Clone, Debug)]
pub struct DocumentView {
    pub path: PathBuf,
    pub text: String,
}

/// Feature flags consulted on every recompute.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntelFlags {
    /// Include the unicode math symbol table.
    pub unicode_symbols: bool,
    /// Consult per-package command tables.
    pub package_commands: bool,
}

/// Read access to the hosting workspace.
pub trait WorkspaceHost {
    /// Read a file's current content, if it exists and is readable.
    fn read_file(&self, path: &Path) -> Option<String>;

    fn file_exists(&self, path: &Path) -> bool;

    fn flags(&self) -> IntelFlags;

    /// The currently focused document.
    fn current_document(&self) -> Option<DocumentView>;

    /// Which files' extracted tables are eligible for the merge, in
    /// merge order.
    fn relevant_files(&self) -> Vec<PathBuf>;
}

/// One selected range and its currently-selected text.
#[derive(Clone, Debug)]
pub struct Selection {
    pub range: TextRange,
    pub text: String,
}

/// Interactive choice among wrap candidates.
pub trait SelectionPicker {
    /// Present the items and await a pick. `None` means the user
    /// dismissed the picker.
    fn pick(&self, items: &[String]) -> Option<usize>;
}

/// Commits text replacements to the editor.
pub trait EditSink {
    /// Apply one batch of independent replacements.
    fn apply_edits(&mut self, edits: Vec<(TextRange, String)>);
}
