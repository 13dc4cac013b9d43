//! Presentation-ready completion candidates.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::constants::{ESCAPE, ESCAPED_ESCAPE};
use crate::catalog::{CatalogEntry, PostAction};

/// Kind of completion suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionKind {
    /// A single command invocation.
    Function,
    /// A multi-token snippet, e.g. an environment skeleton.
    Snippet,
}

/// A presentation-ready completion candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    /// The text shown in the completion list.
    pub label: SmolStr,
    /// The kind of completion.
    pub kind: SuggestionKind,
    /// Insert template; placeholders use `${n}` syntax and the escape
    /// character is stored doubled.
    pub insert_text: Arc<str>,
    /// Detail text (shown after the label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in the popup).
    pub documentation: Option<Arc<str>>,
    /// Sort key; defaults to the lower-cased command name, giving
    /// case-insensitive alphabetic ordering.
    pub sort_text: SmolStr,
    /// Action the editor runs after insertion.
    pub post_action: Option<PostAction>,
}

impl Suggestion {
    /// Normalize a raw catalog entry into a suggestion.
    ///
    /// The label is the command prefixed with the escape character,
    /// unless the command begins with a space, the marker for
    /// non-prefixed defaults such as environment snippets, which are
    /// presented trimmed and as [`SuggestionKind::Snippet`].
    ///
    /// Callers must pass entries with a non-empty `command`.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        debug_assert!(!entry.command.is_empty());

        let (label, kind) = if entry.command.starts_with(' ') {
            (
                SmolStr::new(entry.command.trim_start()),
                SuggestionKind::Snippet,
            )
        } else {
            (
                SmolStr::new(format!("{ESCAPE}{}", entry.command)),
                SuggestionKind::Function,
            )
        };

        let insert_text = entry
            .snippet
            .clone()
            .unwrap_or_else(|| Arc::from(format!("{ESCAPED_ESCAPE}{}", entry.command)));

        let sort_text = entry
            .sort_key
            .clone()
            .unwrap_or_else(|| SmolStr::new(entry.command.trim_start().to_lowercase()));

        let detail = entry.detail.clone().or_else(|| {
            entry
                .package
                .as_ref()
                .map(|p| Arc::from(format!("package: {p}")))
        });

        Self {
            label,
            kind,
            insert_text,
            detail,
            documentation: entry.documentation.clone(),
            sort_text,
            post_action: entry.post_action,
        }
    }
}
