//! Raw catalog records, before presentation formatting.

use std::sync::Arc;

use serde::Deserialize;
use smol_str::SmolStr;

/// Action the editor should trigger after inserting a completion.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostAction {
    /// Re-open the suggestion UI, so a two-stage completion (command,
    /// then its argument) feels continuous.
    Retrigger,
}

/// A raw catalog record describing one command.
///
/// `command` is the lookup key within any one source table and must be
/// non-empty. A leading space on `command` marks entries presented
/// without the escape prefix (environment snippets).
///
/// In persisted tables the mapping key supplies `command`; the remaining
/// fields deserialize from the entry body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CatalogEntry {
    #[serde(default)]
    pub command: SmolStr,
    /// Insert template with `${n}` placeholders; the escape character is
    /// stored doubled (`\\cmd`) so one unescape pass survives downstream
    /// processing.
    #[serde(default)]
    pub snippet: Option<Arc<str>>,
    #[serde(default)]
    pub detail: Option<Arc<str>>,
    #[serde(default)]
    pub documentation: Option<Arc<str>>,
    #[serde(default)]
    pub sort_key: Option<SmolStr>,
    #[serde(default)]
    pub post_action: Option<PostAction>,
    /// Package that contributed the entry, if any.
    #[serde(default)]
    pub package: Option<SmolStr>,
}

impl CatalogEntry {
    /// Create a new entry for a command name.
    pub fn new(command: impl Into<SmolStr>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Set the insert template.
    pub fn with_snippet(mut self, snippet: impl Into<Arc<str>>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the post-completion action.
    pub fn with_post_action(mut self, action: PostAction) -> Self {
        self.post_action = Some(action);
        self
    }

    /// Set the originating package.
    pub fn with_package(mut self, package: impl Into<SmolStr>) -> Self {
        self.package = Some(package.into());
        self
    }
}
