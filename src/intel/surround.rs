//! The surround feature: wrap selected text in a chosen command.
//!
//! Candidates come from the same suggestion snapshot completion uses,
//! filtered to parameterized templates. Templates are parsed into
//! literal segments interleaved with placeholder slots, so substitution
//! is a structural operation rather than string surgery.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::catalog::Suggestion;
use crate::data::DataError;
use crate::host::{EditSink, Selection, SelectionPicker, WorkspaceHost};
use crate::intel::CommandProvider;

/// Placeholder token: `${1}` or `${1:label}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\d+)(?::([^}]*))?\}").unwrap());

/// Bare placeholder marker without braces: `$1`.
static BARE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\d+").unwrap());

/// One piece of a parsed insert template.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder { label: String },
}

/// Parse a template into literal segments and placeholder slots.
fn parse_template(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let token = caps.get(0).unwrap();
        if token.start() > cursor {
            segments.push(Segment::Literal(template[cursor..token.start()].to_owned()));
        }
        segments.push(Segment::Placeholder {
            label: caps.get(2).map_or(String::new(), |m| m.as_str().to_owned()),
        });
        cursor = token.end();
    }
    if cursor < template.len() {
        segments.push(Segment::Literal(template[cursor..].to_owned()));
    }

    segments
}

/// A template offered for wrapping.
#[derive(Clone, Debug)]
pub struct WrapCandidate {
    /// Single-line, unescaped form shown to the user.
    pub display: String,
    /// The raw insert template.
    pub template: Arc<str>,
}

/// Filter a suggestion list down to templates that can wrap a selection.
///
/// Only parameterized templates qualify. The `\begin` entry is excluded
/// by exact label match: its environment semantics make naive wrapping
/// unsafe.
pub fn wrappable_templates(items: &[Suggestion]) -> Vec<WrapCandidate> {
    items
        .iter()
        .filter(|s| s.label != "\\begin")
        .filter(|s| PLACEHOLDER.is_match(&s.insert_text))
        .map(|s| WrapCandidate {
            display: display_form(&s.insert_text),
            template: s.insert_text.clone(),
        })
        .collect()
}

/// Flatten a template to one line and unescape the doubled escape.
fn display_form(template: &str) -> String {
    template.replace(['\n', '\t'], "").replace("\\\\", "\\")
}

/// Build the replacement text for one selected range.
///
/// The first placeholder slot takes `content`; every later slot keeps
/// only its default label, if any. The doubled escape is then unescaped
/// and leftover bare markers are removed.
pub fn apply_template(template: &str, content: &str) -> String {
    let mut out = String::with_capacity(template.len() + content.len());
    let mut filled = false;

    for segment in parse_template(template) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Placeholder { label } => {
                if filled {
                    out.push_str(&label);
                } else {
                    out.push_str(content);
                    filled = true;
                }
            }
        }
    }

    let unescaped = out.replace("\\\\", "\\");
    BARE_PLACEHOLDER.replace_all(&unescaped, "").into_owned()
}

/// Run the wrap-selection flow over the given selections.
///
/// Presents the filtered candidate list through `picker`; dismissal is a
/// clean no-op with no edits applied. Each selection is wrapped
/// independently: explicit `content` applies to every range, otherwise
/// each range wraps its own selected text. The result is one edit batch
/// of N independent replacements.
pub fn surround(
    provider: &mut CommandProvider,
    host: &dyn WorkspaceHost,
    picker: &dyn SelectionPicker,
    sink: &mut dyn EditSink,
    selections: &[Selection],
    content: Option<&str>,
) -> Result<(), DataError> {
    if selections.is_empty() {
        return Ok(());
    }

    let items = provider.provide(host)?;
    let candidates = wrappable_templates(&items);
    if candidates.is_empty() {
        return Ok(());
    }

    let displays: Vec<String> = candidates.iter().map(|c| c.display.clone()).collect();
    let Some(choice) = picker.pick(&displays) else {
        return Ok(());
    };
    let Some(candidate) = candidates.get(choice) else {
        return Ok(());
    };

    let edits = selections
        .iter()
        .map(|sel| {
            let wrapped = apply_template(&candidate.template, content.unwrap_or(&sel.text));
            (sel.range, wrapped)
        })
        .collect();
    sink.apply_edits(edits);

    Ok(())
}
