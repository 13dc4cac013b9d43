//! Command usage scanning.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use smol_str::SmolStr;

use crate::catalog::{CatalogEntry, PostAction};

/// Escape character, command name, then up to three consecutive flat
/// brace groups. Group content excludes further braces, so nested
/// arguments are not recognized.
static COMMAND_USAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\([a-zA-Z]+)(?:\{([^{}]*)\})?(?:\{([^{}]*)\})?(?:\{([^{}]*)\})?").unwrap()
});

/// Scan text for command usages, keyed by command name.
///
/// The first match for a given name wins; later matches of the same name
/// in the same text are ignored. Commands with argument groups get a
/// synthesized snippet with one `${n}` placeholder per group. Citation-
/// and reference-like names (and `begin`) are marked to re-trigger the
/// suggestion UI after insertion.
pub fn command_usages(text: &str) -> IndexMap<SmolStr, CatalogEntry> {
    let mut found: IndexMap<SmolStr, CatalogEntry> = IndexMap::new();

    for caps in COMMAND_USAGE.captures_iter(text) {
        let name = &caps[1];
        if found.contains_key(name) {
            continue;
        }

        let arg_count = (2..=4).filter(|&i| caps.get(i).is_some()).count();

        let mut entry = CatalogEntry::new(SmolStr::new(name));
        if arg_count > 0 {
            let mut snippet = format!("\\\\{name}");
            for n in 1..=arg_count {
                snippet.push_str(&format!("{{${{{n}}}}}"));
            }
            entry.snippet = Some(snippet.into());
        }
        if name.contains("cite") || name.contains("ref") || name == "begin" {
            entry.post_action = Some(PostAction::Retrigger);
        }

        found.insert(SmolStr::new(name), entry);
    }

    found
}
