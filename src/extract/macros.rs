//! Macro definition scanning.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::line_of_offset;

/// `\newcommand`, `\renewcommand`, `\providecommand` and friends, with
/// or without braces around the defined name.
static MACRO_DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:re|provide)?(?:new)?command\{?\\(\w+)").unwrap());

/// Scan text for macro definitions, in scan order.
///
/// Returns `(name, line)` pairs where `line` is the 0-based line of the
/// defining statement. Only the first definition of each distinct name
/// is kept; redefinitions later in the text are ignored.
pub fn macro_definitions(text: &str) -> Vec<(SmolStr, u32)> {
    let mut seen: FxHashSet<SmolStr> = FxHashSet::default();
    let mut found = Vec::new();

    for caps in MACRO_DEFINITION.captures_iter(text) {
        let name = SmolStr::new(&caps[1]);
        if seen.insert(name.clone()) {
            let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
            found.push((name, line_of_offset(text, offset)));
        }
    }

    found
}
