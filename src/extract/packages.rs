//! Package usage scanning.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use smol_str::SmolStr;

/// `\usepackage{...}`, with an optional bracketed options group.
static PACKAGE_USAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\usepackage(?:\[[^\[\]]*\])?\{([^}]*)\}").unwrap());

/// Scan text for package usages, extending `packages` in place.
///
/// Each brace group is comma-split; trimmed, non-empty segments are
/// package names, de-duplicated against names already known while
/// preserving first-seen order.
pub fn package_usages(text: &str, packages: &mut IndexSet<SmolStr>) {
    for caps in PACKAGE_USAGE.captures_iter(text) {
        for name in caps[1].split(',') {
            let name = name.trim();
            if !name.is_empty() {
                packages.insert(SmolStr::new(name));
            }
        }
    }
}
