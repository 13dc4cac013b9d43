//! Environment snippet synthesis.
//!
//! Environment names from the default tables become `\begin{...}...\end{...}`
//! skeleton entries, merged into the default command table at provider
//! initialization so they share its precedence tier.

use crate::catalog::CatalogEntry;

/// Environments whose body lines start with `\item`.
const ITEM_ENVIRONMENTS: &[&str] = &["enumerate", "itemize"];

/// Synthesize the default snippet entry for one environment name.
///
/// The entry key carries a leading space, so the suggestion label is
/// presented without the escape prefix and can never collide with a
/// scanned command name.
pub fn environment_entry(name: &str) -> CatalogEntry {
    let body = if ITEM_ENVIRONMENTS.contains(&name) {
        format!("\\\\begin{{{name}}}\n\t\\\\item ${{1}}\n\\\\end{{{name}}}")
    } else {
        format!("\\\\begin{{{name}}}\n\t${{1}}\n\\\\end{{{name}}}")
    };

    CatalogEntry::new(format!(" begin{{{name}}}")).with_snippet(body)
}
