//! Macro definition records.

use std::path::PathBuf;

use smol_str::SmolStr;

/// Where a macro was first defined.
///
/// One record per distinct macro name; the first definition seen across
/// all scans wins and later ones are ignored. This table supports
/// definition-lookup consumers and does not feed the suggestion merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroDefinition {
    pub name: SmolStr,
    /// 0-based line of the defining statement.
    pub line: u32,
    pub file: PathBuf,
}
