//! Extraction engine: regex-based heuristic scanners over raw text.
//!
//! Deliberately not a parser. Each scanner is an independent,
//! non-backtracking, linear pass that tolerates arbitrary input:
//! unmatched or partial constructs are simply not recorded, and no
//! scanner can fail. Only flat, non-nested brace groups are recognized.

mod commands;
mod macros;
mod packages;

pub use commands::command_usages;
pub use macros::macro_definitions;
pub use packages::package_usages;
