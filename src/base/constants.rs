//! Domain constants shared across the crate.

use std::time::Duration;

/// The command escape character of the markup language.
pub const ESCAPE: char = '\\';

/// The escape character as it appears inside stored snippet templates.
///
/// Templates keep the escape doubled so that one unescape pass survives
/// downstream processing (see `intel::surround`).
pub const ESCAPED_ESCAPE: &str = "\\\\";

/// How long a computed suggestion snapshot stays fresh.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1000);

/// Directory holding the persisted catalog tables, relative to the
/// executable or the working directory.
pub const DATA_DIR: &str = "data";

/// Default built-in command table.
pub const COMMANDS_TABLE: &str = "commands.json";

/// List of environment names synthesized into `\begin...\end` snippets.
pub const ENVIRONMENTS_TABLE: &str = "environments.json";

/// Unicode math symbol table, consulted behind a feature flag.
pub const SYMBOLS_TABLE: &str = "unimathsymbols.json";

/// Subdirectory holding one command table per package.
pub const PACKAGES_DIR: &str = "packages";

/// Naming convention for per-package tables: `<package><SUFFIX>`.
pub const PACKAGE_TABLE_SUFFIX: &str = "_cmd.json";
