//! On-disk catalog table access.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::constants::{
    COMMANDS_TABLE, DATA_DIR, ENVIRONMENTS_TABLE, PACKAGE_TABLE_SUFFIX, PACKAGES_DIR,
    SYMBOLS_TABLE,
};
use crate::catalog::CatalogEntry;
use crate::data::DataError;

/// Reads the persisted catalog tables from a data directory.
///
/// Tables are JSON mappings from command name to entry body; the mapping
/// key supplies each entry's `command`. Per-package tables live under a
/// subdirectory, one file per package, named `<package>_cmd.json`.
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Create a store rooted at a specific data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store with automatic path discovery.
    ///
    /// Searches for the data directory in these locations (in order):
    /// 1. Next to the current executable (for installed binaries)
    /// 2. Current working directory (for development)
    pub fn discover() -> Self {
        Self {
            root: Self::discover_path(),
        }
    }

    fn discover_path() -> PathBuf {
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        {
            let data_next_to_exe = exe_dir.join(DATA_DIR);
            if data_next_to_exe.is_dir() {
                return data_next_to_exe;
            }
        }

        PathBuf::from(DATA_DIR)
    }

    /// The data directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the default built-in command table.
    pub fn load_default_commands(&self) -> Result<IndexMap<SmolStr, CatalogEntry>, DataError> {
        self.read_table(&self.root.join(COMMANDS_TABLE))
    }

    /// Load the list of default environment names.
    pub fn load_environments(&self) -> Result<Vec<SmolStr>, DataError> {
        let path = self.root.join(ENVIRONMENTS_TABLE);
        let text = Self::read_file(&path)?;
        serde_json::from_str(&text).map_err(|source| DataError::Json { path, source })
    }

    /// Load the unicode math symbol table.
    pub fn load_symbols(&self) -> Result<IndexMap<SmolStr, CatalogEntry>, DataError> {
        self.read_table(&self.root.join(SYMBOLS_TABLE))
    }

    /// Path of the command table for one package.
    pub fn package_table_path(&self, package: &str) -> PathBuf {
        self.root
            .join(PACKAGES_DIR)
            .join(format!("{package}{PACKAGE_TABLE_SUFFIX}"))
    }

    /// Load the command table contributed by one package.
    ///
    /// A missing table is not an error: the package simply contributes
    /// no commands. An unparseable table is treated the same way, with a
    /// warning, so one bad file cannot break completion.
    pub fn load_package(&self, package: &str) -> Option<IndexMap<SmolStr, CatalogEntry>> {
        let path = self.package_table_path(package);
        let text = fs::read_to_string(&path).ok()?;

        match serde_json::from_str::<IndexMap<SmolStr, CatalogEntry>>(&text) {
            Ok(table) => Some(
                table
                    .into_iter()
                    .map(|(key, mut entry)| {
                        if entry.command.is_empty() {
                            entry.command = key.clone();
                        }
                        if entry.package.is_none() {
                            entry.package = Some(SmolStr::new(package));
                        }
                        (key, entry)
                    })
                    .collect(),
            ),
            Err(err) => {
                tracing::warn!("unparseable package table {}: {err}", path.display());
                None
            }
        }
    }

    fn read_table(&self, path: &Path) -> Result<IndexMap<SmolStr, CatalogEntry>, DataError> {
        let text = Self::read_file(path)?;
        let table: IndexMap<SmolStr, CatalogEntry> = serde_json::from_str(&text)
            .map_err(|source| DataError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(table
            .into_iter()
            .map(|(key, mut entry)| {
                if entry.command.is_empty() {
                    entry.command = key.clone();
                }
                (key, entry)
            })
            .collect())
    }

    fn read_file(path: &Path) -> Result<String, DataError> {
        fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DataError::NotFound(path.to_path_buf())
            } else {
                DataError::Io(source)
            }
        })
    }
}
