//! Lazy per-package command cache.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::catalog::CatalogEntry;
use crate::data::DataStore;

/// Caches per-package command tables, populated on first use.
///
/// Loading is attempted at most once per distinct package name per
/// process lifetime. A package with no backing data source is recorded
/// as an empty table rather than retried on every call.
#[derive(Default)]
pub struct PackageCache {
    tables: FxHashMap<SmolStr, IndexMap<SmolStr, CatalogEntry>>,
}

impl PackageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the command table for a package, loading it on first use.
    pub fn ensure_loaded(
        &mut self,
        store: &DataStore,
        package: &str,
    ) -> &IndexMap<SmolStr, CatalogEntry> {
        if !self.tables.contains_key(package) {
            let table = store.load_package(package).unwrap_or_default();
            tracing::debug!("loaded {} command(s) for package {package}", table.len());
            self.tables.insert(SmolStr::new(package), table);
        }

        &self.tables[package]
    }

    /// Whether a load has already been attempted for this package.
    pub fn is_loaded(&self, package: &str) -> bool {
        self.tables.contains_key(package)
    }
}
