//! The catalog aggregator: multi-source merge behind a cooldown cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::constants::DEFAULT_COOLDOWN;
use crate::catalog::{CatalogEntry, MacroDefinition, Suggestion, environment_entry};
use crate::data::{DataError, DataStore, PackageCache};
use crate::extract;
use crate::host::WorkspaceHost;

/// A computed suggestion list with its build time.
///
/// Disposable: replaced wholesale on the next recompute, never patched.
struct Snapshot {
    built_at: Instant,
    items: Arc<[Suggestion]>,
}

/// Owns the command catalog and serves merged, ranked suggestions.
///
/// Sources are merged under first-writer-wins precedence: defaults
/// (including environment snippets), then symbols, then per-package
/// tables, then per-file scans, then a live scan of the current
/// document. Recomputation is bounded by a cooldown; inside the window
/// the previous snapshot is returned unchanged.
pub struct CommandProvider {
    store: DataStore,
    /// Default commands plus environment snippets. Immutable after
    /// construction.
    defaults: IndexMap<SmolStr, CatalogEntry>,
    /// Symbol table, loaded lazily exactly once on first flagged use.
    symbols: Option<IndexMap<SmolStr, CatalogEntry>>,
    packages: PackageCache,
    /// Package names in discovery order. Append-only.
    used_packages: IndexSet<SmolStr>,
    /// One extracted table per scanned file, replaced wholesale on rescan.
    file_entries: FxHashMap<PathBuf, IndexMap<SmolStr, CatalogEntry>>,
    /// First definition seen per macro name, across all scans.
    definitions: IndexMap<SmolStr, MacroDefinition>,
    cooldown: Duration,
    snapshot: Option<Snapshot>,
}

impl CommandProvider {
    /// Create a provider, loading the default tables eagerly.
    ///
    /// A missing or unparseable default table aborts construction: an
    /// empty base catalog would be confusing and hard to diagnose
    /// downstream.
    pub fn new(store: DataStore) -> Result<Self, DataError> {
        let mut defaults = store.load_default_commands()?;
        for env in store.load_environments()? {
            let entry = environment_entry(&env);
            defaults.entry(entry.command.clone()).or_insert(entry);
        }
        tracing::debug!("loaded {} default entries", defaults.len());

        Ok(Self {
            store,
            defaults,
            symbols: None,
            packages: PackageCache::new(),
            used_packages: IndexSet::new(),
            file_entries: FxHashMap::default(),
            definitions: IndexMap::new(),
            cooldown: DEFAULT_COOLDOWN,
            snapshot: None,
        })
    }

    /// Override the recompute cooldown (default 1000 ms).
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// The current merged suggestion list.
    ///
    /// Inside the cooldown window this returns the previous snapshot
    /// unchanged, with no side effects, regardless of underlying data
    /// changes. On a cache miss it merges all sources fresh; the live
    /// scan of the current document always sees the newest text.
    pub fn provide(&mut self, host: &dyn WorkspaceHost) -> Result<Arc<[Suggestion]>, DataError> {
        if let Some(snapshot) = &self.snapshot {
            if snapshot.built_at.elapsed() < self.cooldown {
                return Ok(snapshot.items.clone());
            }
        }

        let flags = host.flags();
        let mut merged: IndexMap<SmolStr, CatalogEntry> = IndexMap::new();

        merge_absent(&mut merged, self.defaults.values());

        if flags.unicode_symbols {
            if self.symbols.is_none() {
                let symbols = self.store.load_symbols()?;
                tracing::debug!("loaded {} symbol(s)", symbols.len());
                self.symbols = Some(symbols);
            }
            if let Some(symbols) = &self.symbols {
                merge_absent(&mut merged, symbols.values());
            }
        }

        if flags.package_commands {
            let Self {
                packages,
                used_packages,
                store,
                ..
            } = self;
            for package in used_packages.iter() {
                merge_absent(&mut merged, packages.ensure_loaded(store, package).values());
            }
        }

        for path in host.relevant_files() {
            if let Some(table) = self.file_entries.get(&path) {
                merge_absent(&mut merged, table.values());
            }
        }

        if let Some(doc) = host.current_document() {
            let live = extract::command_usages(&doc.text);
            merge_absent(&mut merged, live.values());
        }

        let items: Arc<[Suggestion]> = merged.values().map(Suggestion::from_entry).collect();
        tracing::debug!("recomputed {} suggestion(s)", items.len());

        self.snapshot = Some(Snapshot {
            built_at: Instant::now(),
            items: items.clone(),
        });
        Ok(items)
    }

    /// Re-extract one file, replacing its record table wholesale.
    ///
    /// A file that can no longer be read drops out of the per-file
    /// tables. The suggestion snapshot is untouched; the change becomes
    /// visible on the next recompute.
    pub fn rescan_file(&mut self, host: &dyn WorkspaceHost, path: &Path) {
        if !host.file_exists(path) {
            self.file_entries.remove(path);
            return;
        }
        match host.read_file(path) {
            Some(text) => self.rescan_source(path, &text),
            None => {
                self.file_entries.remove(path);
            }
        }
    }

    /// Re-extract from already-available file content.
    pub fn rescan_source(&mut self, path: &Path, text: &str) {
        let usages = extract::command_usages(text);
        tracing::trace!("rescanned {}: {} command(s)", path.display(), usages.len());
        self.file_entries.insert(path.to_path_buf(), usages);

        for (name, line) in extract::macro_definitions(text) {
            self.definitions
                .entry(name.clone())
                .or_insert_with(|| MacroDefinition {
                    name,
                    line,
                    file: path.to_path_buf(),
                });
        }
    }

    /// Scan one file for package usages, extending the used-package set.
    pub fn record_package_usage(&mut self, host: &dyn WorkspaceHost, path: &Path) {
        if let Some(text) = host.read_file(path) {
            extract::package_usages(&text, &mut self.used_packages);
        }
    }

    /// Package names discovered so far, in discovery order.
    pub fn used_packages(&self) -> impl Iterator<Item = &SmolStr> {
        self.used_packages.iter()
    }

    /// All recorded macro definitions, in discovery order.
    pub fn macro_definitions(&self) -> impl Iterator<Item = &MacroDefinition> {
        self.definitions.values()
    }

    /// Where a macro was first defined, if known.
    pub fn definition(&self, name: &str) -> Option<&MacroDefinition> {
        self.definitions.get(name)
    }
}

/// Merge entries into `dst` without overwriting any key already present.
fn merge_absent<'a>(
    dst: &mut IndexMap<SmolStr, CatalogEntry>,
    src: impl Iterator<Item = &'a CatalogEntry>,
) {
    for entry in src {
        if !dst.contains_key(&entry.command) {
            dst.insert(entry.command.clone(), entry.clone());
        }
    }
}
