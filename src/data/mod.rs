//! Persisted catalog tables and the per-package command cache.
//!
//! The default command table, environment list, and symbol table are
//! required inputs: failing to load one is a fatal error at its load
//! point. Per-package tables are optional; a missing one just means the
//! package contributes no commands.

mod error;
mod packages;
mod store;

pub use error::DataError;
pub use packages::PackageCache;
pub use store::DataStore;
