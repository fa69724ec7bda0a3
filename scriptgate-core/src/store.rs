//! The keyed store — the asynchronous key/value backend executed units
//! may read and the data loader batches against.

use crate::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A handle naming one logical table of records.
///
/// The original backend's `open(name, version)` handle rendered as a value
/// type: backends resolve it per call rather than holding an open
/// connection. A table is created lazily on first write — "create if
/// absent" is the only schema migration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    /// Logical table name.
    pub name: String,
    /// Schema version. Bumping it addresses a fresh table.
    pub version: u32,
}

impl Table {
    /// Create a table handle.
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.v{}", self.name, self.version)
    }
}

/// An external asynchronous key/value backend.
///
/// Implementations:
/// - MemoryStore: HashMap (testing, ephemeral)
/// - FsStore: one JSON file per key (persistence across restarts)
///
/// The trait is deliberately minimal — get/put/delete plus prefix list.
/// Batch semantics (issue many lookups, tolerate individual misses, wait
/// for all to settle) are NOT part of this trait; they live in the loader,
/// which composes any backend. Concurrent reads against the same backend
/// must be tolerated by the implementation, not mediated by callers.
#[async_trait]
pub trait KeyedStore: Send + Sync {
    /// Read a record by key. Returns `None` if the key has no record.
    async fn get(&self, table: &Table, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Write a record. Creates the table if absent; overwrites the key.
    async fn put(
        &self,
        table: &Table,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError>;

    /// Delete a record. No-op if the key has no record.
    async fn delete(&self, table: &Table, key: &str) -> Result<(), StoreError>;

    /// List keys under a prefix within a table.
    async fn list(&self, table: &Table, prefix: &str) -> Result<Vec<String>, StoreError>;
}
