#![deny(missing_docs)]
//! In-memory implementation of scriptgate-core's KeyedStore trait.
//!
//! Uses a `HashMap` behind a `RwLock` for concurrent access. Tables are
//! serialized to strings for use as key prefixes, providing full table
//! isolation. Tables exist implicitly: the first `put` creates them and
//! reads against an absent table simply find nothing.

use async_trait::async_trait;
use scriptgate_core::{KeyedStore, StoreError, Table};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory keyed store backed by a `HashMap` behind a `RwLock`.
///
/// Suitable for testing, prototyping, and single-process use cases
/// where persistence across restarts is not required. Concurrent reads
/// are safe; the lock serializes writers.
pub struct MemoryStore {
    data: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a composite key from table + key to ensure isolation.
fn composite_key(table: &Table, key: &str) -> String {
    format!("{}\u{0}{key}", table)
}

/// Extract the user-facing key from a composite key, if it belongs to the
/// given table.
fn extract_key<'a>(composite: &'a str, table_prefix: &str) -> Option<&'a str> {
    composite
        .strip_prefix(table_prefix)
        .and_then(|rest| rest.strip_prefix('\u{0}'))
}

#[async_trait]
impl KeyedStore for MemoryStore {
    async fn get(&self, table: &Table, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let ck = composite_key(table, key);
        let data = self.data.read().await;
        Ok(data.get(&ck).cloned())
    }

    async fn put(
        &self,
        table: &Table,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        let ck = composite_key(table, key);
        let mut data = self.data.write().await;
        data.insert(ck, value);
        Ok(())
    }

    async fn delete(&self, table: &Table, key: &str) -> Result<(), StoreError> {
        let ck = composite_key(table, key);
        let mut data = self.data.write().await;
        data.remove(&ck);
        Ok(())
    }

    async fn list(&self, table: &Table, prefix: &str) -> Result<Vec<String>, StoreError> {
        let table_prefix = table.to_string();
        let data = self.data.read().await;
        let mut keys: Vec<String> = data
            .keys()
            .filter_map(|ck| extract_key(ck, &table_prefix))
            .filter(|key| key.starts_with(prefix))
            .map(String::from)
            .collect();
        keys.sort();
        Ok(keys)
    }
}
