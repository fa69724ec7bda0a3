#![deny(missing_docs)]
//! Filesystem-backed implementation of scriptgate-core's KeyedStore trait.
//!
//! Each table maps to a subdirectory under the root. Keys are
//! percent-encoded and stored as `.json` files within the table directory.
//! Provides true persistence across process restarts, standing in for the
//! browser's structured storage in the original deployment.

use async_trait::async_trait;
use scriptgate_core::{KeyedStore, StoreError, Table};
use std::path::{Path, PathBuf};

/// Filesystem-backed keyed store.
///
/// Directory layout:
/// ```text
/// root/
///   <encoded-name>-v<version>/
///     <encoded-key>.json
/// ```
///
/// The table directory is created lazily on first write — the only
/// "migration" the layout supports. Reads against a table that was never
/// written find nothing rather than erroring.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a new filesystem store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn table_dir(&self, table: &Table) -> PathBuf {
        self.root
            .join(format!("{}-v{}", encode(&table.name), table.version))
    }

    fn record_path(&self, table: &Table, key: &str) -> PathBuf {
        self.table_dir(table).join(format!("{}.json", encode(key)))
    }
}

/// Percent-encode a string into a filesystem-safe name.
fn encode(raw: &str) -> String {
    let mut encoded = String::new();
    for ch in raw.chars() {
        match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => encoded.push(ch),
            _ => {
                for byte in ch.to_string().as_bytes() {
                    encoded.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    encoded
}

/// Decode a filename back to a key.
fn filename_to_key(filename: &str) -> Option<String> {
    let name = filename.strip_suffix(".json")?;
    let mut result = Vec::new();
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok()?;
            let byte = u8::from_str_radix(hex, 16).ok()?;
            result.push(byte);
            i += 3;
        } else {
            result.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(result).ok()
}

#[async_trait]
impl KeyedStore for FsStore {
    async fn get(&self, table: &Table, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let path = self.record_path(table, key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let value: serde_json::Value = serde_json::from_str(&contents)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed(e.to_string())),
        }
    }

    async fn put(
        &self,
        table: &Table,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        let dir = self.table_dir(table);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::OpenFailed {
                table: table.to_string(),
                message: e.to_string(),
            })?;

        let path = self.record_path(table, key);
        let contents = serde_json::to_string_pretty(&value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, table: &Table, key: &str) -> Result<(), StoreError> {
        let path = self.record_path(table, key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::WriteFailed(e.to_string())),
        }
    }

    async fn list(&self, table: &Table, prefix: &str) -> Result<Vec<String>, StoreError> {
        let dir = self.table_dir(table);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::ReadFailed(e.to_string())),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
        {
            let filename = entry.file_name();
            let Some(filename) = filename.to_str() else {
                continue;
            };
            if let Some(key) = filename_to_key(filename) {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
