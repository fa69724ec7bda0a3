//! Tolerant batch loading against any keyed store.

use scriptgate_core::{KeyedStore, Table};
use std::collections::BTreeMap;

/// Look up every key concurrently and collect whatever is found.
///
/// One lookup is issued per key; the call returns only after every
/// lookup has settled. A key with no stored record, or whose lookup
/// fails, is logged and omitted — it never aborts the batch. An empty
/// key list resolves immediately to an empty map, with no lookup issued.
pub async fn load_batch(
    store: &dyn KeyedStore,
    table: &Table,
    keys: &[String],
) -> BTreeMap<String, serde_json::Value> {
    let lookups = keys.iter().map(|key| async move {
        match store.get(table, key).await {
            Ok(Some(value)) => Some((key.clone(), value)),
            Ok(None) => {
                tracing::debug!(key, table = %table, "no record for key");
                None
            }
            Err(e) => {
                tracing::warn!(key, table = %table, error = %e, "lookup failed, omitting key");
                None
            }
        }
    });

    futures::future::join_all(lookups)
        .await
        .into_iter()
        .flatten()
        .collect()
}
