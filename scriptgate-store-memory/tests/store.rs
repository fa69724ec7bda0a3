use scriptgate_core::{KeyedStore, Table};
use scriptgate_store_memory::MemoryStore;
use std::sync::Arc;

fn moves_table() -> Table {
    Table::new("moves", 1)
}

// --- Basic CRUD ---

#[tokio::test]
async fn put_then_get() {
    let store = MemoryStore::new();
    let table = moves_table();

    store
        .put(&table, "tackle", serde_json::json!({"basePower": 40}))
        .await
        .unwrap();

    let val = store.get(&table, "tackle").await.unwrap();
    assert_eq!(val, Some(serde_json::json!({"basePower": 40})));
}

#[tokio::test]
async fn get_missing_returns_none() {
    let store = MemoryStore::new();

    let val = store.get(&moves_table(), "missing").await.unwrap();
    assert_eq!(val, None);
}

#[tokio::test]
async fn put_overwrites_value() {
    let store = MemoryStore::new();
    let table = moves_table();

    store.put(&table, "k", serde_json::json!(1)).await.unwrap();
    store.put(&table, "k", serde_json::json!(2)).await.unwrap();

    let val = store.get(&table, "k").await.unwrap();
    assert_eq!(val, Some(serde_json::json!(2)));
}

#[tokio::test]
async fn delete_removes_key() {
    let store = MemoryStore::new();
    let table = moves_table();

    store
        .put(&table, "k", serde_json::json!("val"))
        .await
        .unwrap();
    store.delete(&table, "k").await.unwrap();

    let val = store.get(&table, "k").await.unwrap();
    assert_eq!(val, None);
}

#[tokio::test]
async fn delete_missing_is_noop() {
    let store = MemoryStore::new();

    store.delete(&moves_table(), "nonexistent").await.unwrap();
}

// --- Round-trip fidelity ---

#[tokio::test]
async fn round_trip_preserves_every_field() {
    let store = MemoryStore::new();
    let table = moves_table();

    let record = serde_json::json!({
        "id": "thunderbolt",
        "name": "Thunderbolt",
        "type": "Electric",
        "basePower": 90,
        "accuracy": 100,
        "category": "Special",
        "priority": 0,
        "flags": {"protect": true, "mirror": true},
        "desc": "Has a 10% chance to paralyze the target."
    });

    store.put(&table, "thunderbolt", record.clone()).await.unwrap();
    let loaded = store.get(&table, "thunderbolt").await.unwrap();
    assert_eq!(loaded, Some(record));
}

// --- Table isolation ---

#[tokio::test]
async fn tables_are_isolated() {
    let store = MemoryStore::new();
    let v1 = Table::new("moves", 1);
    let v2 = Table::new("moves", 2);

    store.put(&v1, "k", serde_json::json!("one")).await.unwrap();

    assert_eq!(store.get(&v2, "k").await.unwrap(), None);
    assert_eq!(
        store.get(&v1, "k").await.unwrap(),
        Some(serde_json::json!("one"))
    );
}

// --- List ---

#[tokio::test]
async fn list_by_prefix() {
    let store = MemoryStore::new();
    let table = moves_table();

    store.put(&table, "thunderbolt", serde_json::json!(1)).await.unwrap();
    store.put(&table, "thunder-wave", serde_json::json!(2)).await.unwrap();
    store.put(&table, "tackle", serde_json::json!(3)).await.unwrap();

    let keys = store.list(&table, "thunder").await.unwrap();
    assert_eq!(keys, vec!["thunder-wave", "thunderbolt"]);
}

#[tokio::test]
async fn list_empty_table_is_empty() {
    let store = MemoryStore::new();

    let keys = store.list(&moves_table(), "").await.unwrap();
    assert!(keys.is_empty());
}

// --- Concurrency ---

#[tokio::test]
async fn concurrent_reads_and_writes() {
    let store = Arc::new(MemoryStore::new());
    let table = moves_table();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        let table = table.clone();
        handles.push(tokio::spawn(async move {
            let key = format!("key-{i}");
            store.put(&table, &key, serde_json::json!(i)).await.unwrap();
            store.get(&table, &key).await.unwrap()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let val = handle.await.unwrap();
        assert_eq!(val, Some(serde_json::json!(i)));
    }
}
