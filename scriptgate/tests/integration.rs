//! End-to-end wiring: store, sink, gateway, command, dispatch.

use scriptgate_command::{CallerTrust, CommandRegistry, MemorySink, RunScriptCommand};
use scriptgate_core::{Capabilities, ExecMode, KeyedStore, Table, VariableSink};
use scriptgate_data::build_move_cache;
use scriptgate_engine::ScriptGateway;
use scriptgate_store_memory::MemoryStore;
use std::sync::Arc;

async fn seeded_store(table: &Table) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .put(
            table,
            "tackle",
            serde_json::json!({
                "id": "tackle",
                "name": "Tackle",
                "type": "Normal",
                "basePower": 40,
                "accuracy": 100,
                "category": "Physical"
            }),
        )
        .await
        .unwrap();
    store
        .put(
            table,
            "swift",
            serde_json::json!({
                "id": "swift",
                "name": "Swift",
                "type": "Normal",
                "basePower": 60,
                "accuracy": true,
                "category": "Special"
            }),
        )
        .await
        .unwrap();
    store
}

#[tokio::test(flavor = "multi_thread")]
async fn a_script_reads_the_store_and_reports_through_the_sink() {
    let table = Table::new("moves", 1);
    let store = seeded_store(&table).await;
    let sink = Arc::new(MemorySink::new());

    let caps = Capabilities::none()
        .with_store(store, table)
        .with_vars(sink.clone());
    let gateway = Arc::new(ScriptGateway::new(caps));

    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(RunScriptCommand::new("js", gateway)));

    let out = registry
        .dispatch(
            "js",
            r#"
                let rec = store_get("tackle");
                var_set("power", rec.basePower.to_string());
                rec.name
            "#,
            CallerTrust::Elevated,
        )
        .await;

    assert_eq!(out, "Tackle");
    assert_eq!(sink.get("power").as_deref(), Some("40"));
}

#[tokio::test(flavor = "multi_thread")]
async fn gating_blocks_standard_callers_end_to_end() {
    let gateway = Arc::new(ScriptGateway::new(Capabilities::none()));
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(RunScriptCommand::new("js", gateway)));

    let out = registry.dispatch("js", "1 + 1", CallerTrust::Standard).await;
    assert!(out.starts_with("Error: command 'js' denied"), "got: {out}");

    let out = registry.dispatch("js", "1 + 1", CallerTrust::Elevated).await;
    assert_eq!(out, "2");
}

#[tokio::test(flavor = "multi_thread")]
async fn the_move_cache_feeds_a_script_run() {
    let table = Table::new("moves", 1);
    let store = seeded_store(&table).await;

    // Build the cache the way the host would before a script run.
    let cache = build_move_cache(
        store.as_ref(),
        &table,
        r#"{"name": "Eevee", "moves": ["tackle", "swift", "unknown-move"]}"#,
    )
    .await;
    assert_eq!(cache.moves.len(), 2);
    assert!(cache.moves["swift"].accuracy.always_hits());

    // Hand the cache to a script through the sink and let it answer from it.
    let sink = Arc::new(MemorySink::new());
    sink.set("cache", serde_json::to_string(&cache).unwrap());

    let gateway = Arc::new(ScriptGateway::new(Capabilities::none().with_vars(sink)));
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(
        RunScriptCommand::new("js", gateway).with_mode(ExecMode::Sync),
    ));

    let out = registry
        .dispatch(
            "js",
            r#"
                let cache = parse_json(var_get("cache"));
                cache.moves.tackle.basePower + cache.moves.swift.basePower
            "#,
            CallerTrust::Elevated,
        )
        .await;
    assert_eq!(out, "100");
}

#[tokio::test(flavor = "multi_thread")]
async fn sync_and_async_modes_agree_on_pure_values() {
    let gateway = Arc::new(ScriptGateway::new(Capabilities::none()));
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(
        RunScriptCommand::new("js", Arc::clone(&gateway))
            .with_mode(ExecMode::Sync)
            .ungated(),
    ));
    registry.register(Arc::new(RunScriptCommand::new("runjs", gateway).ungated()));

    let sync_out = registry.dispatch("js", "40 + 2", CallerTrust::Standard).await;
    let async_out = registry.dispatch("runjs", "40 + 2", CallerTrust::Standard).await;
    assert_eq!(sync_out, "42");
    assert_eq!(async_out, "42");
}
