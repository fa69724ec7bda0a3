//! Execution unit construction — a fresh, limited engine per request with
//! the capability surface registered as named host functions.

use crate::config::GatewayConfig;
use rhai::{Dynamic, Engine, EvalAltResult};
use scriptgate_core::{Capabilities, ExecutionOutcome, FailureKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Handle;

/// Build an engine, register capabilities, evaluate the source, and map
/// the settled result into an outcome.
///
/// `handle` carries the async runtime into the unit so the store
/// capability can bridge to the async backend; it is present only in
/// async mode. `cancel` is the abandonment flag the gateway trips when
/// the deadline elapses.
pub(crate) fn run_unit(
    config: &GatewayConfig,
    caps: &Capabilities,
    handle: Option<Handle>,
    cancel: Option<Arc<AtomicBool>>,
    source: &str,
) -> ExecutionOutcome {
    let engine = build_engine(config, caps, handle, cancel);

    match engine.eval::<Dynamic>(source) {
        Ok(value) => ExecutionOutcome::success(dynamic_to_value(&value)),
        Err(e) => {
            tracing::debug!(error = %e, "execution unit failed");
            ExecutionOutcome::failure(FailureKind::Execution, e.to_string())
        }
    }
}

fn build_engine(
    config: &GatewayConfig,
    caps: &Capabilities,
    handle: Option<Handle>,
    cancel: Option<Arc<AtomicBool>>,
) -> Engine {
    let mut engine = Engine::new();

    engine.set_max_operations(config.max_operations);
    engine.set_max_call_levels(config.max_call_levels);
    engine.set_max_expr_depths(config.max_expr_depth, config.max_expr_depth);
    engine.set_max_string_size(config.max_string_size);
    engine.set_max_array_size(config.max_array_size);
    engine.set_max_map_size(config.max_map_size);

    // Script print goes to the host's log, not the pipe.
    engine.on_print(|text| tracing::debug!(target: "scriptgate::script", "{text}"));

    // JSON helpers, so scripts can decode sink payloads and encode
    // structured results. Pure functions, not capabilities.
    engine.register_fn(
        "parse_json",
        |text: &str| -> Result<Dynamic, Box<EvalAltResult>> {
            let value: serde_json::Value = serde_json::from_str(text)
                .map_err(|e| -> Box<EvalAltResult> { e.to_string().into() })?;
            rhai::serde::to_dynamic(value)
        },
    );
    engine.register_fn(
        "to_json",
        |value: Dynamic| -> Result<String, Box<EvalAltResult>> {
            let json = dynamic_to_value(&value);
            serde_json::to_string(&json).map_err(|e| -> Box<EvalAltResult> { e.to_string().into() })
        },
    );

    if let Some(cancel) = cancel {
        engine.on_progress(move |_ops| {
            if cancel.load(Ordering::Relaxed) {
                Some("deadline elapsed".into())
            } else {
                None
            }
        });
    }

    if let Some(vars) = caps.vars.clone() {
        let sink = Arc::clone(&vars);
        engine.register_fn("var_set", move |name: &str, value: &str| {
            sink.set(name, value.to_string());
        });
        engine.register_fn("var_get", move |name: &str| -> Dynamic {
            match vars.get(name) {
                Some(value) => value.into(),
                None => Dynamic::UNIT,
            }
        });
    }

    if let Some(cap) = caps.store.clone() {
        match handle {
            Some(handle) => {
                let (store, table) = (cap.store, cap.table);
                engine.register_fn(
                    "store_get",
                    move |key: &str| -> Result<Dynamic, Box<EvalAltResult>> {
                        match handle.block_on(store.get(&table, key)) {
                            Ok(Some(value)) => to_dynamic_or_err(value),
                            Ok(None) => Ok(Dynamic::UNIT),
                            Err(e) => {
                                // Backend failures degrade to "absent",
                                // never abort the unit.
                                tracing::warn!(key, error = %e, "store lookup failed");
                                Ok(Dynamic::UNIT)
                            }
                        }
                    },
                );
            }
            None => {
                engine.register_fn(
                    "store_get",
                    |_key: &str| -> Result<Dynamic, Box<EvalAltResult>> {
                        Err("store_get is only available in async mode".into())
                    },
                );
            }
        }
    }

    engine
}

fn to_dynamic_or_err(value: serde_json::Value) -> Result<Dynamic, Box<EvalAltResult>> {
    rhai::serde::to_dynamic(value)
}

/// Convert a settled script value into the outcome's opaque JSON value.
/// Types with no JSON rendering fall back to their display text.
fn dynamic_to_value(value: &Dynamic) -> serde_json::Value {
    if value.is_unit() {
        return serde_json::Value::Null;
    }
    rhai::serde::from_dynamic(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()))
}
