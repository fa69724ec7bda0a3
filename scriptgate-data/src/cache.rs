//! The move cache — one subject's decoded records, rebuilt in full per
//! request.

use crate::loader::load_batch;
use crate::record::MoveRecord;
use crate::subject::ActiveSubject;
use scriptgate_core::{KeyedStore, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The decoded move set of one active subject.
///
/// Created per lookup batch, serialized out, and discarded — never
/// merged with a prior cache. A move id with no record, or whose stored
/// value does not decode, is simply absent from `moves`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveCache {
    /// The subject the batch was scoped to.
    pub subject: String,
    /// Move id to decoded record, for every id that resolved.
    pub moves: BTreeMap<String, MoveRecord>,
}

/// Build the full cache for one subject payload.
///
/// The payload is caller-supplied JSON naming the subject and its move
/// ids. Malformed payloads degrade to an empty subject (and therefore an
/// empty cache); stored values that fail to decode into [`MoveRecord`]
/// are logged and dropped. Neither case is an error to the caller.
pub async fn build_move_cache(
    store: &dyn KeyedStore,
    table: &Table,
    subject_json: &str,
) -> MoveCache {
    let subject = ActiveSubject::from_json(subject_json);
    let raw = load_batch(store, table, &subject.moves).await;

    let moves = raw
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(record) => Some((key, record)),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored record does not decode, omitting");
                None
            }
        })
        .collect();

    MoveCache {
        subject: subject.name,
        moves,
    }
}
