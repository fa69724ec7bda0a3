//! The move record — one immutable entry in the stored dataset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A move's chance to hit.
///
/// The source dataset stores a percentage for ordinary moves and the
/// literal `true` for moves that bypass the accuracy check entirely, so
/// the field deserializes untagged from either shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accuracy {
    /// Percent chance to hit (0–100).
    Percent(u8),
    /// `true`: the move does not check accuracy.
    Certain(bool),
}

impl Accuracy {
    /// Whether the move bypasses the accuracy check.
    pub fn always_hits(&self) -> bool {
        matches!(self, Accuracy::Certain(true))
    }
}

/// One move definition, keyed by its id in the store.
///
/// Immutable once stored; the dataset is only ever refreshed wholesale,
/// never patched record by record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Store key and canonical identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Elemental type.
    #[serde(rename = "type")]
    pub move_type: String,
    /// Base damage. Status moves carry 0.
    #[serde(rename = "basePower")]
    pub base_power: u32,
    /// Chance to hit.
    pub accuracy: Accuracy,
    /// Damage category ("Physical", "Special", "Status").
    pub category: String,
    /// Turn-order priority bracket.
    #[serde(default)]
    pub priority: i8,
    /// Behavior flags from the dataset, kept opaque.
    #[serde(default)]
    pub flags: BTreeMap<String, serde_json::Value>,
    /// Human-readable effect text.
    #[serde(rename = "desc", default)]
    pub description: String,
}
