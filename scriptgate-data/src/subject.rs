//! The active subject — the one creature whose move keys a batch looks up.

use serde::{Deserialize, Serialize};

/// The single record a lookup batch is scoped to.
///
/// Arrives as caller-supplied JSON. Malformed payloads degrade to the
/// empty default with a warning — a bad subject must never crash the
/// caller's pipeline, it just produces an empty cache downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveSubject {
    /// Subject name.
    #[serde(default)]
    pub name: String,
    /// Move ids to look up, in dataset order.
    #[serde(default)]
    pub moves: Vec<String>,
}

impl ActiveSubject {
    /// Parse a subject from caller-supplied JSON, falling back to the
    /// empty default on malformed input.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(subject) => subject,
            Err(e) => {
                tracing::warn!(error = %e, "malformed subject payload, using empty subject");
                Self::default()
            }
        }
    }
}
