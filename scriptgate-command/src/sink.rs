//! In-memory variable sink — the host side of the result channel.

use scriptgate_core::VariableSink;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory [`VariableSink`] backed by a `HashMap` behind a `RwLock`.
///
/// The sink is synchronous by contract, so this uses the std lock, not
/// an async one; holders never block across an await.
pub struct MemorySink {
    vars: RwLock<HashMap<String, String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableSink for MemorySink {
    fn set(&self, name: &str, value: String) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.insert(name.to_string(), value);
    }

    fn get(&self, name: &str) -> Option<String> {
        let vars = self.vars.read().unwrap_or_else(|e| e.into_inner());
        vars.get(name).cloned()
    }
}
