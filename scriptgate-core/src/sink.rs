//! The variable sink — the result channel between an executed unit and
//! the host's scripting layer.

/// Named string variables shared with the host.
///
/// Executed units typically JSON-encode structured results and `set` them
/// here rather than returning them, mirroring how the host's own scripting
/// layer passes data between commands. The sink is synchronous: it backs
/// onto in-process state owned by the host, not onto the keyed store.
pub trait VariableSink: Send + Sync {
    /// Set a variable, creating or overwriting it.
    fn set(&self, name: &str, value: String);

    /// Read a variable. Returns `None` if it was never set.
    fn get(&self, name: &str) -> Option<String>;
}
