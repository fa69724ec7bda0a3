//! The command trait — one named entry on the dispatch surface.

use async_trait::async_trait;

/// A named command the host can dispatch to.
///
/// Commands take the remainder of the input line verbatim — no flag
/// parsing — and always produce a string for the host pipe, even on
/// failure (`Error: <message>`). A command must never panic on bad
/// input; the host pipeline has no handler for it.
#[async_trait]
pub trait Command: Send + Sync {
    /// The name the command is dispatched under.
    fn name(&self) -> &str;

    /// One-line help text shown in the host's command list.
    fn help(&self) -> &str;

    /// Whether invoking this command requires elevated caller trust.
    fn gated(&self) -> bool {
        false
    }

    /// Run the command with the rest of the input line as its argument.
    async fn call(&self, args: &str) -> String;
}
