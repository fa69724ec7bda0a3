//! The `js` command — runs the rest of the input line as script source.

use crate::command::Command;
use async_trait::async_trait;
use scriptgate_core::{ExecMode, ExecutionRequest, TrustLevel};
use scriptgate_engine::ScriptGateway;
use std::sync::Arc;

/// Runs arbitrary script source through the gateway.
///
/// Gated by default — this is an eval-style command and only trusted
/// callers should reach it. The gateway revalidates the source text and
/// classifies every failure, so whatever the script does the host pipe
/// receives a plain string.
pub struct RunScriptCommand {
    name: String,
    help: String,
    gated: bool,
    mode: ExecMode,
    gateway: Arc<ScriptGateway>,
}

impl RunScriptCommand {
    /// Create the command under the given name, async mode, gated.
    pub fn new(name: impl Into<String>, gateway: Arc<ScriptGateway>) -> Self {
        Self {
            name: name.into(),
            help: "(script source) – runs the rest of the line as script source. Use with caution!"
                .into(),
            gated: true,
            mode: ExecMode::Async,
            gateway,
        }
    }

    /// Set the execution mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ExecMode) -> Self {
        self.mode = mode;
        self
    }

    /// Drop the gating requirement.
    #[must_use]
    pub fn ungated(mut self) -> Self {
        self.gated = false;
        self
    }
}

#[async_trait]
impl Command for RunScriptCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn gated(&self) -> bool {
        self.gated
    }

    async fn call(&self, args: &str) -> String {
        let trust = if self.gated {
            TrustLevel::Gated
        } else {
            TrustLevel::Ungated
        };
        let request = ExecutionRequest::new(args, self.mode).with_trust(trust);
        self.gateway.execute(request).await.to_pipe_string()
    }
}
