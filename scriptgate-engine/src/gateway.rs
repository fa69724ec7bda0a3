//! The gateway — validate, run, normalize.

use crate::config::GatewayConfig;
use crate::unit;
use scriptgate_core::{Capabilities, ExecMode, ExecutionOutcome, ExecutionRequest, FailureKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The script execution gateway.
///
/// Owns the capability surface and the limits; each call to
/// [`execute`](ScriptGateway::execute) builds a fresh execution unit,
/// drives it to settlement, and returns the normalized outcome. The
/// gateway does not authenticate — trust gating happens in the dispatch
/// layer before a request ever reaches it.
pub struct ScriptGateway {
    caps: Capabilities,
    config: GatewayConfig,
}

impl ScriptGateway {
    /// Create a gateway with default limits.
    pub fn new(caps: Capabilities) -> Self {
        Self::with_config(caps, GatewayConfig::default())
    }

    /// Create a gateway with explicit limits.
    pub fn with_config(caps: Capabilities, config: GatewayConfig) -> Self {
        Self { caps, config }
    }

    /// Run one request to settlement.
    ///
    /// Blank source is rejected before any engine is constructed, so a
    /// rejected request has no side effects. Sync-mode units evaluate
    /// inline and return immediately; async-mode units run off-task with
    /// the store bridge attached, and this call suspends until they
    /// settle or the deadline elapses.
    pub async fn execute(&self, req: ExecutionRequest) -> ExecutionOutcome {
        if req.is_blank() {
            return ExecutionOutcome::failure(FailureKind::Validation, "no source text provided");
        }

        tracing::debug!(
            mode = ?req.mode,
            trust = ?req.trust,
            bytes = req.source.len(),
            "executing script"
        );

        let outcome = match req.mode {
            ExecMode::Sync => unit::run_unit(&self.config, &self.caps, None, None, &req.source),
            ExecMode::Async => self.run_async(&req.source).await,
            mode => unreachable!("unhandled exec mode {mode:?}"),
        };

        if let ExecutionOutcome::Failure { kind, message } = &outcome {
            tracing::warn!(?kind, message, "script failed");
        }
        outcome
    }

    async fn run_async(&self, source: &str) -> ExecutionOutcome {
        let config = self.config.clone();
        let caps = self.caps.clone();
        let source = source.to_string();
        let cancel = Arc::new(AtomicBool::new(false));
        let unit_cancel = Arc::clone(&cancel);
        let handle = tokio::runtime::Handle::current();

        let join = tokio::task::spawn_blocking(move || {
            unit::run_unit(&config, &caps, Some(handle), Some(unit_cancel), &source)
        });

        match self.config.deadline {
            None => join.await.unwrap_or_else(|e| {
                ExecutionOutcome::failure(FailureKind::Execution, e.to_string())
            }),
            Some(deadline) => match tokio::time::timeout(deadline, join).await {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(e)) => ExecutionOutcome::failure(FailureKind::Execution, e.to_string()),
                Err(_elapsed) => {
                    // Abandon the unit: signal it through the progress
                    // hook and stop waiting. Side effects it already
                    // performed are not undone.
                    cancel.store(true, Ordering::Relaxed);
                    ExecutionOutcome::failure(
                        FailureKind::Timeout,
                        format!("deadline of {deadline:?} elapsed"),
                    )
                }
            },
        }
    }
}
