//! The execution request — one unit of untrusted source text plus how to run it.

use serde::{Deserialize, Serialize};

/// How the execution unit is constructed and driven.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecMode {
    /// The unit is evaluated inline and its return value is the outcome
    /// immediately. No suspension points; async capabilities are not
    /// reachable from the unit.
    Sync,
    /// The unit runs off the caller's task and may issue asynchronous
    /// sub-operations (store lookups). The caller suspends until the unit
    /// settles before the outcome is final.
    Async,
}

/// The trust level the caller attached to the request.
///
/// The gateway does not authenticate — gating is enforced by the dispatch
/// layer before the gateway is ever invoked. The level is carried here so
/// the gateway can include it in its audit logging.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// The request came through a gated command; the caller already held
    /// elevated trust when it was authorized.
    Gated,
    /// The request came through an ungated command; anyone may issue it.
    Ungated,
}

/// One request to run untrusted source text.
///
/// Invariant: `source` must be non-empty after trimming. The gateway
/// rejects violations with [`crate::FailureKind::Validation`] before any
/// execution unit is constructed.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// The raw, untrusted source text.
    pub source: String,
    /// How to construct and drive the execution unit.
    pub mode: ExecMode,
    /// Trust level attached by the (already-authorized) caller.
    pub trust: TrustLevel,
}

impl ExecutionRequest {
    /// Create a request with the given mode and `Ungated` trust.
    pub fn new(source: impl Into<String>, mode: ExecMode) -> Self {
        Self {
            source: source.into(),
            mode,
            trust: TrustLevel::Ungated,
        }
    }

    /// Set the trust level.
    #[must_use]
    pub fn with_trust(mut self, trust: TrustLevel) -> Self {
        self.trust = trust;
        self
    }

    /// Whether the source text is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_covers_whitespace() {
        assert!(ExecutionRequest::new("", ExecMode::Sync).is_blank());
        assert!(ExecutionRequest::new("  \n\t ", ExecMode::Async).is_blank());
        assert!(!ExecutionRequest::new("1 + 1", ExecMode::Sync).is_blank());
    }

    #[test]
    fn trust_defaults_to_ungated() {
        let req = ExecutionRequest::new("x", ExecMode::Sync);
        assert_eq!(req.trust, TrustLevel::Ungated);

        let req = req.with_trust(TrustLevel::Gated);
        assert_eq!(req.trust, TrustLevel::Gated);
    }
}
