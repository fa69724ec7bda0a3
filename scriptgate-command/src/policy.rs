//! Trust gating — who may invoke a gated command.

use crate::command::Command;

/// The trust the host attributes to the caller of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerTrust {
    /// The caller holds the host's elevated trust flag.
    Elevated,
    /// An ordinary caller.
    Standard,
}

/// What a policy decides about one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Let the command run.
    Allow,
    /// Refuse the dispatch before the command runs.
    Deny {
        /// Why the dispatch was refused.
        reason: String,
    },
}

/// Decides whether a caller may invoke a command.
///
/// Checked by the registry before the command's handler runs, so a
/// denial has no side effects. Swap the policy to change what gating
/// means without touching commands or the gateway.
pub trait TrustPolicy: Send + Sync {
    /// Check one dispatch.
    fn check(&self, command: &dyn Command, caller: CallerTrust) -> PolicyDecision;
}

/// The default policy: gated commands require elevated trust, ungated
/// commands run for anyone.
pub struct GatePolicy;

impl TrustPolicy for GatePolicy {
    fn check(&self, command: &dyn Command, caller: CallerTrust) -> PolicyDecision {
        if command.gated() && caller != CallerTrust::Elevated {
            PolicyDecision::Deny {
                reason: "requires elevated trust".into(),
            }
        } else {
            PolicyDecision::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed {
        gated: bool,
    }

    #[async_trait]
    impl Command for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn help(&self) -> &str {
            ""
        }
        fn gated(&self) -> bool {
            self.gated
        }
        async fn call(&self, _args: &str) -> String {
            "ok".into()
        }
    }

    #[test]
    fn gated_needs_elevated() {
        let cmd = Fixed { gated: true };
        assert_eq!(
            GatePolicy.check(&cmd, CallerTrust::Elevated),
            PolicyDecision::Allow
        );
        assert!(matches!(
            GatePolicy.check(&cmd, CallerTrust::Standard),
            PolicyDecision::Deny { .. }
        ));
    }

    #[test]
    fn ungated_runs_for_anyone() {
        let cmd = Fixed { gated: false };
        assert_eq!(
            GatePolicy.check(&cmd, CallerTrust::Standard),
            PolicyDecision::Allow
        );
    }
}
