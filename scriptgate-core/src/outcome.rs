//! The normalized result of one execution — success with a value, or a
//! classified failure with a message. Never both.

use serde::{Deserialize, Serialize};

/// Why an execution failed.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request was rejected before execution (blank source text).
    Validation,
    /// The execution unit raised an error while compiling or running.
    Execution,
    /// The caller's deadline elapsed; the in-flight unit was abandoned.
    /// Side effects it already performed are not undone.
    Timeout,
}

/// How one execution settled.
///
/// Exactly one side is populated by construction — callers match, they
/// never have to check a status field against optional payloads.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionOutcome {
    /// The unit settled with a value.
    Success {
        /// The settled value. Units that produce nothing settle with
        /// `Value::Null`.
        value: serde_json::Value,
    },
    /// The unit was rejected, raised, or timed out.
    Failure {
        /// Classification of the failure.
        kind: FailureKind,
        /// The failure's message text, as raised.
        message: String,
    },
}

impl ExecutionOutcome {
    /// Construct a success outcome.
    pub fn success(value: serde_json::Value) -> Self {
        Self::Success { value }
    }

    /// Construct a failure outcome.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Render the outcome for the host's command pipe.
    ///
    /// Success: string values pipe bare (so a script returning `"hi"`
    /// pipes as `hi`, not `"hi"`), null pipes as the empty string, and
    /// everything else pipes as JSON text. Failure: `Error: <message>`.
    /// The pipe always receives a string, never an error.
    pub fn to_pipe_string(&self) -> String {
        match self {
            Self::Success { value } => match value {
                serde_json::Value::Null => String::new(),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            Self::Failure { message, .. } => format!("Error: {message}"),
        }
    }
}
