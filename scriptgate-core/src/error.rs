//! Error types for each boundary.

use thiserror::Error;

/// Keyed-store errors.
///
/// Backend failures are recovered locally by callers (a batch omits the
/// key and carries on); they are never fatal to an execution.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not open or create the table.
    #[error("open failed for {table}: {message}")]
    OpenFailed {
        /// The table that could not be opened.
        table: String,
        /// Backend message.
        message: String,
    },

    /// A read failed for a reason other than the key being absent.
    #[error("read failed: {0}")]
    ReadFailed(String),

    /// A write or delete failed.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// A stored value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Command dispatch errors.
///
/// These never escape the dispatch surface — they are rendered into the
/// `Error: <message>` string the host pipeline expects.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    /// No command is registered under the given name.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// A gated command was invoked without elevated trust.
    #[error("command '{command}' denied: {reason}")]
    PermissionDenied {
        /// The command that was refused.
        command: String,
        /// Why the policy refused it.
        reason: String,
    },

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
