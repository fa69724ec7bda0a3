//! # scriptgate-core — protocol traits for the script execution gateway
//!
//! This crate defines the boundary types and collaborator traits that the
//! rest of the workspace implements.
//!
//! | Boundary | Types | What it does |
//! |----------|-------|--------------|
//! | Execution | [`ExecutionRequest`], [`ExecutionOutcome`] | One request in, one normalized outcome out |
//! | Storage | [`KeyedStore`], [`Table`] | Async key/value lookups the executed unit may issue |
//! | Variables | [`VariableSink`] | The result channel between script and host |
//! | Capabilities | [`Capabilities`] | The closed set of host objects a unit may touch |
//!
//! ## Design Principle
//!
//! The gateway contract is outcome-defined, not mechanism-defined.
//! `execute` means "run this source text and tell me how it settled" — not
//! "call eval" or "spawn a thread." Failures in the executed text are data
//! ([`ExecutionOutcome::Failure`]), never panics and never errors that
//! escape to the caller's pipeline.
//!
//! ## Dependency Notes
//!
//! Script values and stored records are `serde_json::Value`. JSON is the
//! interchange format the host scripting layer already speaks, and an
//! opaque dynamic value type keeps the traits object-safe.

#![deny(missing_docs)]

pub mod capability;
pub mod error;
pub mod outcome;
pub mod request;
pub mod sink;
pub mod store;

// Re-exports for convenience
pub use capability::{Capabilities, StoreCapability};
pub use error::{CommandError, StoreError};
pub use outcome::{ExecutionOutcome, FailureKind};
pub use request::{ExecMode, ExecutionRequest, TrustLevel};
pub use sink::VariableSink;
pub use store::{KeyedStore, Table};
