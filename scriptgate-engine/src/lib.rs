#![deny(missing_docs)]
//! The script execution gateway.
//!
//! Accepts untrusted source text, runs it against a closed capability
//! surface under hard engine limits, and reports a normalized
//! [`ExecutionOutcome`](scriptgate_core::ExecutionOutcome). A failure in
//! the executed text never crashes or errors out of the caller — it comes
//! back as data.
//!
//! One request is one full traversal: a fresh engine and scope are built
//! per request and discarded afterwards, so no state leaks between calls.

pub mod config;
pub mod gateway;
mod unit;

pub use config::GatewayConfig;
pub use gateway::ScriptGateway;
