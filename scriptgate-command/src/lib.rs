#![deny(missing_docs)]
//! Command registry and trust gating for the scriptgate dispatch surface.
//!
//! The host hands each input line to [`CommandRegistry::dispatch`] and
//! always gets a string back — command results on success, `Error: <msg>`
//! on anything else. The registry is an explicit mapping built once at
//! startup and passed to the host by reference; nothing hangs off ambient
//! global state.
//!
//! Gating is enforced here, before the gateway is invoked: the
//! [`TrustPolicy`] refuses a gated command for callers without elevated
//! trust, so an unauthorized request never constructs an execution unit.

pub mod command;
pub mod policy;
pub mod registry;
pub mod run_script;
pub mod sink;

pub use command::Command;
pub use policy::{CallerTrust, GatePolicy, PolicyDecision, TrustPolicy};
pub use registry::CommandRegistry;
pub use run_script::RunScriptCommand;
pub use sink::MemorySink;
