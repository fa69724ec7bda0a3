#![deny(missing_docs)]
//! # scriptgate — umbrella crate
//!
//! Provides a single import surface for the scriptgate workspace.
//! Re-exports the member crates behind feature flags, plus a `prelude`
//! for the happy path: build a gateway over a store and a sink, wrap it
//! in a gated command, hand the registry to the host.

#[cfg(feature = "core")]
pub use scriptgate_command;
#[cfg(feature = "core")]
pub use scriptgate_core;
#[cfg(feature = "data")]
pub use scriptgate_data;
#[cfg(feature = "core")]
pub use scriptgate_engine;
#[cfg(feature = "store-fs")]
pub use scriptgate_store_fs;
#[cfg(feature = "store-memory")]
pub use scriptgate_store_memory;

/// Happy-path imports for wiring a gateway to a host.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use scriptgate_core::{
        Capabilities, ExecMode, ExecutionOutcome, ExecutionRequest, FailureKind, KeyedStore,
        Table, TrustLevel, VariableSink,
    };

    #[cfg(feature = "core")]
    pub use scriptgate_engine::{GatewayConfig, ScriptGateway};

    #[cfg(feature = "core")]
    pub use scriptgate_command::{
        CallerTrust, Command, CommandRegistry, MemorySink, RunScriptCommand,
    };

    #[cfg(feature = "data")]
    pub use scriptgate_data::{MoveCache, MoveRecord, build_move_cache, load_batch};

    #[cfg(feature = "store-fs")]
    pub use scriptgate_store_fs::FsStore;

    #[cfg(feature = "store-memory")]
    pub use scriptgate_store_memory::MemoryStore;
}
