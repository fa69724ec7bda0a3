//! The capability surface — the closed set of host objects an execution
//! unit may reach.
//!
//! Capabilities are passed into the unit's scope explicitly, never looked
//! up through ambient globals. What is absent here simply does not exist
//! from the script's point of view.

use crate::sink::VariableSink;
use crate::store::{KeyedStore, Table};
use std::sync::Arc;

/// A keyed-store capability: one backend plus the table the unit is
/// allowed to address. Units never name tables themselves.
#[derive(Clone)]
pub struct StoreCapability {
    /// The backend lookups are issued against.
    pub store: Arc<dyn KeyedStore>,
    /// The single table this unit may read.
    pub table: Table,
}

/// The fixed capability set granted to an execution unit.
///
/// Empty by default; the host grants exactly what the command needs.
#[derive(Clone, Default)]
pub struct Capabilities {
    /// Read access to one table of the keyed store, if granted.
    pub store: Option<StoreCapability>,
    /// The host variable channel, if granted.
    pub vars: Option<Arc<dyn VariableSink>>,
}

impl Capabilities {
    /// An empty capability set — the unit can compute but touch nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Grant read access to one table of a keyed store.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn KeyedStore>, table: Table) -> Self {
        self.store = Some(StoreCapability { store, table });
        self
    }

    /// Grant the host variable channel.
    #[must_use]
    pub fn with_vars(mut self, vars: Arc<dyn VariableSink>) -> Self {
        self.vars = Some(vars);
        self
    }
}
