#![deny(missing_docs)]
//! Move record data model and tolerant batch loading.
//!
//! The keyed store holds one immutable record per move id, refreshed
//! wholesale from a static dataset. Callers hand the loader an ordered
//! list of keys; it issues every lookup concurrently, waits for all of
//! them to settle, and omits anything missing or broken rather than
//! aborting the batch. A batch of zero keys resolves immediately.

pub mod cache;
pub mod loader;
pub mod record;
pub mod subject;

pub use cache::{MoveCache, build_move_cache};
pub use loader::load_batch;
pub use record::{Accuracy, MoveRecord};
pub use subject::ActiveSubject;
