//! Durable storage and startup bootstrap.
//!
//! Budget data lives under two independent text-encoded keys in a
//! key-value store: `"budget"` and `"expenses"`. The [`Bootstrap`]
//! reads them exactly once at process start to build the store's
//! initial state; the presentation layer writes them back after
//! dispatches via [`Bootstrap::save`].
//!
//! Which store backs the bootstrap is a construction-time choice:
//! [`FileStore`] for real runs, [`MemoryStore`] for headless and test
//! contexts. No environment sniffing.

mod bootstrap;
mod kv;

pub use bootstrap::{Bootstrap, BUDGET_KEY, EXPENSES_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
