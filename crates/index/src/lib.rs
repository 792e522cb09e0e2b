//! `stockroom-index` — the primary name index.
//!
//! A separately-chained hash table with a deterministic hasher and a doubling
//! resize policy. Pure in-memory data structure: no IO, no locking.

pub mod chain;
pub mod config;
pub mod error;
pub mod hasher;
pub mod table;

pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, TableConfig};
pub use error::IndexError;
pub use hasher::{DefaultBuildHasher, FxBuildHasher};
pub use table::ChainedHashTable;
