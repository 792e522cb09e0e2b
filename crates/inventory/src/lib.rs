//! Inventory domain module.
//!
//! Items are indexed by name in a [`stockroom_index::ChainedHashTable`] and
//! grouped by category in a [`CategoryRegistry`]. [`Inventory`] owns both and
//! keeps them consistent on every mutation. This crate is pure domain logic
//! (no IO).

pub mod demo;
pub mod inventory;
pub mod item;
pub mod registry;
pub mod shared;

pub use inventory::{Inventory, Snapshot};
pub use item::{Item, Location};
pub use registry::CategoryRegistry;
pub use shared::SharedInventory;
