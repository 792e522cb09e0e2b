//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the index and the
//! inventory (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use value_object::ValueObject;
