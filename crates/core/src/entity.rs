//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Inventory records are keyed by name, so the identifier is whatever the
/// primary index stores them under.
pub trait Entity {
    /// Identifier used as the primary index key.
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
