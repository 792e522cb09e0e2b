//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable by the caller: the menu layer reports it and
/// carries on. None of them leave the inventory partially mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An add was attempted for a name that is already indexed.
    #[error("Item '{0}' already exists.")]
    DuplicateKey(String),

    /// A lookup, locate or delete targeted a name that is not indexed.
    #[error("Item '{0}' not found.")]
    NotFound(String),

    /// A category view targeted a category with no items.
    #[error("Category '{0}' does not exist.")]
    CategoryNotFound(String),

    /// The index and the category registry disagree.
    #[error("inventory inconsistent: {0}")]
    Inconsistent(String),

    /// A writer panicked while holding the shared inventory lock.
    #[error("inventory lock poisoned")]
    LockPoisoned,
}

impl InventoryError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateKey(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn category_not_found(category: impl Into<String>) -> Self {
        Self::CategoryNotFound(category.into())
    }

    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::Inconsistent(msg.into())
    }

    /// `true` for the "absent target" family (`NotFound`, `CategoryNotFound`).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::CategoryNotFound(_))
    }
}
