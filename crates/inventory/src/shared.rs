//! Lock-guarded inventory for callers that share it across threads.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{InventoryError, InventoryResult, ValueObject};

use crate::inventory::Inventory;
use crate::item::{Item, Location};

/// One `RwLock` over the whole [`Inventory`], so the index and the registry
/// change together: a reader holds the same guard for both.
#[derive(Debug, Default)]
pub struct SharedInventory {
    inner: RwLock<Inventory>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: RwLock::new(inventory),
        }
    }

    fn read(&self) -> InventoryResult<RwLockReadGuard<'_, Inventory>> {
        self.inner.read().map_err(|_| InventoryError::LockPoisoned)
    }

    fn write(&self) -> InventoryResult<RwLockWriteGuard<'_, Inventory>> {
        self.inner.write().map_err(|_| InventoryError::LockPoisoned)
    }

    pub fn add(&self, item: Item) -> InventoryResult<()> {
        self.write()?.add(item)
    }

    pub fn remove(&self, name: &str) -> InventoryResult<Item> {
        self.write()?.remove(name)
    }

    pub fn find(&self, name: &str) -> InventoryResult<Item> {
        self.read()?.find(name).cloned()
    }

    pub fn locate(&self, name: &str) -> InventoryResult<Location> {
        self.view(name, Item::location)
    }

    /// Project the named item into a value object while holding the read lock.
    pub fn view<V: ValueObject>(
        &self,
        name: &str,
        project: impl FnOnce(&Item) -> V,
    ) -> InventoryResult<V> {
        self.read()?.view(name, project)
    }

    pub fn list_by_category(&self, category: &str) -> InventoryResult<Vec<Item>> {
        let inv = self.read()?;
        let items = inv.list_by_category(category)?;
        Ok(items.into_iter().cloned().collect())
    }

    pub fn list_by_location(&self, general_location: &str) -> InventoryResult<Vec<Item>> {
        let inv = self.read()?;
        Ok(inv
            .list_by_location(general_location)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn len(&self) -> InventoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// Run `f` against a consistent view of the inventory.
    pub fn with_read<T>(&self, f: impl FnOnce(&Inventory) -> T) -> InventoryResult<T> {
        Ok(f(&*self.read()?))
    }

    pub fn into_inner(self) -> InventoryResult<Inventory> {
        self.inner.into_inner().map_err(|_| InventoryError::LockPoisoned)
    }
}
