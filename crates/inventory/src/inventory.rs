//! Inventory aggregate: the name index plus the category registry.

use std::collections::HashSet;

use serde::Serialize;

use stockroom_core::{Entity, InventoryError, InventoryResult, ValueObject};
use stockroom_index::{ChainedHashTable, IndexError, TableConfig};

use crate::item::{Item, Location};
use crate::registry::CategoryRegistry;

/// Owns the primary index and the category registry.
///
/// Every mutation goes through [`Inventory::add`] or [`Inventory::remove`],
/// which update both structures before returning, so callers never see an
/// item indexed but unregistered (or the reverse).
#[derive(Debug, Default)]
pub struct Inventory {
    index: ChainedHashTable<String, Item>,
    registry: CategoryRegistry,
}

/// Serializable view of the whole inventory, items in registry order.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub capacity: usize,
    pub size: usize,
    pub categories: Vec<&'a str>,
    pub items: Vec<&'a Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Result<Self, IndexError> {
        Ok(Self {
            index: ChainedHashTable::with_config(config)?,
            registry: CategoryRegistry::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Bucket count of the name index.
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    pub fn index(&self) -> &ChainedHashTable<String, Item> {
        &self.index
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Add a new item. Rejects names that are already indexed without
    /// touching either structure.
    pub fn add(&mut self, item: Item) -> InventoryResult<()> {
        if self.index.contains_key(item.name()) {
            tracing::debug!(name = item.name(), "duplicate add rejected");
            return Err(InventoryError::duplicate(item.name()));
        }

        self.registry.register(&item);
        tracing::info!(
            name = item.name(),
            category = item.category(),
            quantity = item.quantity(),
            "item added"
        );
        self.index.insert(item.id().to_string(), item);
        Ok(())
    }

    /// Remove an item by name, returning it.
    pub fn remove(&mut self, name: &str) -> InventoryResult<Item> {
        let Some(item) = self.index.search(name) else {
            tracing::debug!(name, "remove of unknown item");
            return Err(InventoryError::not_found(name));
        };

        if !self.registry.unregister(item) {
            return Err(InventoryError::inconsistent(format!(
                "item '{name}' is indexed but not registered"
            )));
        }
        let item = self
            .index
            .remove(name)
            .ok_or_else(|| InventoryError::inconsistent(format!("item '{name}' vanished")))?;

        tracing::info!(name, category = item.category(), "item removed");
        Ok(item)
    }

    pub fn find(&self, name: &str) -> InventoryResult<&Item> {
        self.index
            .search(name)
            .ok_or_else(|| InventoryError::not_found(name))
    }

    pub fn locate(&self, name: &str) -> InventoryResult<Location> {
        self.view(name, Item::location)
    }

    /// Project the named item into an owned value object, so the result
    /// outlives any borrow (or lock guard) of the inventory.
    pub fn view<V: ValueObject>(
        &self,
        name: &str,
        project: impl FnOnce(&Item) -> V,
    ) -> InventoryResult<V> {
        self.find(name).map(project)
    }

    /// Items of `category` in the order they were added.
    pub fn list_by_category(&self, category: &str) -> InventoryResult<Vec<&Item>> {
        let names = self
            .registry
            .items_in_category(category)
            .ok_or_else(|| InventoryError::category_not_found(category))?;
        Ok(self.resolve(names).collect())
    }

    /// Items whose general location is `general_location`.
    ///
    /// Ordered by category (registry order), then by add order within the
    /// category. An empty result is not an error.
    pub fn list_by_location(&self, general_location: &str) -> Vec<&Item> {
        self.registry
            .iter()
            .flat_map(|(_, names)| self.resolve(names))
            .filter(|item| item.general_location() == general_location)
            .collect()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.registry.categories()
    }

    /// All items in index order (bucket, then chain).
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.index.values()
    }

    fn resolve<'a>(&'a self, names: &'a [String]) -> impl Iterator<Item = &'a Item> + 'a {
        names.iter().filter_map(|n| self.index.search(n.as_str()))
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            capacity: self.capacity(),
            size: self.len(),
            categories: self.categories().collect(),
            items: self
                .registry
                .iter()
                .flat_map(|(_, names)| self.resolve(names))
                .collect(),
        }
    }

    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Verify that the registry and the index describe the same item set.
    pub fn check_consistency(&self) -> InventoryResult<()> {
        let mut seen: HashSet<&str> = HashSet::new();

        for (category, names) in self.registry.iter() {
            if names.is_empty() {
                return Err(InventoryError::inconsistent(format!(
                    "category '{category}' is registered with no items"
                )));
            }
            for name in names {
                let item = self.index.search(name.as_str()).ok_or_else(|| {
                    InventoryError::inconsistent(format!(
                        "'{name}' is registered under '{category}' but not indexed"
                    ))
                })?;
                if item.category() != category {
                    return Err(InventoryError::inconsistent(format!(
                        "'{name}' has category '{}' but is registered under '{category}'",
                        item.category()
                    )));
                }
                if !seen.insert(name.as_str()) {
                    return Err(InventoryError::inconsistent(format!(
                        "'{name}' is registered more than once"
                    )));
                }
            }
        }

        if self.registry.iter().count() != self.registry.category_count()
            || self.registry.stored_category_count() != self.registry.category_count()
            || seen.len() != self.index.len()
            || self.index.iter().count() != self.index.len()
        {
            return Err(InventoryError::inconsistent(format!(
                "{} registered items vs {} indexed",
                seen.len(),
                self.index.len()
            )));
        }
        Ok(())
    }
}
