//! Category registry: category name -> member item names.
//!
//! The registry never owns items. It stores names, which the inventory
//! resolves through the primary index.

use stockroom_index::ChainedHashTable;

use crate::item::Item;

/// Categories in first-seen order, each with its members in add order.
///
/// A category is present iff it has at least one member.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    order: Vec<String>,
    members: ChainedHashTable<String, Vec<String>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, item: &Item) {
        let category = item.category();
        if let Some(names) = self.members.search_mut(category) {
            names.push(item.name().to_string());
            return;
        }
        self.order.push(category.to_string());
        self.members
            .insert(category.to_string(), vec![item.name().to_string()]);
    }

    /// Drop `item` from its category, pruning the category once it is empty.
    ///
    /// Returns `false` if the item was not registered.
    pub fn unregister(&mut self, item: &Item) -> bool {
        let category = item.category();
        let Some(names) = self.members.search_mut(category) else {
            return false;
        };
        let Some(pos) = names.iter().position(|n| n == item.name()) else {
            return false;
        };

        names.remove(pos);
        if names.is_empty() {
            self.members.delete(category);
            self.order.retain(|c| c != category);
        }
        true
    }

    /// Member names of `category`, or `None` if the category is unknown.
    pub fn items_in_category(&self, category: &str) -> Option<&[String]> {
        self.members.search(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.members.contains_key(category)
    }

    /// Known categories in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(category, members)` in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order.iter().filter_map(|c| {
            self.members
                .search(c.as_str())
                .map(|names| (c.as_str(), names.as_slice()))
        })
    }

    pub fn category_count(&self) -> usize {
        self.order.len()
    }

    /// Categories holding a member list, whether or not they are in `order`.
    pub(crate) fn stored_category_count(&self) -> usize {
        self.members.len()
    }

    /// Store a member list without recording the category's position.
    #[cfg(test)]
    pub(crate) fn insert_unordered(&mut self, category: &str, names: Vec<String>) {
        self.members.insert(category.to_string(), names);
    }

    /// Total registered item names across all categories.
    pub fn item_count(&self) -> usize {
        self.members.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str) -> Item {
        Item::new(name, 1, "Tool Shed", "Shelf", "Tools")
    }

    fn supply(name: &str) -> Item {
        Item::new(name, 1, "Storage Room", "Rack", "Supplies")
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let mut reg = CategoryRegistry::new();
        reg.register(&supply("Paint"));
        reg.register(&tool("Hammer"));
        reg.register(&supply("Brush"));

        let cats: Vec<_> = reg.categories().collect();
        assert_eq!(cats, ["Supplies", "Tools"]);
        assert_eq!(
            reg.items_in_category("Supplies").unwrap(),
            ["Paint".to_string(), "Brush".to_string()]
        );
        assert_eq!(reg.item_count(), 3);
    }

    #[test]
    fn empty_category_is_pruned() {
        let mut reg = CategoryRegistry::new();
        let hammer = tool("Hammer");
        reg.register(&hammer);
        reg.register(&supply("Paint"));

        assert!(reg.unregister(&hammer));
        assert!(!reg.contains_category("Tools"));
        assert!(reg.items_in_category("Tools").is_none());
        assert_eq!(reg.categories().collect::<Vec<_>>(), ["Supplies"]);
        assert_eq!(reg.category_count(), 1);
    }

    #[test]
    fn unregister_unknown_item_is_false() {
        let mut reg = CategoryRegistry::new();
        reg.register(&tool("Hammer"));
        assert!(!reg.unregister(&tool("Wrench")));
        assert!(!reg.unregister(&supply("Paint")));
        assert_eq!(reg.item_count(), 1);
    }

    #[test]
    fn recreated_category_moves_to_the_end() {
        let mut reg = CategoryRegistry::new();
        let hammer = tool("Hammer");
        reg.register(&hammer);
        reg.register(&supply("Paint"));
        reg.unregister(&hammer);
        reg.register(&tool("Drill"));

        assert_eq!(reg.categories().collect::<Vec<_>>(), ["Supplies", "Tools"]);
    }
}
