//! Demo data: a small tool shed / storage room inventory.

use stockroom_core::InventoryResult;

use crate::inventory::Inventory;
use crate::item::Item;

/// `(name, quantity, general location, specific location, category)`
pub const DEMO_ITEMS: &[(&str, i64, &str, &str, &str)] = &[
    ("Screwdriver", 50, "Tool Shed", "Shelf A", "Tools"),
    ("Hammer", 30, "Tool Shed", "Shelf B", "Tools"),
    ("Paint", 20, "Storage Room", "Rack 3", "Supplies"),
    ("Wrench", 15, "Tool Shed", "Shelf C", "Tools"),
    ("Drill", 10, "Tool Shed", "Shelf D", "Tools"),
    ("Brush", 25, "Storage Room", "Rack 2", "Supplies"),
    ("Ladder", 5, "Garage", "Corner", "Equipment"),
];

pub fn demo_items() -> impl Iterator<Item = Item> {
    DEMO_ITEMS
        .iter()
        .map(|&(name, qty, general, specific, category)| {
            Item::new(name, qty, general, specific, category)
        })
}

/// Add every demo item. Stops at the first rejected add.
pub fn seed(inventory: &mut Inventory) -> InventoryResult<usize> {
    let mut added = 0;
    for item in demo_items() {
        inventory.add(item)?;
        added += 1;
    }
    Ok(added)
}
