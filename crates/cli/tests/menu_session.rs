use std::io::Cursor;

use stockroom_cli::Menu;
use stockroom_inventory::{Inventory, demo};

fn run_session(inventory: Inventory, script: &str) -> (String, Inventory) {
    let mut output = Vec::new();
    let mut menu = Menu::new(Cursor::new(script.as_bytes()), &mut output, inventory);
    menu.run().unwrap();
    let inventory = menu.into_inventory();
    (String::from_utf8(output).unwrap(), inventory)
}

#[test]
fn add_search_and_delete() {
    let script = "\
1
Screwdriver
50
Tool Shed
Shelf A
Tools
1
Screwdriver
10
Garage
Corner
Tools
3
Screwdriver
2
Screwdriver
3
Screwdriver

9
";
    let (out, inv) = run_session(Inventory::new(), script);

    assert!(out.contains("Item 'Screwdriver' added successfully."));
    assert!(out.contains("Item 'Screwdriver' already exists."));
    assert!(out.contains("Item found:\nName: Screwdriver\nQuantity: 50\n"));
    assert!(out.contains("Item 'Screwdriver' deleted successfully."));
    assert!(out.contains("Item 'Screwdriver' not found."));
    assert!(out.ends_with("Goodbye.\n"));
    assert!(inv.is_empty());
}

#[test]
fn category_and_location_views() {
    let mut inv = Inventory::new();
    demo::seed(&mut inv).unwrap();

    let script = "5\nTools\n5\nToys\n6\nGarage\n6\nAttic\n4\nPaint\n7\n";
    let (out, _) = run_session(inv, script);

    assert!(out.contains(
        "Items in category 'Tools':\n\
         - Name: Screwdriver, Quantity: 50, General Location: Tool Shed, Specific Location: Shelf A\n\
         - Name: Hammer, Quantity: 30, General Location: Tool Shed, Specific Location: Shelf B\n"
    ));
    assert!(out.contains("Category 'Toys' does not exist."));
    assert!(out.contains(
        "Items in general location 'Garage':\n\
         - Name: Ladder, Category: Equipment, Specific Location: Corner, Quantity: 5\n"
    ));
    assert!(out.contains("No items found in general location 'Attic'."));
    assert!(out.contains(
        "Item 'Paint' is located at:\nGeneral Location: Storage Room\nSpecific Location: Rack 3\n"
    ));
    assert!(out.contains("Categories:\n- Tools\n- Supplies\n- Equipment\n"));
    // Input ran out without choosing Exit.
    assert!(out.ends_with("Goodbye.\n"));
}

#[test]
fn missing_item_offers_category_listing() {
    let mut inv = Inventory::new();
    demo::seed(&mut inv).unwrap();

    let (out, _) = run_session(inv, "3\nChainsaw\nTools\n9\n");
    assert!(out.contains("Item 'Chainsaw' not found."));
    assert!(out.contains("Here are items in the 'Tools' category:\nItems in category 'Tools':"));
}

#[test]
fn bad_input_is_reported_and_ignored() {
    let (out, inv) = run_session(Inventory::new(), "42\n1\nHammer\nthirty\n9\n");
    assert!(out.contains("Invalid choice '42'. Please try again."));
    assert!(out.contains("Invalid quantity 'thirty'. Please enter a whole number."));
    assert!(inv.is_empty());
}

#[test]
fn export_prints_json() {
    let mut inv = Inventory::new();
    demo::seed(&mut inv).unwrap();

    let (out, _) = run_session(inv, "8\n9\n");
    assert!(out.contains("\"size\": 7"));
    assert!(out.contains("\"name\": \"Ladder\""));
}
