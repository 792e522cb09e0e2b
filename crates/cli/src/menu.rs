//! Line-based interactive menu over an [`Inventory`].
//!
//! Generic over the reader/writer so tests can drive it with in-memory
//! buffers. End of input at any prompt ends the session cleanly.

use std::io::{BufRead, Write};

use anyhow::Context;

use stockroom_core::InventoryError;
use stockroom_inventory::{Inventory, Item};

const MENU: &str = "\
Inventory Menu:
1. Add item
2. Delete item
3. Search item
4. Find item location
5. View items by category
6. View items by general location
7. List categories
8. Export inventory (JSON)
9. Exit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Choice {
    Add,
    Delete,
    Search,
    Locate,
    ByCategory,
    ByLocation,
    Categories,
    Export,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        Some(match input.trim() {
            "1" => Self::Add,
            "2" => Self::Delete,
            "3" => Self::Search,
            "4" => Self::Locate,
            "5" => Self::ByCategory,
            "6" => Self::ByLocation,
            "7" => Self::Categories,
            "8" => Self::Export,
            "9" | "q" | "quit" | "exit" => Self::Exit,
            _ => return None,
        })
    }
}

/// Whether the session continues after a menu action.
enum Flow {
    Continue,
    Stop,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    inventory: Inventory,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, inventory: Inventory) -> Self {
        Self {
            input,
            output,
            inventory,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let Some(choice) = Choice::parse(&line) else {
                writeln!(self.output, "Invalid choice '{}'. Please try again.", line.trim())?;
                continue;
            };
            if let Flow::Stop = self.dispatch(choice)? {
                break;
            }
        }
        writeln!(self.output, "Goodbye.")?;
        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> anyhow::Result<Flow> {
        match choice {
            Choice::Add => self.add(),
            Choice::Delete => self.delete(),
            Choice::Search => self.search(),
            Choice::Locate => self.locate(),
            Choice::ByCategory => self.by_category(),
            Choice::ByLocation => self.by_location(),
            Choice::Categories => self.categories().map(|()| Flow::Continue),
            Choice::Export => self.export().map(|()| Flow::Continue),
            Choice::Exit => Ok(Flow::Stop),
        }
    }

    /// Print `label`, read one line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.prompt("Enter item name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(raw_quantity) = self.prompt("Enter quantity: ")? else {
            return Ok(Flow::Stop);
        };
        let Ok(quantity) = raw_quantity.parse::<i64>() else {
            writeln!(
                self.output,
                "Invalid quantity '{raw_quantity}'. Please enter a whole number."
            )?;
            return Ok(Flow::Continue);
        };
        let Some(general) = self.prompt("Enter general location: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(specific) = self.prompt("Enter specific location: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Stop);
        };

        match self
            .inventory
            .add(Item::new(name.clone(), quantity, general, specific, category))
        {
            Ok(()) => writeln!(self.output, "Item '{name}' added successfully.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.prompt("Enter item name to delete: ")? else {
            return Ok(Flow::Stop);
        };
        match self.inventory.remove(&name) {
            Ok(_) => writeln!(self.output, "Item '{name}' deleted successfully.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.prompt("Enter item name to search: ")? else {
            return Ok(Flow::Stop);
        };
        let found = match self.inventory.find(&name) {
            Ok(item) => {
                let out = &mut self.output;
                writeln!(out, "Item found:")?;
                writeln!(out, "Name: {}", item.name())?;
                writeln!(out, "Quantity: {}", item.quantity())?;
                writeln!(out, "General Location: {}", item.general_location())?;
                writeln!(out, "Specific Location: {}", item.specific_location())?;
                writeln!(out, "Category: {}", item.category())?;
                true
            }
            Err(err) => {
                writeln!(self.output, "{err}")?;
                false
            }
        };

        if !found {
            // Offer to browse a category instead.
            let Some(category) = self.prompt("Enter a category to browse (blank to skip): ")?
            else {
                return Ok(Flow::Stop);
            };
            if !category.is_empty() {
                writeln!(self.output, "Here are items in the '{category}' category:")?;
                self.print_category(&category)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn locate(&mut self) -> anyhow::Result<Flow> {
        let Some(name) = self.prompt("Enter item name to locate: ")? else {
            return Ok(Flow::Stop);
        };
        match self.inventory.locate(&name) {
            Ok(loc) => {
                writeln!(self.output, "Item '{name}' is located at:")?;
                writeln!(self.output, "General Location: {}", loc.general)?;
                writeln!(self.output, "Specific Location: {}", loc.specific)?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn by_category(&mut self) -> anyhow::Result<Flow> {
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Stop);
        };
        self.print_category(&category)?;
        Ok(Flow::Continue)
    }

    fn print_category(&mut self, category: &str) -> anyhow::Result<()> {
        match self.inventory.list_by_category(category) {
            Ok(items) if items.is_empty() => {
                writeln!(self.output, "No items found in category '{category}'.")?;
            }
            Ok(items) => {
                writeln!(self.output, "Items in category '{category}':")?;
                for item in items {
                    writeln!(
                        self.output,
                        "- Name: {}, Quantity: {}, General Location: {}, Specific Location: {}",
                        item.name(),
                        item.quantity(),
                        item.general_location(),
                        item.specific_location()
                    )?;
                }
            }
            Err(err @ InventoryError::CategoryNotFound(_)) => writeln!(self.output, "{err}")?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn by_location(&mut self) -> anyhow::Result<Flow> {
        let Some(location) = self.prompt("Enter general location: ")? else {
            return Ok(Flow::Stop);
        };
        let items = self.inventory.list_by_location(&location);
        if items.is_empty() {
            writeln!(self.output, "No items found in general location '{location}'.")?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output, "Items in general location '{location}':")?;
        for item in items {
            writeln!(
                self.output,
                "- Name: {}, Category: {}, Specific Location: {}, Quantity: {}",
                item.name(),
                item.category(),
                item.specific_location(),
                item.quantity()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn categories(&mut self) -> anyhow::Result<()> {
        let categories: Vec<&str> = self.inventory.categories().collect();
        if categories.is_empty() {
            writeln!(self.output, "No categories yet.")?;
            return Ok(());
        }
        writeln!(self.output, "Categories:")?;
        for category in categories {
            writeln!(self.output, "- {category}")?;
        }
        Ok(())
    }

    fn export(&mut self) -> anyhow::Result<()> {
        let json = self
            .inventory
            .export_json()
            .context("failed to serialize inventory")?;
        writeln!(self.output, "{json}")?;
        Ok(())
    }
}
