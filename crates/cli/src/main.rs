use std::io;

use anyhow::Context;

use stockroom_cli::{Config, Menu};
use stockroom_inventory::{Inventory, demo};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env();
    let mut inventory =
        Inventory::with_config(config.table).context("failed to build the inventory index")?;

    if config.seed_demo {
        let added = demo::seed(&mut inventory)?;
        tracing::info!(items = added, "demo inventory loaded");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), inventory).run()
}
