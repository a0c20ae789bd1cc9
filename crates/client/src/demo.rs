//! Fixed demonstration sequence exercising every store operation.
use std::io::{self, Write};

use inventory_core::{InventoryConfig, InventoryFault, InventoryStore, Item, ItemCategory, ItemId};

/// Items added at the start of the demo, in order.
pub fn starting_items() -> [Item; 4] {
    [
        Item::new(1, "Sword", ItemCategory::Weapon, 1),
        Item::new(2, "Shield", ItemCategory::Armor, 1),
        Item::new(3, "Health Potion", ItemCategory::Generic, 5),
        Item::new(4, "Bow", ItemCategory::Weapon, 1),
    ]
}

/// Runs the demo against a fresh store and writes every listing to `out`.
///
/// Rejected adds print their diagnostic and the sequence continues. Returns
/// the final store so callers can inspect it.
pub fn run<W: Write>(config: &InventoryConfig, out: &mut W) -> io::Result<InventoryStore> {
    let mut store = InventoryStore::from_config(config);
    tracing::info!(capacity = store.capacity(), "Starting inventory demo");

    for item in starting_items() {
        if let Err(err) = store.add(item) {
            tracing::warn!(code = err.error_code(), severity = err.severity().as_str(), "{err}");
            writeln!(out, "{err}")?;
        }
    }

    for category in ItemCategory::ALL {
        store.list_category(category.label(), out)?;
    }

    store.remove_by_id(ItemId(2));
    store.list_category("armor", out)?;

    store.update_quantity(ItemId(1), 2);
    store.list_category("weapons", out)?;

    tracing::info!(items = store.len(), "Inventory demo complete");
    Ok(store)
}
