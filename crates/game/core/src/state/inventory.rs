//! Player inventory storage.
//!
//! Items live in three compartments, one per [`ItemCategory`]. Each
//! compartment keeps insertion order. Lookups by id scan weapons, then armor,
//! then generic items and stop at the first match.

use std::io;

use crate::config::InventoryConfig;
use crate::error::InventoryError;
use crate::report::CompartmentReport;
use crate::state::{Item, ItemCategory, ItemId};

/// Capacity-bounded inventory of a single player character.
///
/// Invariant: `len() <= capacity()` after every operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryStore {
    compartments: [Vec<Item>; 3],
    max_capacity: usize,
}

impl InventoryStore {
    pub fn new(max_capacity: usize) -> Self {
        Self {
            compartments: [Vec::new(), Vec::new(), Vec::new()],
            max_capacity,
        }
    }

    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::new(config.max_capacity)
    }

    pub fn capacity(&self) -> usize {
        self.max_capacity
    }

    /// Total number of items across all compartments.
    pub fn len(&self) -> usize {
        self.compartments.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.compartments.iter().all(Vec::is_empty)
    }

    /// Number of items that can still be added.
    pub fn remaining(&self) -> usize {
        self.max_capacity.saturating_sub(self.len())
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.max_capacity
    }

    /// Items in one compartment, in insertion order.
    pub fn items(&self, category: ItemCategory) -> &[Item] {
        &self.compartments[category.index()]
    }

    /// All items, compartment by compartment in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.compartments.iter().flatten()
    }

    /// First item with `id` in lookup order.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        let (category, index) = self.locate(id)?;
        self.compartments[category.index()].get(index)
    }

    /// Adds `item` to the compartment matching its category.
    ///
    /// Returns the compartment it was placed in. When the store is full the
    /// item is handed back inside [`InventoryError::Full`] and nothing changes.
    /// Duplicate ids are accepted.
    pub fn add(&mut self, item: Item) -> Result<ItemCategory, InventoryError> {
        if self.is_full() {
            tracing::warn!(
                item = %item.name,
                id = %item.id,
                capacity = self.max_capacity,
                "inventory full, rejecting item"
            );
            return Err(InventoryError::Full {
                capacity: self.max_capacity,
                item,
            });
        }

        let category = item.category;
        tracing::debug!(item = %item.name, id = %item.id, %category, "item added");
        self.compartments[category.index()].push(item);
        Ok(category)
    }

    /// Removes the first item with `id`. Missing ids are a no-op.
    pub fn remove_by_id(&mut self, id: ItemId) -> Option<Item> {
        let Some((category, index)) = self.locate(id) else {
            tracing::debug!(%id, "remove: no such item");
            return None;
        };

        let removed = self.compartments[category.index()].remove(index);
        tracing::debug!(item = %removed.name, %id, %category, "item removed");
        Some(removed)
    }

    /// Overwrites the quantity of the first item with `id`.
    ///
    /// Returns the previous quantity, or `None` (and changes nothing) when no
    /// item matches.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: u32) -> Option<u32> {
        let Some((category, index)) = self.locate(id) else {
            tracing::debug!(%id, "update: no such item");
            return None;
        };

        let item = &mut self.compartments[category.index()][index];
        let previous = core::mem::replace(&mut item.quantity, new_quantity);
        tracing::debug!(item = %item.name, %id, previous, new_quantity, "quantity updated");
        Some(previous)
    }

    /// Builds the listing for the compartment named by `selector`.
    pub fn report(&self, selector: &str) -> Result<CompartmentReport<'_>, InventoryError> {
        let category = selector
            .parse::<ItemCategory>()
            .map_err(|_| InventoryError::InvalidCompartment(selector.to_owned()))?;

        Ok(CompartmentReport::new(category, self.items(category)))
    }

    /// Writes the listing for `selector` to `out`.
    ///
    /// An unknown selector writes the `Invalid compartment.` diagnostic
    /// instead. Only I/O errors from `out` are returned.
    pub fn list_category<W: io::Write>(&self, selector: &str, out: &mut W) -> io::Result<()> {
        match self.report(selector) {
            Ok(report) => write!(out, "{report}"),
            Err(err) => {
                tracing::debug!(selector, "listing rejected: unknown compartment");
                writeln!(out, "{err}")
            }
        }
    }

    fn locate(&self, id: ItemId) -> Option<(ItemCategory, usize)> {
        ItemCategory::ALL.into_iter().find_map(|category| {
            self.compartments[category.index()]
                .iter()
                .position(|item| item.id == id)
                .map(|index| (category, index))
        })
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::from_config(&InventoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> Item {
        Item::new(1, "Sword", ItemCategory::Weapon, 1)
    }

    fn shield() -> Item {
        Item::new(2, "Shield", ItemCategory::Armor, 1)
    }

    fn potion() -> Item {
        Item::new(3, "Health Potion", ItemCategory::Generic, 5)
    }

    fn bow() -> Item {
        Item::new(4, "Bow", ItemCategory::Weapon, 1)
    }

    fn stocked() -> InventoryStore {
        let mut store = InventoryStore::new(10);
        for item in [sword(), shield(), potion(), bow()] {
            store.add(item).unwrap();
        }
        store
    }

    fn listing(store: &InventoryStore, selector: &str) -> String {
        let mut out = Vec::new();
        store.list_category(selector, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_places_items_by_category() {
        let store = stocked();

        assert_eq!(store.len(), 4);
        assert_eq!(store.items(ItemCategory::Weapon), &[sword(), bow()]);
        assert_eq!(store.items(ItemCategory::Armor), &[shield()]);
        assert_eq!(store.items(ItemCategory::Generic), &[potion()]);
    }

    #[test]
    fn add_returns_compartment() {
        let mut store = InventoryStore::new(2);
        assert_eq!(store.add(shield()), Ok(ItemCategory::Armor));
        assert_eq!(store.add(potion()), Ok(ItemCategory::Generic));
    }

    #[test]
    fn add_rejects_when_full() {
        let mut store = InventoryStore::new(1);
        store.add(sword()).unwrap();

        let err = store.add(potion()).unwrap_err();

        assert_eq!(
            err,
            InventoryError::Full {
                capacity: 1,
                item: potion()
            }
        );
        assert_eq!(store.len(), 1);
        assert!(store.items(ItemCategory::Generic).is_empty());
        assert_eq!(store.items(ItemCategory::Weapon), &[sword()]);
    }

    #[test]
    fn zero_capacity_store_is_always_full() {
        let mut store = InventoryStore::new(0);
        assert!(store.is_full());
        assert!(store.add(sword()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_ids_are_accepted() {
        let mut store = InventoryStore::new(3);
        store.add(sword()).unwrap();
        store.add(Item::new(1, "Plate", ItemCategory::Armor, 1)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find(ItemId(1)), Some(&sword()));
    }

    #[test]
    fn remove_searches_weapons_before_armor() {
        let mut store = InventoryStore::new(3);
        store.add(Item::new(9, "Helm", ItemCategory::Armor, 1)).unwrap();
        store.add(Item::new(9, "Axe", ItemCategory::Weapon, 1)).unwrap();

        let removed = store.remove_by_id(ItemId(9)).unwrap();

        assert_eq!(removed.name, "Axe");
        assert!(store.items(ItemCategory::Weapon).is_empty());
        assert_eq!(store.items(ItemCategory::Armor).len(), 1);
    }

    #[test]
    fn remove_takes_first_match_within_compartment() {
        let mut store = InventoryStore::new(3);
        store.add(Item::new(5, "Arrow", ItemCategory::Generic, 20)).unwrap();
        store.add(Item::new(5, "Bolt", ItemCategory::Generic, 10)).unwrap();

        assert_eq!(store.remove_by_id(ItemId(5)).unwrap().name, "Arrow");
        assert_eq!(store.items(ItemCategory::Generic)[0].name, "Bolt");
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut store = stocked();
        let before = store.clone();

        assert_eq!(store.remove_by_id(ItemId(42)), None);
        assert_eq!(store, before);
    }

    #[test]
    fn remove_frees_capacity() {
        let mut store = InventoryStore::new(1);
        store.add(sword()).unwrap();
        store.remove_by_id(ItemId(1)).unwrap();

        assert_eq!(store.remaining(), 1);
        assert!(store.add(bow()).is_ok());
    }

    #[test]
    fn update_overwrites_quantity_only() {
        let mut store = stocked();

        assert_eq!(store.update_quantity(ItemId(3), 0), Some(5));

        let potion = store.find(ItemId(3)).unwrap();
        assert_eq!(potion.quantity, 0);
        assert_eq!(potion.name, "Health Potion");
        assert_eq!(potion.category, ItemCategory::Generic);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut store = stocked();
        let before = store.clone();

        assert_eq!(store.update_quantity(ItemId(99), 7), None);
        assert_eq!(store, before);
    }

    #[test]
    fn listing_prints_header_and_items() {
        let store = stocked();

        assert_eq!(
            listing(&store, "weapons"),
            "weapons:\nSword (ID: 1) - Quantity: 1\nBow (ID: 4) - Quantity: 1\n"
        );
    }

    #[test]
    fn listing_empty_compartment_prints_header_only() {
        let store = InventoryStore::new(5);
        assert_eq!(listing(&store, "armor"), "armor:\n");
    }

    #[test]
    fn listing_unknown_selector_prints_diagnostic() {
        let store = stocked();
        assert_eq!(listing(&store, "potions"), "Invalid compartment.\n");
    }

    #[test]
    fn report_rejects_unknown_selector() {
        let store = stocked();
        assert_eq!(
            store.report("Weapons").unwrap_err(),
            InventoryError::InvalidCompartment("Weapons".into())
        );
    }

    #[test]
    fn iter_walks_compartments_in_lookup_order() {
        let store = stocked();
        let ids: Vec<_> = store.iter().map(|item| item.id.0).collect();
        assert_eq!(ids, vec![1, 4, 2, 3]);
    }

    #[test]
    fn default_store_uses_config_capacity() {
        let store = InventoryStore::default();
        assert_eq!(store.capacity(), InventoryConfig::DEFAULT_MAX_CAPACITY);
        assert_eq!(store.remaining(), 10);
    }
}
