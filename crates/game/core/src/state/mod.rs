//! Authoritative inventory state representation.
//!
//! This module owns the item types and the capacity-bounded store. Callers
//! hand items to [`InventoryStore`] and mutate them only through its methods.
pub mod inventory;
pub mod item;

pub use inventory::InventoryStore;
pub use item::{Item, ItemCategory, ItemId};
