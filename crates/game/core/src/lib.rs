//! In-memory player inventory for a single game character.
//!
//! `inventory-core` defines the item model and the capacity-bounded
//! [`InventoryStore`], which sorts items into three compartments (weapons,
//! armor, generic items). Nothing here performs I/O except
//! [`InventoryStore::list_category`], which writes to a caller-supplied writer.
pub mod config;
pub mod error;
pub mod report;
pub mod state;

pub use config::InventoryConfig;
pub use error::{ErrorSeverity, InventoryError, InventoryFault};
pub use report::CompartmentReport;
pub use state::{InventoryStore, Item, ItemCategory, ItemId};
