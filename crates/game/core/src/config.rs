/// Inventory configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Maximum number of items the store may hold across all compartments.
    pub max_capacity: usize,
}

impl InventoryConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self { max_capacity }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
