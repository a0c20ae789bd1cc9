//! Console listings of inventory compartments.

use core::fmt;

use crate::state::{Item, ItemCategory};

/// Borrowed view of one compartment, rendered as
///
/// ```text
/// <label>:
/// <name> (ID: <id>) - Quantity: <qty>
/// ```
///
/// with one line per item in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompartmentReport<'a> {
    pub category: ItemCategory,
    pub items: &'a [Item],
}

impl<'a> CompartmentReport<'a> {
    pub fn new(category: ItemCategory, items: &'a [Item]) -> Self {
        Self { category, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for CompartmentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.category.label())?;
        for item in self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
