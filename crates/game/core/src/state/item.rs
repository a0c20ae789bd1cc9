//! Item-related state types.
//!
//! This module contains foundational item types:
//! - ItemId: Caller-assigned item identifier
//! - ItemCategory: The compartment an item belongs to
//! - Item: An item owned by the inventory

use core::fmt;

/// Caller-assigned item identifier.
///
/// Uniqueness is a convention of the caller; the store never checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Item classification, one per inventory compartment.
///
/// The string form is the compartment selector used by listings
/// (`weapons`, `armor`, `items`). Parsing is case-sensitive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum ItemCategory {
    /// Swords, bows, and anything else wielded.
    #[strum(serialize = "weapons")]
    Weapon,
    /// Worn protection.
    #[strum(serialize = "armor")]
    Armor,
    /// Everything else (potions, keys, materials).
    #[strum(serialize = "items")]
    Generic,
}

impl ItemCategory {
    /// All categories in lookup order.
    pub const ALL: [ItemCategory; 3] = [Self::Weapon, Self::Armor, Self::Generic];

    /// Compartment label printed as a listing header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weapon => "weapons",
            Self::Armor => "armor",
            Self::Generic => "items",
        }
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::Weapon => 0,
            Self::Armor => 1,
            Self::Generic => 2,
        }
    }
}

/// An item held by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    pub quantity: u32,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, category: ItemCategory, quantity: u32) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            category,
            quantity,
        }
    }
}

/// Renders the listing line `<name> (ID: <id>) - Quantity: <qty>`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}) - Quantity: {}",
            self.name, self.id, self.quantity
        )
    }
}
