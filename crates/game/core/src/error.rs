//! Error infrastructure for inventory-core.
//!
//! None of these errors are fatal to the caller. A full store and an unknown
//! compartment selector are both reported as values so the caller can decide
//! whether to print a diagnostic, retry, or ignore them. Lookups that miss
//! (remove, update) return `Option::None` instead of an error.

use crate::state::Item;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed later once state changes.
    ///
    /// Examples: inventory full
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown compartment selector
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for inventory errors.
///
/// Provides a uniform interface for classification, so the client can pick a
/// log level without matching on every variant.
pub trait InventoryFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors reported by [`crate::InventoryStore`].
///
/// Display texts double as the console diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The store already holds `capacity` items; `item` was not inserted and is
    /// handed back to the caller.
    #[error("Inventory is full. Cannot add {}.", .item.name)]
    Full { capacity: usize, item: Item },

    /// The selector does not name one of the three compartments.
    #[error("Invalid compartment.")]
    InvalidCompartment(String),
}

impl InventoryError {
    /// Recovers the rejected item from a [`InventoryError::Full`] error.
    pub fn into_rejected_item(self) -> Option<Item> {
        match self {
            Self::Full { item, .. } => Some(item),
            Self::InvalidCompartment(_) => None,
        }
    }
}

impl InventoryFault for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } => ErrorSeverity::Recoverable,
            Self::InvalidCompartment(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INVENTORY_FULL",
            Self::InvalidCompartment(_) => "INVALID_COMPARTMENT",
        }
    }
}
