//! Console client for the player inventory.
//!
//! The binary is a thin composition root: it loads configuration from the
//! environment, installs logging, and runs the [`demo`] sequence against an
//! [`inventory_core::InventoryStore`], printing listings to stdout.
pub mod config;
pub mod demo;
pub mod logging;

pub use config::{ClientConfig, LoggingConfig};
