//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use inventory_core::InventoryConfig;

/// Configuration required to run the inventory demo.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub inventory: InventoryConfig,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `INVENTORY_MAX_CAPACITY` - Store capacity (default: 10)
    /// - `INVENTORY_LOG_DIR` - Directory for `inventory.log` (default: platform cache dir)
    /// - `INVENTORY_LOG_STDERR` - Mirror logs to stderr (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(capacity) = parse_var::<usize>(&lookup, "INVENTORY_MAX_CAPACITY") {
            config.inventory = InventoryConfig::with_max_capacity(capacity);
        }

        config.logging.directory = lookup("INVENTORY_LOG_DIR").map(PathBuf::from);

        if let Some(enable) = parse_var::<bool>(&lookup, "INVENTORY_LOG_STDERR") {
            config.logging.stderr = enable;
        }

        config
    }
}

/// Log output configuration.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    /// Overrides the platform log directory.
    pub directory: Option<PathBuf>,
    /// Also write logs to stderr. Stdout is left to the inventory report.
    pub stderr: bool,
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
