//! Inventory demo binary.
//!
//! Environment variables are documented on [`ClientConfig::from_env`]; a
//! `.env` file in the working directory is loaded first if present.

use std::io::Write;

use anyhow::Result;
use inventory_client::{ClientConfig, demo, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config.logging)?;

    tracing::info!("Max capacity: {}", config.inventory.max_capacity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&config.inventory, &mut out)?;
    out.flush()?;

    Ok(())
}
