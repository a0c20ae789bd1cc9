//! Tracing setup for the client binary.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

pub const LOG_FILE_NAME: &str = "inventory.log";

/// Setup logging to a file and, optionally, to stderr.
///
/// Stdout stays reserved for compartment listings. The returned guard flushes
/// the non-blocking file writer on drop and must be held until exit.
pub fn setup_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let log_dir = log_directory(config);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = config
        .stderr
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("installing global tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}

/// Resolve the directory that receives the log file.
///
/// Order: explicit override, platform cache directory, temp directory.
pub fn log_directory(config: &LoggingConfig) -> PathBuf {
    if let Some(dir) = &config.directory {
        return dir.clone();
    }

    directories::ProjectDirs::from("", "", "inventory")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| fallback_directory(&std::env::temp_dir()))
}

fn fallback_directory(temp: &Path) -> PathBuf {
    temp.join("inventory").join("logs")
}
