//! File logging setup
//!
//! The crate logs through the `log` facade. When logging is enabled in the
//! configuration, [`init`] routes records to a file in the user's cache
//! directory via `fern`. The global logger can only be installed once per
//! process, so later calls return the path chosen by the first one.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static LOG_FILE: OnceCell<PathBuf> = OnceCell::new();

/// Path of the log file: `<cache_dir>/datekit/datekit.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join("datekit").join("datekit.log"))
}

/// Install the file logger if enabled.
///
/// Returns the log file path when logging is active, `None` when disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    LOG_FILE.get_or_try_init(|| install(config)).map(|path| Some(path.clone()))
}

fn install(config: &LoggingConfig) -> Result<PathBuf> {
    let level = config.level_filter()?;
    let path = get_log_file_path()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::info!("Logging to {}", path.display());
    Ok(path)
}
