use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;

/// Install the global logger described by `config`.
///
/// Returns the file log lines are appended to, or `None` when logging is
/// disabled. Fails if the level is invalid, the file cannot be opened, or a
/// logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let path = config.log_file_path()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", level.min(LevelFilter::Warn))
        .chain(file)
        .apply()
        .map_err(|e| anyhow::anyhow!("A logger is already installed: {}", e))?;

    Ok(Some(path))
}
