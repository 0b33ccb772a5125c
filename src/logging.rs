use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

const LOG_ENV: &str = "OURATERM_LOG";
const LOG_FILE: &str = "ouraterm.log";

/// Sends tracing output to a file in the data directory; the terminal itself
/// belongs to the dashboard. Returns the log file path.
pub fn init() -> Result<PathBuf> {
    let path = Settings::data_dir()?.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(path)
}
