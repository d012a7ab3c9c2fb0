//! Log setup. The terminal belongs to the UI, so events go to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use sectorboard_core::config::DashboardConfig;

const LOG_FILE: &str = "sectorboard.log";

/// Where logs go when the config names no file.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sectorboard")
        .join(LOG_FILE)
}

/// `RUST_LOG` wins over the configured filter.
pub fn filter(config: &DashboardConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber. Returns the log file path.
pub fn init(config: &DashboardConfig) -> Result<PathBuf> {
    let path = config.log_file.clone().unwrap_or_else(default_log_path);
    let file = open_log(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;
    Ok(path)
}
