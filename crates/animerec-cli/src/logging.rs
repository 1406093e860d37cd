//! Log file setup
//!
//! The TUI owns the terminal, so logs go to
//! `<data dir>/animerec/animerec.log`. Filter with `ANIMEREC_LOG`
//! (default `info`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "ANIMEREC_LOG";

/// Log file location, if a data directory exists on this platform
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("animerec").join("animerec.log"))
}

/// Install the global subscriber. Returns the log path when file logging is active.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be set in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(Some(path))
}
