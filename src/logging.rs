use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub(crate) const LOG_ENV: &str = "FINBOARD_LOG";

/// Install a file-backed subscriber. The terminal belongs to the TUI, so
/// nothing is ever written to stdout/stderr from here.
///
/// Returns the log file path, or `None` when logging could not be set up;
/// the app keeps running either way.
pub(crate) fn init() -> Option<PathBuf> {
    let path = log_path().ok()?;
    init_at(&path).ok()?;
    Some(path)
}

fn log_path() -> Result<PathBuf> {
    let dirs = crate::config::project_dirs()?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("finboard.log"))
}

fn init_at(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}
