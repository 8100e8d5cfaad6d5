//! Tracing setup
//!
//! The terminal UI owns stdout and the alternate screen while it runs, so
//! interactive sessions log to a file or nowhere. Headless commands log to
//! stderr.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Where log lines go for this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Discard,
}

impl<'a> LogTarget<'a> {
    /// Pick the target for a command. An explicit log file always wins.
    pub fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }
}

/// Create (or truncate) the log file, making parent directories as needed
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create log file: {}", path.display()))
}

/// Install the global subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init_tracing(target: LogTarget<'_>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt().with_env_filter(filter).with_target(false);

    match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}
