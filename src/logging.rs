//! Logging bootstrap.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the embedding application, which may call [`init_logging`] once at start-up.

use crate::error::{Result, TodoError};
use std::sync::OnceLock;
use tracing::Level;

static INSTALLED_LEVEL: OnceLock<Level> = OnceLock::new();

/// Installs a global `fmt` subscriber at the given level.
///
/// Calling this again with the same level is a no-op.
///
/// # Errors
/// - Returns an error when `level` is not one of trace, debug, info, warn, error.
/// - Returns an error when a subscriber was already installed with another
///   level, or by someone else.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_level(level)?;

    if let Some(installed) = INSTALLED_LEVEL.get() {
        if *installed == level {
            return Ok(());
        }
        return Err(TodoError::LoggingError(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            installed, level
        )));
    }

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|err| TodoError::LoggingError(err.to_string()))?;

    let _ = INSTALLED_LEVEL.set(level);
    tracing::debug!(level = %level, "logging initialized");
    Ok(())
}

fn parse_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(TodoError::LoggingError(format!(
            "unsupported log level `{}`. Valid levels: trace, debug, info, warn, error",
            level
        ))),
    }
}
