//! Tracing subscriber setup.
//!
//! The terminal belongs to the UI, so logs only go to a file. Without a
//! configured file no subscriber is installed and every `tracing` call is a
//! no-op.

use crate::config::LogConfig;
use crate::error::AppError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, the filter does not
/// parse, or a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<bool, AppError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(&config.filter)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), filter = %config.filter, "Logging initialised");
    Ok(true)
}
