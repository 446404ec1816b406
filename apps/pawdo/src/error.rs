//! Error types for the application shell.
//!
//! The to-do store itself never fails. Everything here belongs to the shell
//! around it: reading configuration, loading the background, driving the
//! terminal, installing the log subscriber.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value outside its accepted set
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Value as found
        value: String,
        /// Human-readable list of accepted values
        expected: &'static str,
    },
}

/// Errors that can stop the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured background file could not be read
    #[error("failed to load background from {}: {source}", path.display())]
    Background {
        /// File that was requested
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The log filter directive did not parse
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global tracing subscriber was already installed
    #[error("failed to install log subscriber: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}
