//! Tracing subscriber setup
//!
//! The dashboard owns the terminal, so it only logs when a log file is given.
//! One-shot modes log warnings to stderr. `RUST_LOG` overrides the defaults.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber was already installed
    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// Where log output goes for a given startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Picks a target from the configured log file and front end
    pub fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, false) => LogTarget::Stderr,
            (None, true) => LogTarget::Disabled,
        }
    }

    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::File(_) => "info",
            LogTarget::Stderr | LogTarget::Disabled => "warn",
        }
    }
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global tracing subscriber for `target`
pub fn init(target: LogTarget<'_>) -> Result<(), LoggingError> {
    let filter = env_filter(target.default_directive());

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
        LogTarget::Disabled => {}
    }

    tracing::debug!(?target, "Logging initialized");
    Ok(())
}
