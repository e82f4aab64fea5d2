//! Logging system initialization
//!
//! Sets up tracing-based logging with daily-rotated file output. The level
//! defaults to INFO and can be configured via the `RUST_LOG` environment
//! variable.

use crate::error::{PresModeError, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system, writing rotated logs under `log_dir`.
///
/// The directory is created if it does not exist. Call once at startup;
/// subsequent calls fail because the global subscriber is already set.
pub fn init_logging(log_dir: impl AsRef<Path>) -> Result<()> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("presmode")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| PresModeError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PresModeError::ConfigError(Box::new(e)))?;

    tracing::info!("presmode v{} logging initialized", env!("CARGO_PKG_VERSION"));

    Ok(())
}
