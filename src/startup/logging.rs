//! File logging.
//!
//! The TUI owns stdout, so logs go to a daily-rolling file
//! (`<log dir>/fetch-dogs.<date>`) through a non-blocking writer.

use std::path::Path;

use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::config::{ClientConfig, DEFAULT_LOG_FILTER};

/// File name prefix of the rolling log
pub const LOG_FILE_PREFIX: &str = "fetch-dogs";

/// Parse a filter directive, falling back to the default on a bad one.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber.
///
/// Returns `None` when the config has no log directory; nothing is logged
/// then. Keep the guard alive until exit so buffered lines are flushed.
pub fn init_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let Some(dir) = config.log_dir.as_deref() else {
        return Ok(None);
    };
    let guard = init_file_logging(dir, &config.log_filter)?;
    Ok(Some(guard))
}

fn init_file_logging(dir: &Path, filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_filter(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(guard)
}
