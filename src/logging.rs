//! Tracing subscriber setup
//!
//! Logs go to stderr and, when a log directory is available, to a daily
//! rolling file inside it.

use crate::errors::{AppResult, ErrorContextExt};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// File name prefix of the rolling log file
pub const LOG_FILE_NAME: &str = "cxkitty-notify.log";

/// Initialize logging based on verbosity and the configured log directory
///
/// Returns the file writer guard, which must be kept alive for buffered log
/// lines to be flushed. Installing a subscriber twice is not an error; the
/// first one stays active.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> AppResult<Option<WorkerGuard>> {
    let log_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::from_default_env().add_directive(
        log_level
            .parse()
            .unwrap_or_else(|_| tracing::Level::INFO.into()),
    );

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).in_file_operation(dir, "create log directory")?;

            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, log_dir = ?log_dir, "Logging initialized");
    }

    Ok(guard)
}
