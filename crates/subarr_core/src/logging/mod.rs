//! Logging setup on top of `tracing`.
//!
//! Library code only emits `tracing` events; the binary decides where they
//! go by calling [`init_tracing`] once at startup.

mod types;

pub use types::LogLevel;

use std::fs;
use std::path::Path;

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file name prefix; the appender adds the date.
pub const LOG_FILE_PREFIX: &str = "subarr.log";

/// Initialize the global subscriber.
///
/// - respects `RUST_LOG`, falling back to `default_level`
/// - writes to stderr
/// - with `log_dir`, also writes to a daily rotated file there
///
/// Keep the returned guard alive for the life of the program, otherwise
/// buffered file output is lost.
pub fn init_tracing(default_level: LogLevel, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_dir.map(file_writer) {
        Some(Ok((writer, guard))) => (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        ),
        Some(Err(e)) => {
            eprintln!("File logging disabled: {}", e);
            (None, None)
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    tracing::debug!("Logging started at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    guard
}

fn file_writer(
    dir: &Path,
) -> std::io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
