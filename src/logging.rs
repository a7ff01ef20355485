//! Diagnostic logging to the console and an append-only log file.
//!
//! Console output is filtered by `RUST_LOG` and defaults to `warn`. The log
//! file records every event at `debug` level without timestamps, so it
//! holds the text read from and written to the clipboard.

use std::{
    fs::{File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name of the log inside the temporary directory.
pub const LOG_FILE_NAME: &str = "md-table.txt";

/// Default log location: [`LOG_FILE_NAME`] in the system temporary directory.
#[must_use]
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Open `path` for appending, creating it readable and writable by the
/// owner only.
///
/// # Errors
/// Returns an error if the file cannot be opened or created.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

/// Install the global tracing subscriber.
///
/// The returned guard flushes the log file when dropped and must be kept
/// alive for as long as events should reach it. If the file cannot be
/// opened only console logging is installed.
#[must_use]
pub fn init(log_path: &Path) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file_layer, guard) = match open_log_file(log_path) {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .without_time()
                .with_target(false)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "Warning: could not open log file {}: {e}",
                log_path.display()
            );
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
    guard
}
