//! Structured logging for the companion CLI using tracing.
//!
//! Logs to `<storage root>/logs/companion.{date}.log` with automatic daily
//! rotation. Keeps 7 days of logs. Log level can be controlled via `RUST_LOG`.
//!
//! Falls back to stderr logging if file appender creation fails.

use fs_err as fs;
use std::path::Path;

use companion_core::StorageConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "companion=info,companion_core=warn";

/// Installs the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &StorageConfig) -> Option<WorkerGuard> {
    let log_dir = config.log_dir();
    let _ = fs::create_dir_all(&log_dir);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match create_file_appender(&log_dir) {
        Ok(file_appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_timer(fmt::time::UtcTime::rfc_3339())
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        Err(_) => {
            // Fall back to stderr logging if file appender fails
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_timer(fmt::time::UtcTime::rfc_3339())
                        .with_ansi(true),
                )
                .init();
            None
        }
    }
}

fn create_file_appender(
    log_dir: &Path,
) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("companion")
        .filename_suffix("log")
        .max_log_files(7)
        .build(log_dir)
}
