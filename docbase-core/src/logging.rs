//! Structured logging setup using the `tracing` ecosystem.
//!
//! The client crates only emit `tracing` events; applications embedding the
//! client call one of these initializers (or install their own subscriber).

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{DocbaseError, DocbaseResult};

/// Initialize the global tracing subscriber from a `LoggingConfig`.
///
/// Sets up:
/// - Console output (stderr), compact format
/// - When `directory` is set, file output with daily rotation
///   (JSON when `json_output` is enabled)
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> DocbaseResult<Option<LogGuard>> {
    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .compact();

    if config.directory.is_empty() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()
            .map_err(|e| DocbaseError::Config(format!("failed to install subscriber: {e}")))?;
        tracing::debug!("console logging initialized at level={}", config.level);
        return Ok(None);
    }

    let log_dir = Path::new(&config.directory);
    std::fs::create_dir_all(log_dir)?;
    let file_appender = rolling::daily(log_dir, "docbase.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let result = if config.json_output {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    };
    result.map_err(|e| DocbaseError::Config(format!("failed to install subscriber: {e}")))?;

    tracing::info!(
        "logging initialized at level={}, dir={}",
        config.level,
        log_dir.display()
    );

    Ok(Some(LogGuard { _guard: guard }))
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Initialize a minimal console-only logger for tests or small tools.
/// Subsequent calls are no-ops.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init();
}
