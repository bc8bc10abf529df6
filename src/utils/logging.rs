//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the landing page runtime.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{LandingError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender and must be kept alive
/// for as long as logging is needed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "multillm-landing.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LandingError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an explicit language switch
pub fn log_language_switch(from: &str, to: &str, active: &str) {
    info!(
        from = from,
        requested = to,
        active = active,
        "Language switched"
    );
}

/// Log a failed translation table load
pub fn log_load_failure(code: &str, error: &LandingError, fallback: Option<&str>) {
    warn!(
        language = code,
        error = %error,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        fallback = fallback,
        "Failed to load translation table"
    );
}

/// Log a page event dispatched to the runtime
pub fn log_page_event(event: &str, target: Option<usize>, details: Option<&str>) {
    debug!(
        event = event,
        target = target,
        details = details,
        "Page event dispatched"
    );
}
