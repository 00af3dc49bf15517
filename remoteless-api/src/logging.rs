//! Logging setup for applications built on the Remoteless client
//!
//! The crates only emit `tracing` events. Applications that want to see them
//! install a subscriber, either their own or one of the presets here.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber; events are dropped
    Silent,
    /// Compact stderr output at `info`
    Development,
    /// Verbose output with source locations at `debug`
    Debug,
}

impl LoggingMode {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") => LoggingMode::Development,
            Some("debug") => LoggingMode::Debug,
            _ => LoggingMode::Silent,
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `REMOTELESS_LOG_LEVEL`: filter directive (error, warn, info, debug, trace,
///   or e.g. `remoteless_api=debug`), falls back to `RUST_LOG`
///
/// ```rust,ignore
/// remoteless_api::logging::init_logging(LoggingMode::Development)?;
/// ```
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact())
                .with(create_env_filter("info"));

            subscriber.try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true))
                .with(create_env_filter("debug"));

            subscriber.try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from `REMOTELESS_LOG_MODE` (`silent`, `development`, `debug`)
///
/// Defaults to silent when unset or unrecognized.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var("REMOTELESS_LOG_MODE").ok();
    init_logging(LoggingMode::from_name(mode.as_deref()))
}

/// Check if a global subscriber has been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn create_env_filter(default_level: &str) -> EnvFilter {
    // REMOTELESS_LOG_LEVEL, then RUST_LOG, then default
    if let Ok(level) = std::env::var("REMOTELESS_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
