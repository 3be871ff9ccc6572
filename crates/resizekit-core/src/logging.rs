#![forbid(unsafe_code)]

//! Structured logging helpers.
//!
//! With the `tracing` feature the usual macros are re-exported so dependent
//! crates can log through `resizekit_core::debug!` without naming `tracing`
//! directly. With `tracing-json` a JSON subscriber can be installed for
//! production hosts; its filter is read from `RESIZEKIT_LOG` (falling back to
//! `info`).

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Environment variable holding the `EnvFilter` directive for JSON logging.
pub const LOG_FILTER_ENV: &str = "RESIZEKIT_LOG";

/// Default filter when [`LOG_FILTER_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Failure to install the global JSON subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingInitError {
    message: String,
}

impl std::fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to install log subscriber: {}", self.message)
    }
}

impl std::error::Error for LoggingInitError {}

/// Install a global JSON subscriber.
///
/// Fails if another global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), LoggingInitError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| LoggingInitError {
            message: err.to_string(),
        })
}
