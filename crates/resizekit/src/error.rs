#![forbid(unsafe_code)]

//! Unified error type and degradation policy.
//!
//! Every fallible resizekit API returns a subsystem error. [`Error`] wraps
//! them so applications can propagate with `?`, and
//! [`Error::degradation`] tells the host how to keep the element usable.
//!
//! Most runtime problems never reach this type: invalid transitions and
//! malformed input are reason-coded no-ops on the session. What remains is
//! configuration, parsing, and structural misuse.

use std::fmt;

use resizekit_core::direction::ParseDirectionError;
use resizekit_core::logging::LoggingInitError;
use resizekit_core::shortcut::ShortcutParseError;
use resizekit_layout::ConstraintError;
use resizekit_runtime::{ConfigError, ContextError, ParseTriggerModeError};

/// Top-level error type for resizekit hosts.
#[derive(Debug)]
pub enum Error {
    /// Size bounds rejected by validation.
    Constraint(ConstraintError),
    /// Policy file could not be loaded or failed validation.
    Config(ConfigError),
    /// A consumer was used outside a resizable session.
    Context(ContextError),
    /// Unknown handle name.
    Direction(ParseDirectionError),
    /// Malformed key combo.
    Shortcut(ShortcutParseError),
    /// Unknown trigger mode name.
    TriggerMode(ParseTriggerModeError),
    /// Global log subscriber could not be installed.
    Logging(LoggingInitError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for resizekit APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// What the host should do when an error occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradationAction {
    /// Ignore the offending value and keep the current size.
    KeepPreviousSize,
    /// Fall back to default configuration.
    UseDefaults,
    /// The integration is structurally wrong; surface the error.
    Abort,
}

impl Error {
    /// Determine the degradation action for this error.
    pub fn degradation(&self) -> DegradationAction {
        match self {
            Self::Constraint(_) | Self::Direction(_) | Self::TriggerMode(_) => {
                DegradationAction::KeepPreviousSize
            }
            Self::Config(_) | Self::Shortcut(_) | Self::Logging(_) => {
                DegradationAction::UseDefaults
            }
            Self::Context(_) | Self::Io(_) => DegradationAction::Abort,
        }
    }

    /// Error type label for metrics and tracing.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Constraint(_) => "constraint",
            Self::Config(_) => "config",
            Self::Context(_) => "context",
            Self::Direction(_) => "direction",
            Self::Shortcut(_) => "shortcut",
            Self::TriggerMode(_) => "trigger_mode",
            Self::Logging(_) => "logging",
            Self::Io(_) => "io",
        }
    }

    /// Whether the host can continue without intervention.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.degradation(), DegradationAction::Abort)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constraint(e) => write!(f, "constraint error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Context(e) => write!(f, "context error: {e}"),
            Self::Direction(e) => write!(f, "direction error: {e}"),
            Self::Shortcut(e) => write!(f, "shortcut error: {e}"),
            Self::TriggerMode(e) => write!(f, "trigger mode error: {e}"),
            Self::Logging(e) => write!(f, "logging error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Constraint(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Context(e) => Some(e),
            Self::Direction(e) => Some(e),
            Self::Shortcut(e) => Some(e),
            Self::TriggerMode(e) => Some(e),
            Self::Logging(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConstraintError> for Error {
    fn from(err: ConstraintError) -> Self {
        Self::Constraint(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ContextError> for Error {
    fn from(err: ContextError) -> Self {
        Self::Context(err)
    }
}

impl From<ParseDirectionError> for Error {
    fn from(err: ParseDirectionError) -> Self {
        Self::Direction(err)
    }
}

impl From<ShortcutParseError> for Error {
    fn from(err: ShortcutParseError) -> Self {
        Self::Shortcut(err)
    }
}

impl From<ParseTriggerModeError> for Error {
    fn from(err: ParseTriggerModeError) -> Self {
        Self::TriggerMode(err)
    }
}

impl From<LoggingInitError> for Error {
    fn from(err: LoggingInitError) -> Self {
        Self::Logging(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;
    use resizekit_core::ResizeDirection;
    use resizekit_core::shortcut::KeyCombo;
    use resizekit_layout::SizeConstraints;
    use resizekit_runtime::{ResizableScope, ResizePolicyConfig, TriggerMode};

    #[test]
    fn constraint_errors_keep_previous_size() {
        let err: Error = SizeConstraints::new(10.0, 10.0, 5.0, 50.0)
            .validate()
            .expect_err("inverted")
            .into();
        assert_eq!(err.degradation(), DegradationAction::KeepPreviousSize);
        assert_eq!(err.error_type(), "constraint");
        assert!(err.is_recoverable());
        assert!(format!("{err}").contains("exceeds maximum"));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn config_validation_uses_defaults() {
        let policy = ResizePolicyConfig {
            min_width: -5.0,
            ..ResizePolicyConfig::default()
        };
        let err: Error = policy.validated().expect_err("negative").into();
        assert_eq!(err.degradation(), DegradationAction::UseDefaults);
        assert_eq!(err.error_type(), "config");
    }

    #[test]
    fn context_misuse_aborts() {
        let err: Error = ResizableScope::detached()
            .view()
            .expect_err("no provider")
            .into();
        assert_eq!(err.degradation(), DegradationAction::Abort);
        assert!(!err.is_recoverable());
        assert!(format!("{err}").starts_with("context error:"));
    }

    #[test]
    fn parse_errors_convert() {
        let err: Error = "diagonal"
            .parse::<ResizeDirection>()
            .expect_err("unknown")
            .into();
        assert_eq!(err.error_type(), "direction");

        let err: Error = KeyCombo::parse("Hyper+K").expect_err("unknown modifier").into();
        assert_eq!(err.error_type(), "shortcut");
        assert_eq!(err.degradation(), DegradationAction::UseDefaults);

        let err: Error = "never".parse::<TriggerMode>().expect_err("unknown").into();
        assert_eq!(err.error_type(), "trigger_mode");
    }

    #[test]
    fn io_converts_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/resizekit.toml")?)
        }
        let err = read().expect_err("missing");
        assert_eq!(err.error_type(), "io");
        assert!(!err.is_recoverable());
    }
}
