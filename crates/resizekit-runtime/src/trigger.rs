#![forbid(unsafe_code)]

//! When the change callback fires.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

/// Notification policy for the session's change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(rename_all = "snake_case"))]
pub enum TriggerMode {
    /// Fire on every accepted movement update.
    #[default]
    #[cfg_attr(feature = "policy-config", serde(alias = "resize"))]
    OnEveryUpdate,
    /// Fire once when the drag ends.
    #[cfg_attr(feature = "policy-config", serde(alias = "end"))]
    OnCompletionOnly,
    /// Fire on updates and again on completion.
    Both,
}

impl TriggerMode {
    #[must_use]
    pub const fn fires_on_update(self) -> bool {
        matches!(self, Self::OnEveryUpdate | Self::Both)
    }

    #[must_use]
    pub const fn fires_on_completion(self) -> bool {
        matches!(self, Self::OnCompletionOnly | Self::Both)
    }

    /// Short host-facing name (`resize`, `end`, `both`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnEveryUpdate => "resize",
            Self::OnCompletionOnly => "end",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized trigger mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTriggerModeError {
    input: String,
}

impl fmt::Display for ParseTriggerModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown trigger mode {:?} (expected resize, end, or both)",
            self.input
        )
    }
}

impl std::error::Error for ParseTriggerModeError {}

impl FromStr for TriggerMode {
    type Err = ParseTriggerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resize" | "on_every_update" => Ok(Self::OnEveryUpdate),
            "end" | "on_completion_only" => Ok(Self::OnCompletionOnly),
            "both" => Ok(Self::Both),
            _ => Err(ParseTriggerModeError {
                input: s.to_string(),
            }),
        }
    }
}
