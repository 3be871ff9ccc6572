#![forbid(unsafe_code)]

//! Policy-as-data configuration for resize sessions.
//!
//! A [`ResizePolicyConfig`] captures the tunables of a session (bounds,
//! aspect lock, trigger mode, derived-axis policy, shortcuts) so hosts can
//! ship them as a TOML or JSON file instead of code.
//!
//! # Loading
//!
//! ```toml
//! # resizekit.toml
//! min_width = 120
//! min_height = 80
//! max_width = 1200
//! aspect_ratio = true
//! trigger_mode = "end"
//! derived_axis = "clamped"
//! ```
//!
//! ```rust,ignore
//! let policy = ResizePolicyConfig::from_toml_file("resizekit.toml")?.validated()?;
//! let session = ResizeSession::new(policy.to_session_config(), source);
//! ```
//!
//! # Defaults
//!
//! `ResizePolicyConfig::default()` converts to `SessionConfig::default()`:
//! minimum 50 on both axes, no maximum, no aspect lock, notify on every
//! update, unclamped derived axis, shortcuts enabled.

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use resizekit_layout::{DEFAULT_MIN_SIZE, DerivedAxisPolicy, SizeConstraints};

use crate::session::SessionConfig;
use crate::trigger::TriggerMode;

/// Serializable session policy. Missing maxima mean unbounded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ResizePolicyConfig {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    pub aspect_ratio: bool,
    pub trigger_mode: TriggerMode,
    pub derived_axis: DerivedAxisPolicy,
    pub shortcuts_enabled: bool,
}

impl Default for ResizePolicyConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_SIZE,
            min_height: DEFAULT_MIN_SIZE,
            max_width: None,
            max_height: None,
            aspect_ratio: false,
            trigger_mode: TriggerMode::default(),
            derived_axis: DerivedAxisPolicy::default(),
            shortcuts_enabled: true,
        }
    }
}

impl ResizePolicyConfig {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(ConfigError::TomlSer)
    }

    /// Check every parameter.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, min) in [("min_width", self.min_width), ("min_height", self.min_height)] {
            if !min.is_finite() || min < 0.0 {
                errors.push(format!("{name} must be a finite number >= 0, got {min}"));
            }
        }

        for (name, min, max) in [
            ("max_width", self.min_width, self.max_width),
            ("max_height", self.min_height, self.max_height),
        ] {
            let Some(max) = max else { continue };
            if max.is_nan() || max <= 0.0 {
                errors.push(format!("{name} must be > 0, got {max}"));
            } else if max < min {
                errors.push(format!("{name} ({max}) must be >= the minimum ({min})"));
            }
        }

        errors
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    #[must_use]
    pub fn to_constraints(&self) -> SizeConstraints {
        SizeConstraints::new(
            self.min_width,
            self.min_height,
            self.max_width.unwrap_or(f64::INFINITY),
            self.max_height.unwrap_or(f64::INFINITY),
        )
    }

    #[must_use]
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            constraints: self.to_constraints(),
            aspect_ratio: self.aspect_ratio,
            trigger_mode: self.trigger_mode,
            derived_axis: self.derived_axis,
            shortcuts_enabled: self.shortcuts_enabled,
        }
    }
}

/// Errors from loading or validating a [`ResizePolicyConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "policy-config")]
    TomlSer(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::TomlSer(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::TomlSer(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
