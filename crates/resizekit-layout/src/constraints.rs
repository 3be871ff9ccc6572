#![forbid(unsafe_code)]

//! Per-element size bounds.

use std::fmt;

use resizekit_core::geometry::{Dimensions, clamp_axis};
use serde::{Deserialize, Serialize};

/// Default minimum width/height applied when a host does not configure one.
pub const DEFAULT_MIN_SIZE: f64 = 50.0;

/// Size axis, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Minimum/maximum bounds per axis.
///
/// Maxima may be `f64::INFINITY` for unbounded growth. `min <= max` is the
/// caller's responsibility: an inverted range clamps every value to `max`
/// rather than panicking. Use [`SizeConstraints::validate`] to check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraints {
    pub min_width: f64,
    pub min_height: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_SIZE,
            min_height: DEFAULT_MIN_SIZE,
            max_width: f64::INFINITY,
            max_height: f64::INFINITY,
        }
    }
}

impl SizeConstraints {
    /// Explicit bounds.
    #[must_use]
    pub const fn new(min_width: f64, min_height: f64, max_width: f64, max_height: f64) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    /// Zero minimum, unbounded maximum.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, 0.0, f64::INFINITY, f64::INFINITY)
    }

    /// Replace both minima.
    #[must_use]
    pub const fn with_min(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    /// Replace both maxima.
    #[must_use]
    pub const fn with_max(mut self, max_width: f64, max_height: f64) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    #[inline]
    #[must_use]
    pub fn clamp_width(&self, width: f64) -> f64 {
        clamp_axis(width, self.min_width, self.max_width)
    }

    #[inline]
    #[must_use]
    pub fn clamp_height(&self, height: f64) -> f64 {
        clamp_axis(height, self.min_height, self.max_height)
    }

    /// Clamp both axes independently.
    #[must_use]
    pub fn clamp(&self, dimensions: Dimensions) -> Dimensions {
        Dimensions::new(
            self.clamp_width(dimensions.width),
            self.clamp_height(dimensions.height),
        )
    }

    /// Whether `dimensions` already lies inside the bounds.
    #[must_use]
    pub fn contains(&self, dimensions: Dimensions) -> bool {
        (self.min_width..=self.max_width).contains(&dimensions.width)
            && (self.min_height..=self.max_height).contains(&dimensions.height)
    }

    /// Check bounds for caller mistakes.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        for (axis, min, max) in [
            (Axis::Width, self.min_width, self.max_width),
            (Axis::Height, self.min_height, self.max_height),
        ] {
            if !min.is_finite() {
                return Err(ConstraintError::NonFiniteMinimum { axis, value: min });
            }
            if min < 0.0 {
                return Err(ConstraintError::NegativeMinimum { axis, value: min });
            }
            if max.is_nan() {
                return Err(ConstraintError::NanMaximum { axis });
            }
            if max < min {
                return Err(ConstraintError::InvertedRange { axis, min, max });
            }
        }
        Ok(())
    }
}

/// Reasons a [`SizeConstraints`] value is rejected by `validate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintError {
    NonFiniteMinimum { axis: Axis, value: f64 },
    NegativeMinimum { axis: Axis, value: f64 },
    NanMaximum { axis: Axis },
    InvertedRange { axis: Axis, min: f64, max: f64 },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteMinimum { axis, value } => {
                write!(f, "minimum {axis} must be finite (got {value})")
            }
            Self::NegativeMinimum { axis, value } => {
                write!(f, "minimum {axis} must be >= 0 (got {value})")
            }
            Self::NanMaximum { axis } => write!(f, "maximum {axis} must not be NaN"),
            Self::InvertedRange { axis, min, max } => {
                write!(f, "minimum {axis} {min} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for ConstraintError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_min_fifty_unbounded_max() {
        let constraints = SizeConstraints::default();
        assert_eq!(constraints.min_width, 50.0);
        assert_eq!(constraints.min_height, 50.0);
        assert!(constraints.max_width.is_infinite());
        assert!(constraints.max_height.is_infinite());
        assert_eq!(constraints.validate(), Ok(()));
    }

    #[test]
    fn clamp_applies_per_axis() {
        let constraints = SizeConstraints::new(50.0, 20.0, 300.0, 100.0);
        assert_eq!(
            constraints.clamp(Dimensions::new(10.0, 400.0)),
            Dimensions::new(50.0, 100.0)
        );
        assert!(constraints.contains(Dimensions::new(50.0, 100.0)));
        assert!(!constraints.contains(Dimensions::new(49.0, 100.0)));
    }

    #[test]
    fn inverted_range_is_reported_but_clamp_does_not_panic() {
        let constraints = SizeConstraints::new(200.0, 0.0, 100.0, 10.0);
        assert_eq!(
            constraints.validate(),
            Err(ConstraintError::InvertedRange {
                axis: Axis::Width,
                min: 200.0,
                max: 100.0
            })
        );
        assert_eq!(constraints.clamp_width(150.0), 100.0);
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_minimum() {
        let negative = SizeConstraints::unbounded().with_min(0.0, -1.0);
        assert!(matches!(
            negative.validate(),
            Err(ConstraintError::NegativeMinimum {
                axis: Axis::Height,
                ..
            })
        ));

        let infinite = SizeConstraints::unbounded().with_min(f64::INFINITY, 0.0);
        assert!(matches!(
            infinite.validate(),
            Err(ConstraintError::NonFiniteMinimum {
                axis: Axis::Width,
                ..
            })
        ));

        let nan_max = SizeConstraints::unbounded().with_max(f64::NAN, 10.0);
        assert_eq!(
            nan_max.validate(),
            Err(ConstraintError::NanMaximum { axis: Axis::Width })
        );
    }

    #[test]
    fn error_display_names_axis() {
        let err = ConstraintError::InvertedRange {
            axis: Axis::Height,
            min: 5.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "minimum height 5 exceeds maximum 1");
    }
}
