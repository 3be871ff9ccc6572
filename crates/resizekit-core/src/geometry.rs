#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are in host surface units (CSS pixels for web hosts). Sizes are
//! `f64` so unbounded maxima can be expressed as `f64::INFINITY`.

use serde::{Deserialize, Serialize};

/// Width/height pair of a resizable element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in surface units.
    pub width: f64,
    /// Height in surface units.
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero-sized dimensions.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Width divided by height, or `None` when the ratio is undefined.
    ///
    /// A zero, negative, or non-finite height (or a non-finite result) yields
    /// `None` so callers never divide by zero downstream.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return None;
        }
        let ratio = self.width / self.height;
        (ratio.is_finite() && ratio > 0.0).then_some(ratio)
    }

    /// Whether both axes are finite numbers.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl From<(f64, f64)> for Dimensions {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// Pointer or touch position in host surface coordinates.
///
/// The origin is the top-left corner; `x` grows to the right and `y` grows
/// downward, matching DOM client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: PointerPosition) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Whether both coordinates are finite numbers.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Evaluated as `min(max(value, min), max)`, so an inverted range
/// (`min > max`) degenerates to `max` instead of panicking like
/// [`f64::clamp`] would.
#[inline]
#[must_use]
pub fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
