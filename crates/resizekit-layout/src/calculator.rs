#![forbid(unsafe_code)]

//! Dimension calculator for handle drags.
//!
//! [`compute_dimensions`] maps a drag (start size, cumulative pointer delta,
//! handle direction) onto new bounded dimensions. It is a pure function: the
//! same request always yields the same result and nothing is mutated.
//!
//! # Sign convention
//!
//! Deltas are in surface coordinates (`x` right, `y` down). Dragging a
//! `right`/`bottom` handle by a positive delta grows the element; dragging a
//! `left`/`top` handle by a positive delta (toward the interior) shrinks it.
//!
//! # Modes
//!
//! - **Edge** (`top`/`right`/`bottom`/`left`): one axis changes, the other
//!   stays at its start value.
//! - **Corner**: width follows the horizontal component, height follows the
//!   vertical component, each clamped independently.
//! - **Aspect locked**: the driving axis (width whenever the handle has a
//!   horizontal component, height otherwise) is computed and clamped, then
//!   the other axis is derived from the start ratio. Whether the derived axis
//!   is clamped again is controlled by [`DerivedAxisPolicy`].

use resizekit_core::direction::{HorizontalEdge, ResizeDirection, VerticalEdge};
use resizekit_core::geometry::Dimensions;
use serde::{Deserialize, Serialize};

use crate::constraints::SizeConstraints;

/// Treatment of the derived axis while the aspect ratio is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedAxisPolicy {
    /// The ratio wins: the derived axis may leave its own bounds.
    #[default]
    Unclamped,
    /// The derived axis is clamped to its own bounds; the ratio may break.
    Clamped,
}

/// Everything the calculator needs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRequest {
    pub direction: ResizeDirection,
    pub start: Dimensions,
    pub delta_x: f64,
    pub delta_y: f64,
    pub constraints: SizeConstraints,
    pub aspect_locked: bool,
    pub derived_axis: DerivedAxisPolicy,
}

impl ResizeRequest {
    /// Zero-delta, unlocked request.
    #[must_use]
    pub const fn new(
        direction: ResizeDirection,
        start: Dimensions,
        constraints: SizeConstraints,
    ) -> Self {
        Self {
            direction,
            start,
            delta_x: 0.0,
            delta_y: 0.0,
            constraints,
            aspect_locked: false,
            derived_axis: DerivedAxisPolicy::Unclamped,
        }
    }

    #[must_use]
    pub const fn with_delta(mut self, delta_x: f64, delta_y: f64) -> Self {
        self.delta_x = delta_x;
        self.delta_y = delta_y;
        self
    }

    #[must_use]
    pub const fn with_aspect_lock(mut self, locked: bool) -> Self {
        self.aspect_locked = locked;
        self
    }

    #[must_use]
    pub const fn with_derived_axis(mut self, policy: DerivedAxisPolicy) -> Self {
        self.derived_axis = policy;
        self
    }
}

/// Compute new dimensions for a drag.
#[must_use]
pub fn compute_dimensions(request: &ResizeRequest) -> Dimensions {
    let ResizeRequest {
        direction,
        start,
        constraints,
        ..
    } = *request;
    let delta_x = finite_or_zero(request.delta_x);
    let delta_y = finite_or_zero(request.delta_y);
    let axes = direction.axes();

    let width = axes.horizontal.map(|edge| {
        let raw = match edge {
            HorizontalEdge::Right => start.width + delta_x,
            HorizontalEdge::Left => start.width - delta_x,
        };
        constraints.clamp_width(raw)
    });
    let height = axes.vertical.map(|edge| {
        let raw = match edge {
            VerticalEdge::Bottom => start.height + delta_y,
            VerticalEdge::Top => start.height - delta_y,
        };
        constraints.clamp_height(raw)
    });

    if request.aspect_locked
        && let Some(ratio) = start.aspect_ratio()
    {
        return lock_to_ratio(width, height, ratio, start, request);
    }

    Dimensions::new(
        width.unwrap_or(start.width),
        height.unwrap_or(start.height),
    )
}

fn lock_to_ratio(
    width: Option<f64>,
    height: Option<f64>,
    ratio: f64,
    start: Dimensions,
    request: &ResizeRequest,
) -> Dimensions {
    let clamp_derived = request.derived_axis == DerivedAxisPolicy::Clamped;
    let constraints = request.constraints;
    match (width, height) {
        (Some(width), _) => {
            let derived = width / ratio;
            let height = if clamp_derived {
                constraints.clamp_height(derived)
            } else {
                derived
            };
            Dimensions::new(width, height)
        }
        (None, Some(height)) => {
            let derived = height * ratio;
            let width = if clamp_derived {
                constraints.clamp_width(derived)
            } else {
                derived
            };
            Dimensions::new(width, height)
        }
        (None, None) => start,
    }
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
