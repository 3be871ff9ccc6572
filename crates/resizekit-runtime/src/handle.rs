#![forbid(unsafe_code)]

//! Render-facing descriptors derived from session state.
//!
//! These are plain values a host turns into markup: accessibility
//! attributes for each handle, data attributes for the container, and the
//! inline style of the content element.

use std::fmt;

use resizekit_core::direction::ResizeDirection;
use resizekit_core::geometry::Dimensions;
use resizekit_layout::SizeConstraints;

use crate::session::SessionState;

/// Accessibility and styling attributes for one handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleDescriptor {
    pub direction: ResizeDirection,
    pub role: &'static str,
    pub tab_index: i32,
    pub aria_label: String,
    pub aria_expanded: bool,
    pub class_name: String,
}

impl HandleDescriptor {
    #[must_use]
    pub fn new(direction: ResizeDirection, is_resizing: bool) -> Self {
        Self {
            direction,
            role: "button",
            tab_index: 0,
            aria_label: format!("Resize from {direction}"),
            aria_expanded: is_resizing,
            class_name: format!("rr-handle rr-handle-{direction}"),
        }
    }

    /// Value for a `data-direction` attribute.
    #[must_use]
    pub const fn data_direction(&self) -> &'static str {
        self.direction.as_str()
    }
}

/// Data attributes of the resizable container.
///
/// The `at_*` flags compare exactly against the configured bounds, so they
/// are only set when clamping pinned the axis to that bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerAttributes {
    pub width: f64,
    pub height: f64,
    pub is_resizing: bool,
    pub at_min_width: bool,
    pub at_max_width: bool,
    pub at_min_height: bool,
    pub at_max_height: bool,
}

impl ContainerAttributes {
    #[must_use]
    pub fn new(state: &SessionState, constraints: &SizeConstraints) -> Self {
        let Dimensions { width, height } = state.dimensions;
        Self {
            width,
            height,
            is_resizing: state.is_resizing,
            at_min_width: width == constraints.min_width,
            at_max_width: width == constraints.max_width,
            at_min_height: height == constraints.min_height,
            at_max_height: height == constraints.max_height,
        }
    }
}

/// Inline style for the content element.
///
/// A zero axis is left unset so the element keeps its natural size until
/// it has been measured or sized. Transitions are suppressed while a drag
/// is in progress so the element tracks the pointer without easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStyle {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub suppress_transition: bool,
}

impl ContentStyle {
    #[must_use]
    pub fn new(state: &SessionState) -> Self {
        let non_zero = |value: f64| (value != 0.0).then_some(value);
        Self {
            width: non_zero(state.dimensions.width),
            height: non_zero(state.dimensions.height),
            suppress_transition: state.is_resizing,
        }
    }
}

impl fmt::Display for ContentStyle {
    /// CSS declarations, e.g. `width: 120px; height: 80px; transition: none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut declarations = Vec::with_capacity(3);
        if let Some(width) = self.width {
            declarations.push(format!("width: {width}px"));
        }
        if let Some(height) = self.height {
            declarations.push(format!("height: {height}px"));
        }
        if self.suppress_transition {
            declarations.push("transition: none".to_string());
        }
        f.write_str(&declarations.join("; "))
    }
}
