#![forbid(unsafe_code)]

//! Resize handle directions.
//!
//! Each of the eight handles maps to a fixed [`AxisSet`] describing which
//! edge of the element it moves on each axis. The set is a `const` lookup, so
//! callers branch on edges rather than re-deriving them from handle names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which vertical edge (left or right) a handle moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Which horizontal edge (top or bottom) a handle moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Axes affected by a resize direction.
///
/// `horizontal` drives width, `vertical` drives height. Edge directions set
/// exactly one of the two; corner directions set both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSet {
    pub horizontal: Option<HorizontalEdge>,
    pub vertical: Option<VerticalEdge>,
}

impl AxisSet {
    /// Whether width changes for this set.
    #[inline]
    #[must_use]
    pub const fn affects_width(self) -> bool {
        self.horizontal.is_some()
    }

    /// Whether height changes for this set.
    #[inline]
    #[must_use]
    pub const fn affects_height(self) -> bool {
        self.vertical.is_some()
    }
}

/// One of the eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeDirection {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    #[default]
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl ResizeDirection {
    /// All directions in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopLeft,
    ];

    /// Axis set moved by this handle.
    #[must_use]
    pub const fn axes(self) -> AxisSet {
        let horizontal = match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(HorizontalEdge::Left),
            Self::Right | Self::TopRight | Self::BottomRight => Some(HorizontalEdge::Right),
            Self::Top | Self::Bottom => None,
        };
        let vertical = match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(VerticalEdge::Top),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(VerticalEdge::Bottom),
            Self::Left | Self::Right => None,
        };
        AxisSet {
            horizontal,
            vertical,
        }
    }

    /// Edge directions move exactly one axis.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Top | Self::Right | Self::Bottom | Self::Left)
    }

    /// Corner directions move both axes.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        !self.is_edge()
    }

    /// Kebab-case handle name (`"bottom-right"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::TopLeft => "top-left",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a handle name is not one of the eight directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resize direction {:?}", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for ResizeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == normalized)
            .ok_or_else(|| ParseDirectionError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_move_exactly_one_axis() {
        for direction in ResizeDirection::ALL.into_iter().filter(|d| d.is_edge()) {
            let axes = direction.axes();
            assert_ne!(
                axes.affects_width(),
                axes.affects_height(),
                "{direction} should move one axis"
            );
        }
    }

    #[test]
    fn corners_move_both_axes() {
        for direction in ResizeDirection::ALL.into_iter().filter(|d| d.is_corner()) {
            let axes = direction.axes();
            assert!(axes.affects_width() && axes.affects_height(), "{direction}");
        }
    }

    #[test]
    fn corner_components_match_names() {
        let axes = ResizeDirection::TopLeft.axes();
        assert_eq!(axes.horizontal, Some(HorizontalEdge::Left));
        assert_eq!(axes.vertical, Some(VerticalEdge::Top));

        let axes = ResizeDirection::BottomRight.axes();
        assert_eq!(axes.horizontal, Some(HorizontalEdge::Right));
        assert_eq!(axes.vertical, Some(VerticalEdge::Bottom));
    }

    #[test]
    fn display_and_parse_agree() {
        for direction in ResizeDirection::ALL {
            let parsed: ResizeDirection = direction.to_string().parse().expect("round trip");
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn parse_accepts_snake_case_and_whitespace() {
        assert_eq!(
            " Bottom_Left ".parse::<ResizeDirection>(),
            Ok(ResizeDirection::BottomLeft)
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "diagonal".parse::<ResizeDirection>().unwrap_err();
        assert_eq!(err.input(), "diagonal");
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&ResizeDirection::TopRight).expect("serialize");
        assert_eq!(json, "\"top-right\"");
        let back: ResizeDirection = serde_json::from_str("\"bottom-left\"").expect("deserialize");
        assert_eq!(back, ResizeDirection::BottomLeft);
    }

    #[test]
    fn default_is_bottom_right() {
        assert_eq!(ResizeDirection::default(), ResizeDirection::BottomRight);
    }
}
