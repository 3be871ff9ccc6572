// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: geometry, resize directions, input events, and shortcuts.
//!
//! # Role in resizekit
//! `resizekit-core` is the vocabulary layer. It owns the value types every
//! other crate speaks: [`geometry::Dimensions`], the eight
//! [`direction::ResizeDirection`] handles with their axis sets, and the
//! normalized [`event::InputEvent`] that hosts produce from native
//! pointer/touch/keyboard input.
//!
//! # Primary responsibilities
//! - **Geometry**: dimensions, pointer positions, axis clamping.
//! - **Direction**: closed handle set with precomputed axis sets.
//! - **Event**: canonical pointer, touch, and key events.
//! - **Shortcut**: key-combo parsing and ordered action tables.
//!
//! # How it fits in the system
//! The calculator (`resizekit-layout`) consumes directions and dimensions;
//! the session runtime (`resizekit-runtime`) consumes events and shortcuts.

pub mod direction;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod shortcut;

pub use direction::{AxisSet, HorizontalEdge, ParseDirectionError, ResizeDirection, VerticalEdge};
pub use geometry::{Dimensions, PointerPosition, clamp_axis};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
