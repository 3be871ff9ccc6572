#![forbid(unsafe_code)]

//! resizekit public facade crate.
//!
//! Pointer, touch, and keyboard driven resizing for a rectangular element:
//! eight directional handles, min/max bounds, an optional locked aspect
//! ratio, and change notification on every update or on completion.
//!
//! This crate re-exports the stable surface of the workspace crates and
//! offers a prelude for day-to-day use.
//!
//! # Example
//!
//! ```
//! use resizekit::prelude::*;
//!
//! let mut session = ResizeSession::new(
//!     SessionConfig::default().with_constraints(SizeConstraints::new(50.0, 50.0, 400.0, 300.0)),
//!     SizeSource::Controlled(Dimensions::new(200.0, 150.0)),
//! );
//!
//! session.pointer_down(ResizeDirection::BottomRight, &PointerEvent::new(10.0, 10.0));
//! session.dispatch(&InputEvent::PointerMove(PointerEvent::new(60.0, 30.0)));
//! session.dispatch(&InputEvent::PointerUp(PointerEvent::new(60.0, 30.0)));
//!
//! assert_eq!(session.dimensions(), Dimensions::new(250.0, 170.0));
//! ```

pub mod error;

pub use error::{DegradationAction, Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use resizekit_core::direction::{AxisSet, HorizontalEdge, ResizeDirection, VerticalEdge};
pub use resizekit_core::event::{
    InputEvent, InputSource, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerButton,
    PointerEvent, TouchEvent,
};
pub use resizekit_core::geometry::{Dimensions, PointerPosition};
pub use resizekit_core::shortcut::{KeyCombo, ShortcutMap, ShortcutMatch, ShortcutOptions};

// --- Layout re-exports -----------------------------------------------------

pub use resizekit_layout::{DerivedAxisPolicy, ResizeRequest, SizeConstraints, compute_dimensions};

// --- Runtime re-exports ----------------------------------------------------

pub use resizekit_runtime::{
    ContainerAttributes, ContentStyle, HandleDescriptor, InputBus, InputSurface, MeasureTarget,
    MeasuredBox, NoopReason, ResizableScope, ResizePolicyConfig, ResizeSession, SessionConfig,
    SessionEffect, SessionPhase, SessionState, SessionTransition, SessionView, SizeMode,
    SizeSource, TriggerMode,
};

/// Install the JSON log subscriber (filter from `RESIZEKIT_LOG`).
#[cfg(feature = "tracing-json")]
pub fn init_logging() -> Result<()> {
    resizekit_core::logging::init_json_logging().map_err(Error::from)
}

/// Load and validate a TOML policy file.
#[cfg(feature = "policy-config")]
pub fn load_policy(path: impl AsRef<std::path::Path>) -> Result<ResizePolicyConfig> {
    let policy = ResizePolicyConfig::from_toml_file(path)?.validated()?;
    Ok(policy)
}

/// Common imports.
pub mod prelude {
    pub use crate::{
        Dimensions, Error, InputEvent, PointerEvent, PointerPosition, ResizeDirection,
        ResizeSession, Result, SessionConfig, SizeConstraints, SizeSource, TouchEvent,
        TriggerMode,
    };

    pub use crate::{core, layout, runtime};
}

pub use resizekit_core as core;
pub use resizekit_layout as layout;
pub use resizekit_runtime as runtime;
