#![forbid(unsafe_code)]

//! Drag-session runtime for resizekit.
//!
//! # Role in resizekit
//! `resizekit-runtime` owns everything stateful: the [`ResizeSession`]
//! controller, the listener pair a drag holds on the host surface, the
//! resize observation of measured elements, and the render descriptors the
//! host derives from session state.
//!
//! # Quick start
//!
//! ```
//! use std::rc::Rc;
//! use resizekit_core::{Dimensions, ResizeDirection};
//! use resizekit_runtime::{InputBus, ResizeSession, SessionConfig, SizeSource};
//!
//! let bus = Rc::new(InputBus::new());
//! let mut session = ResizeSession::new(
//!     SessionConfig::default(),
//!     SizeSource::Controlled(Dimensions::new(200.0, 100.0)),
//! )
//! .with_surface(bus.clone());
//!
//! session.start_drag(0.0, 0.0, ResizeDirection::Right);
//! assert_eq!(bus.listener_count(), 2);
//! session.update_drag(40.0, 0.0, false);
//! session.end_drag();
//!
//! assert_eq!(session.dimensions(), Dimensions::new(240.0, 100.0));
//! assert_eq!(bus.listener_count(), 0);
//! ```
//!
//! # Feature flags
//! - `policy-config`: load [`ResizePolicyConfig`] from TOML/JSON.

pub mod config;
pub mod context;
pub mod handle;
pub mod keyboard;
pub mod measure;
pub mod session;
pub mod subscription;
pub mod trigger;

pub use config::{ConfigError, ResizePolicyConfig};
pub use context::{ContextError, ResizableScope, SessionView, SharedSession};
pub use handle::{ContainerAttributes, ContentStyle, HandleDescriptor};
pub use keyboard::{KeyDispatch, ShortcutAction, default_shortcuts};
pub use measure::{MeasureTarget, MeasuredBox, ObservationGuard};
pub use session::{
    ChangeCallback, DragSnapshot, NoopReason, ResizeSession, SessionConfig, SessionEffect,
    SessionPhase, SessionState, SessionTransition, SizeMode, SizeSource,
};
pub use subscription::{
    DragSubscription, InputBus, InputSurface, ListenerChannel, ListenerId, ListenerKind,
};
pub use trigger::{ParseTriggerModeError, TriggerMode};
