#![forbid(unsafe_code)]

//! Resize session controller.
//!
//! A [`ResizeSession`] turns handle presses and global movement events into
//! calls to [`compute_dimensions`], owns the observable [`SessionState`], and
//! notifies the host through an optional change callback.
//!
//! # Lifecycle
//!
//! ```text
//!          start_drag / pointer_down / touch_start / Enter
//!   Idle ───────────────────────────────────────────────▶ Dragging
//!    ▲                                                      │
//!    │            end_drag / PointerUp / TouchEnd / Escape  │ update_drag
//!    └──────────────────────────────────────────────────────┘ (self-loop)
//! ```
//!
//! Every operation returns a [`SessionTransition`] with a monotonically
//! increasing `transition_id`. Out-of-order or malformed input is never an
//! error: it yields a [`SessionEffect::Noop`] carrying a [`NoopReason`] and
//! leaves the state untouched.
//!
//! # Resources
//!
//! A drag holds a [`DragSubscription`] (one move and one end listener on the
//! attached [`InputSurface`]); a measured session holds an
//! [`ObservationGuard`]. Both are released by `end_drag`/`teardown` or when
//! the session is dropped, and never twice.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use resizekit_core::direction::ResizeDirection;
use resizekit_core::event::{
    InputEvent, InputSource, KeyEvent, PointerButton, PointerEvent, TouchEvent,
};
use resizekit_core::geometry::{Dimensions, PointerPosition};
use resizekit_core::shortcut::ShortcutMap;
use resizekit_layout::{DerivedAxisPolicy, ResizeRequest, SizeConstraints, compute_dimensions};

use crate::handle::{ContainerAttributes, ContentStyle, HandleDescriptor};
use crate::keyboard::{KeyDispatch, ShortcutAction, default_shortcuts};
use crate::measure::{MeasureTarget, ObservationGuard};
use crate::subscription::{DragSubscription, InputSurface};
use crate::trigger::TriggerMode;

/// Host callback receiving new dimensions.
pub type ChangeCallback = Box<dyn FnMut(Dimensions)>;

/// Static behavior of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub constraints: SizeConstraints,
    /// Lock the aspect ratio for every update, not only while Shift is held.
    pub aspect_ratio: bool,
    pub trigger_mode: TriggerMode,
    pub derived_axis: DerivedAxisPolicy,
    /// Whether `handle_key` resolves the Enter/Escape shortcuts.
    pub shortcuts_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            constraints: SizeConstraints::default(),
            aspect_ratio: false,
            trigger_mode: TriggerMode::default(),
            derived_axis: DerivedAxisPolicy::default(),
            shortcuts_enabled: true,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub const fn with_constraints(mut self, constraints: SizeConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub const fn with_aspect_ratio(mut self, locked: bool) -> Self {
        self.aspect_ratio = locked;
        self
    }

    #[must_use]
    pub const fn with_trigger_mode(mut self, mode: TriggerMode) -> Self {
        self.trigger_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_derived_axis(mut self, policy: DerivedAxisPolicy) -> Self {
        self.derived_axis = policy;
        self
    }

    #[must_use]
    pub const fn with_shortcuts(mut self, enabled: bool) -> Self {
        self.shortcuts_enabled = enabled;
        self
    }
}

/// Where the session's size comes from.
pub enum SizeSource {
    /// The host owns the size and pushes it through `sync_controlled`.
    Controlled(Dimensions),
    /// The size is read from an element and re-read on resize observations.
    Measured(Rc<dyn MeasureTarget>),
}

impl fmt::Debug for SizeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled(dimensions) => f.debug_tuple("Controlled").field(dimensions).finish(),
            Self::Measured(_) => f.write_str("Measured(..)"),
        }
    }
}

/// Size ownership mode, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeMode {
    Controlled,
    Measured,
}

/// Externally observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionState {
    pub dimensions: Dimensions,
    pub is_resizing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Dragging,
}

/// Values captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    pub origin: PointerPosition,
    pub start: Dimensions,
    pub direction: ResizeDirection,
    pub source: InputSource,
}

/// Why an operation left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoopReason {
    IdleWithoutActiveDrag,
    DragAlreadyInProgress,
    NonFiniteInput,
    EmptyTouch,
    /// Only the primary button (left mouse, pen contact) grabs a handle.
    NonPrimaryButton,
    SourceMismatch,
    NotControlled,
    NotMeasured,
    MissingHandleAnchor,
    /// Down/start and key events belong to handles, not the global surface.
    NotSurfaceEvent,
    UnboundKey,
    SessionTornDown,
}

/// What one operation did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEffect {
    DragStarted {
        direction: ResizeDirection,
        source: InputSource,
        origin: PointerPosition,
        start: Dimensions,
    },
    Resized {
        dimensions: Dimensions,
        changed: bool,
        aspect_locked: bool,
        notified: bool,
    },
    DragEnded {
        dimensions: Dimensions,
        notified: bool,
    },
    Synced {
        dimensions: Dimensions,
    },
    Remeasured {
        dimensions: Dimensions,
    },
    TornDown {
        released_drag: bool,
        released_observation: bool,
    },
    Noop {
        reason: NoopReason,
    },
}

/// One session step with its diagnostic fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTransition {
    pub transition_id: u64,
    pub from: SessionPhase,
    pub to: SessionPhase,
    pub effect: SessionEffect,
}

impl SessionTransition {
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self.effect, SessionEffect::Noop { .. })
    }

    /// The no-op reason, if this step was ignored.
    #[must_use]
    pub const fn noop_reason(&self) -> Option<NoopReason> {
        match self.effect {
            SessionEffect::Noop { reason } => Some(reason),
            _ => None,
        }
    }
}

struct ActiveDrag {
    snapshot: DragSnapshot,
    /// Last computed size; reported on completion even if the host re-synced.
    latest: Dimensions,
    subscription: Option<DragSubscription>,
}

/// Drag-tracking controller for one resizable element.
pub struct ResizeSession {
    config: SessionConfig,
    mode: SizeMode,
    state: SessionState,
    drag: Option<ActiveDrag>,
    surface: Option<Rc<dyn InputSurface>>,
    measure: Option<Rc<dyn MeasureTarget>>,
    observation: Option<ObservationGuard>,
    on_change: Option<ChangeCallback>,
    shortcuts: ShortcutMap<ShortcutAction>,
    anchors: BTreeMap<ResizeDirection, PointerPosition>,
    transition_counter: u64,
    torn_down: bool,
}

impl fmt::Debug for ResizeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSession")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("drag", &self.drag_snapshot())
            .field("transition_counter", &self.transition_counter)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl ResizeSession {
    /// Create a session. Initial dimensions are clamped into the bounds.
    ///
    /// A measured session reads the target's size immediately and starts a
    /// resize observation that lives until teardown.
    pub fn new(config: SessionConfig, source: SizeSource) -> Self {
        let (mode, raw, measure, observation) = match source {
            SizeSource::Controlled(dimensions) => (SizeMode::Controlled, dimensions, None, None),
            SizeSource::Measured(target) => {
                let size = target.client_size();
                let guard = ObservationGuard::observe(Rc::clone(&target));
                (SizeMode::Measured, size, Some(target), Some(guard))
            }
        };
        let mut shortcuts = default_shortcuts();
        shortcuts.set_active(config.shortcuts_enabled);
        let dimensions = sanitize(raw, &config.constraints);
        tracing::debug!(
            ?mode,
            width = dimensions.width,
            height = dimensions.height,
            trigger = %config.trigger_mode,
            "resize session created"
        );
        Self {
            config,
            mode,
            state: SessionState {
                dimensions,
                is_resizing: false,
            },
            drag: None,
            surface: None,
            measure,
            observation,
            on_change: None,
            shortcuts,
            anchors: BTreeMap::new(),
            transition_counter: 0,
            torn_down: false,
        }
    }

    /// Attach the global surface drag listeners are registered on.
    #[must_use]
    pub fn with_surface(mut self, surface: Rc<dyn InputSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Register the change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(Dimensions) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Replace (or clear) the change callback.
    pub fn set_on_change(&mut self, callback: Option<ChangeCallback>) {
        self.on_change = callback;
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn mode(&self) -> SizeMode {
        self.mode
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.state.dimensions
    }

    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.state.is_resizing
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        if self.drag.is_some() {
            SessionPhase::Dragging
        } else {
            SessionPhase::Idle
        }
    }

    /// Snapshot of the active drag, if any.
    #[must_use]
    pub fn drag_snapshot(&self) -> Option<DragSnapshot> {
        self.drag.as_ref().map(|drag| drag.snapshot)
    }

    /// Whether drag listeners are currently attached.
    #[must_use]
    pub fn holds_drag_listeners(&self) -> bool {
        self.drag
            .as_ref()
            .and_then(|drag| drag.subscription.as_ref())
            .is_some_and(DragSubscription::is_active)
    }

    /// Whether the resize observation is live.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observation
            .as_ref()
            .is_some_and(ObservationGuard::is_active)
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Last transition id handed out (0 before the first operation).
    #[must_use]
    pub const fn transition_count(&self) -> u64 {
        self.transition_counter
    }

    // --- controlled / measured size -------------------------------------

    /// Overwrite the size from the host (controlled mode only).
    pub fn sync_controlled(&mut self, dimensions: Dimensions) -> SessionTransition {
        let from = self.phase();
        if self.torn_down {
            return self.noop(from, NoopReason::SessionTornDown);
        }
        if self.mode != SizeMode::Controlled {
            return self.noop(from, NoopReason::NotControlled);
        }
        if !dimensions.is_finite() {
            return self.noop(from, NoopReason::NonFiniteInput);
        }
        let dimensions = self.config.constraints.clamp(dimensions);
        self.state.dimensions = dimensions;
        self.finish(from, SessionEffect::Synced { dimensions })
    }

    /// Re-read the measured element after a resize observation fired.
    pub fn observed_resize(&mut self) -> SessionTransition {
        let from = self.phase();
        if self.torn_down {
            return self.noop(from, NoopReason::SessionTornDown);
        }
        let Some(target) = self.measure.as_ref() else {
            return self.noop(from, NoopReason::NotMeasured);
        };
        let size = target.client_size();
        if !size.is_finite() {
            return self.noop(from, NoopReason::NonFiniteInput);
        }
        let dimensions = self.config.constraints.clamp(size);
        self.state.dimensions = dimensions;
        self.finish(from, SessionEffect::Remeasured { dimensions })
    }

    // --- drag lifecycle -------------------------------------------------

    /// Begin a pointer drag at `(x, y)` from the `direction` handle.
    pub fn start_drag(&mut self, x: f64, y: f64, direction: ResizeDirection) -> SessionTransition {
        self.begin(PointerPosition::new(x, y), direction, InputSource::Pointer)
    }

    /// Apply the pointer position `(x, y)` to the active drag.
    ///
    /// `modifier_active` is the aspect-lock modifier (Shift) for this event;
    /// the session-level `aspect_ratio` flag is OR-ed in.
    pub fn update_drag(&mut self, x: f64, y: f64, modifier_active: bool) -> SessionTransition {
        let from = self.phase();
        if self.torn_down {
            return self.noop(from, NoopReason::SessionTornDown);
        }
        let Some(snapshot) = self.drag_snapshot() else {
            return self.noop(from, NoopReason::IdleWithoutActiveDrag);
        };
        let position = PointerPosition::new(x, y);
        if !position.is_finite() {
            return self.noop(from, NoopReason::NonFiniteInput);
        }

        let (delta_x, delta_y) = position.delta_from(snapshot.origin);
        let aspect_locked = modifier_active || self.config.aspect_ratio;
        let request =
            ResizeRequest::new(snapshot.direction, snapshot.start, self.config.constraints)
                .with_delta(delta_x, delta_y)
                .with_aspect_lock(aspect_locked)
                .with_derived_axis(self.config.derived_axis);
        let dimensions = compute_dimensions(&request);

        if let Some(drag) = self.drag.as_mut() {
            drag.latest = dimensions;
        }
        let changed = dimensions != self.state.dimensions;
        if changed {
            self.state.dimensions = dimensions;
        }
        let notified = self.config.trigger_mode.fires_on_update() && self.notify(dimensions);
        self.finish(
            from,
            SessionEffect::Resized {
                dimensions,
                changed,
                aspect_locked,
                notified,
            },
        )
    }

    /// Finish the active drag and release its listeners.
    pub fn end_drag(&mut self) -> SessionTransition {
        let from = self.phase();
        if self.torn_down {
            return self.noop(from, NoopReason::SessionTornDown);
        }
        let Some(mut drag) = self.drag.take() else {
            return self.noop(from, NoopReason::IdleWithoutActiveDrag);
        };
        if let Some(subscription) = drag.subscription.as_mut() {
            subscription.release();
        }
        self.state.is_resizing = false;
        let dimensions = drag.latest;
        let notified = self.config.trigger_mode.fires_on_completion() && self.notify(dimensions);
        self.finish(
            from,
            SessionEffect::DragEnded {
                dimensions,
                notified,
            },
        )
    }

    /// Release every listener and observation. Idempotent.
    ///
    /// Dimensions stay where they are and the callback is not invoked. All
    /// later operations are ignored with [`NoopReason::SessionTornDown`].
    pub fn teardown(&mut self) -> SessionTransition {
        let from = self.phase();
        let (released_drag, released_observation) = self.release_resources();
        self.state.is_resizing = false;
        self.torn_down = true;
        self.finish(
            from,
            SessionEffect::TornDown {
                released_drag,
                released_observation,
            },
        )
    }

    fn begin(
        &mut self,
        origin: PointerPosition,
        direction: ResizeDirection,
        source: InputSource,
    ) -> SessionTransition {
        let from = self.phase();
        if self.torn_down {
            return self.noop(from, NoopReason::SessionTornDown);
        }
        if self.drag.is_some() {
            return self.noop(from, NoopReason::DragAlreadyInProgress);
        }
        if !origin.is_finite() {
            return self.noop(from, NoopReason::NonFiniteInput);
        }

        let start = self.state.dimensions;
        let snapshot = DragSnapshot {
            origin,
            start,
            direction,
            source,
        };
        let subscription = self
            .surface
            .as_ref()
            .map(|surface| DragSubscription::acquire(Rc::clone(surface), source));
        self.drag = Some(ActiveDrag {
            snapshot,
            latest: start,
            subscription,
        });
        self.state.is_resizing = true;
        self.finish(
            from,
            SessionEffect::DragStarted {
                direction,
                source,
                origin,
                start,
            },
        )
    }

    fn release_resources(&mut self) -> (bool, bool) {
        let released_drag = self
            .drag
            .take()
            .and_then(|mut drag| drag.subscription.as_mut().map(DragSubscription::release))
            .unwrap_or(false);
        let released_observation = self
            .observation
            .as_mut()
            .is_some_and(ObservationGuard::release);
        (released_drag, released_observation)
    }

    fn notify(&mut self, dimensions: Dimensions) -> bool {
        match self.on_change.as_mut() {
            Some(callback) => {
                callback(dimensions);
                true
            }
            None => false,
        }
    }

    fn noop(&mut self, from: SessionPhase, reason: NoopReason) -> SessionTransition {
        self.finish(from, SessionEffect::Noop { reason })
    }

    fn finish(&mut self, from: SessionPhase, effect: SessionEffect) -> SessionTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        let transition = SessionTransition {
            transition_id: self.transition_counter,
            from,
            to: self.phase(),
            effect,
        };
        match effect {
            SessionEffect::Resized { dimensions, .. } => tracing::trace!(
                transition_id = transition.transition_id,
                width = dimensions.width,
                height = dimensions.height,
                "resize update"
            ),
            _ => tracing::debug!(
                transition_id = transition.transition_id,
                from = ?transition.from,
                to = ?transition.to,
                effect = ?effect,
                "session transition"
            ),
        }
        transition
    }

    // --- host input routing ---------------------------------------------

    /// Pointer pressed on the `direction` handle.
    pub fn pointer_down(
        &mut self,
        direction: ResizeDirection,
        event: &PointerEvent,
    ) -> SessionTransition {
        if event.button != PointerButton::Primary {
            let from = self.phase();
            return self.noop(from, NoopReason::NonPrimaryButton);
        }
        self.begin(event.position, direction, InputSource::Pointer)
    }

    /// Finger placed on the `direction` handle.
    pub fn touch_start(
        &mut self,
        direction: ResizeDirection,
        event: &TouchEvent,
    ) -> SessionTransition {
        match event.primary() {
            Some(position) => self.begin(position, direction, InputSource::Touch),
            None => {
                let from = self.phase();
                self.noop(from, NoopReason::EmptyTouch)
            }
        }
    }

    /// Route an event delivered on the global surface.
    ///
    /// Movement and release must come from the input family that started
    /// the drag. Touch movement never locks the aspect ratio on its own;
    /// only the session-level flag applies.
    pub fn dispatch(&mut self, event: &InputEvent) -> SessionTransition {
        let from = self.phase();
        if let InputEvent::Key(key) = event {
            return match self.handle_key(key) {
                Some(dispatch) => dispatch.transition,
                None => self.noop(from, NoopReason::UnboundKey),
            };
        }
        if let (Some(source), Some(snapshot)) = (event.source(), self.drag_snapshot())
            && source != snapshot.source
            && !self.torn_down
        {
            return self.noop(from, NoopReason::SourceMismatch);
        }
        match event {
            InputEvent::PointerMove(pointer) => {
                self.update_drag(pointer.position.x, pointer.position.y, pointer.shift())
            }
            InputEvent::TouchMove(touch) => match touch.primary() {
                Some(position) => self.update_drag(position.x, position.y, false),
                None => self.noop(from, NoopReason::EmptyTouch),
            },
            InputEvent::PointerUp(_) | InputEvent::TouchEnd(_) => self.end_drag(),
            InputEvent::PointerDown(_) | InputEvent::TouchStart(_) | InputEvent::Key(_) => {
                self.noop(from, NoopReason::NotSurfaceEvent)
            }
        }
    }

    // --- keyboard -------------------------------------------------------

    /// Record where the `direction` handle's centre sits on the surface.
    pub fn set_handle_anchor(&mut self, direction: ResizeDirection, position: PointerPosition) {
        self.anchors.insert(direction, position);
    }

    pub fn clear_handle_anchor(&mut self, direction: ResizeDirection) {
        self.anchors.remove(&direction);
    }

    #[must_use]
    pub fn handle_anchor(&self, direction: ResizeDirection) -> Option<PointerPosition> {
        self.anchors.get(&direction).copied()
    }

    /// Resolve `event` against the shortcut table and act on it.
    ///
    /// Returns `None` when no binding matched (the host should handle the key
    /// normally). A keyboard-started drag behaves like a pointer press at the
    /// handle's anchor, so subsequent pointer movement drives it.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<KeyDispatch> {
        let matched = self.shortcuts.resolve(event)?;
        let from = self.phase();
        let transition = match matched.action {
            ShortcutAction::StartResize(_) if self.torn_down => {
                self.noop(from, NoopReason::SessionTornDown)
            }
            ShortcutAction::StartResize(_) if self.state.is_resizing => {
                self.noop(from, NoopReason::DragAlreadyInProgress)
            }
            ShortcutAction::StartResize(direction) => match self.handle_anchor(direction) {
                Some(anchor) => self.begin(anchor, direction, InputSource::Pointer),
                None => self.noop(from, NoopReason::MissingHandleAnchor),
            },
            ShortcutAction::StopResize => self.end_drag(),
        };
        Some(KeyDispatch {
            action: matched.action,
            prevent_default: matched.prevent_default,
            stop_propagation: matched.stop_propagation,
            transition,
        })
    }

    /// Enable or disable shortcut resolution.
    pub fn set_shortcuts_enabled(&mut self, enabled: bool) {
        self.config.shortcuts_enabled = enabled;
        self.shortcuts.set_active(enabled);
    }

    // --- rendering helpers ----------------------------------------------

    #[must_use]
    pub fn handle_descriptor(&self, direction: ResizeDirection) -> HandleDescriptor {
        HandleDescriptor::new(direction, self.state.is_resizing)
    }

    #[must_use]
    pub fn container_attributes(&self) -> ContainerAttributes {
        ContainerAttributes::new(&self.state, &self.config.constraints)
    }

    #[must_use]
    pub fn content_style(&self) -> ContentStyle {
        ContentStyle::new(&self.state)
    }
}

impl Drop for ResizeSession {
    fn drop(&mut self) {
        let (released_drag, released_observation) = self.release_resources();
        if released_drag || released_observation {
            tracing::debug!(released_drag, released_observation, "resize session dropped");
        }
    }
}

/// Clamp an initial size, mapping non-finite axes to the minimum.
fn sanitize(dimensions: Dimensions, constraints: &SizeConstraints) -> Dimensions {
    let width = if dimensions.width.is_finite() {
        dimensions.width
    } else {
        constraints.min_width
    };
    let height = if dimensions.height.is_finite() {
        dimensions.height
    } else {
        constraints.min_height
    };
    constraints.clamp(Dimensions::new(width, height))
}
