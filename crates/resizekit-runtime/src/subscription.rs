#![forbid(unsafe_code)]

//! Scoped drag listeners on the host input surface.
//!
//! While a drag is active the session needs two global listeners on the
//! host surface: one for movement and one for release, both for the input
//! family that started the drag. [`DragSubscription`] owns that pair and
//! detaches it exactly once, either through [`DragSubscription::release`]
//! or on drop.
//!
//! [`InputBus`] is an in-memory [`InputSurface`] that records attached
//! listeners. Hosts can use it to decide which surface events to forward to
//! a session, and tests use it to assert that no listener leaks.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use resizekit_core::event::{InputEvent, InputSource};

/// Identifier handed out by an [`InputSurface`] for one attached listener.
pub type ListenerId = u64;

/// Kind of global listener a drag attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    Move,
    End,
}

/// One listener slot: what it listens for, from which input family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerChannel {
    pub kind: ListenerKind,
    pub source: InputSource,
}

impl ListenerChannel {
    #[must_use]
    pub const fn new(kind: ListenerKind, source: InputSource) -> Self {
        Self { kind, source }
    }

    /// Channel an event would be delivered on, if any.
    ///
    /// Down/start events and keys are delivered to handles, not to global
    /// listeners, so they map to `None`.
    #[must_use]
    pub const fn for_event(event: &InputEvent) -> Option<Self> {
        match event {
            InputEvent::PointerMove(_) => Some(Self::new(ListenerKind::Move, InputSource::Pointer)),
            InputEvent::PointerUp(_) => Some(Self::new(ListenerKind::End, InputSource::Pointer)),
            InputEvent::TouchMove(_) => Some(Self::new(ListenerKind::Move, InputSource::Touch)),
            InputEvent::TouchEnd(_) => Some(Self::new(ListenerKind::End, InputSource::Touch)),
            InputEvent::PointerDown(_) | InputEvent::TouchStart(_) | InputEvent::Key(_) => None,
        }
    }
}

/// Host event surface onto which drag listeners are attached.
///
/// On the web this is `document`; elsewhere it is whatever global event
/// bus delivers movement after the pointer leaves the handle.
pub trait InputSurface {
    /// Register a listener and return its id.
    fn attach(&self, channel: ListenerChannel) -> ListenerId;

    /// Remove a listener. Unknown ids are ignored.
    fn detach(&self, id: ListenerId);
}

/// Move + end listener pair held for the lifetime of one drag.
pub struct DragSubscription {
    surface: Rc<dyn InputSurface>,
    source: InputSource,
    listeners: Option<(ListenerId, ListenerId)>,
}

impl std::fmt::Debug for DragSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSubscription")
            .field("source", &self.source)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl DragSubscription {
    /// Attach one move and one end listener for `source`.
    pub fn acquire(surface: Rc<dyn InputSurface>, source: InputSource) -> Self {
        let move_id = surface.attach(ListenerChannel::new(ListenerKind::Move, source));
        let end_id = surface.attach(ListenerChannel::new(ListenerKind::End, source));
        tracing::debug!(?source, move_id, end_id, "drag listeners attached");
        Self {
            surface,
            source,
            listeners: Some((move_id, end_id)),
        }
    }

    /// Input family the listeners were attached for.
    #[must_use]
    pub const fn source(&self) -> InputSource {
        self.source
    }

    /// Whether the listeners are still attached.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.listeners.is_some()
    }

    /// Detach both listeners. Returns `false` if they were already detached.
    pub fn release(&mut self) -> bool {
        let Some((move_id, end_id)) = self.listeners.take() else {
            return false;
        };
        self.surface.detach(move_id);
        self.surface.detach(end_id);
        tracing::debug!(source = ?self.source, move_id, end_id, "drag listeners released");
        true
    }
}

impl Drop for DragSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// In-memory [`InputSurface`] with a listener registry.
#[derive(Debug, Default)]
pub struct InputBus {
    listeners: RefCell<BTreeMap<ListenerId, ListenerChannel>>,
    next_id: Cell<ListenerId>,
    detached_unknown: Cell<u64>,
}

impl InputBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Number of listeners attached on `channel`.
    #[must_use]
    pub fn count_for(&self, channel: ListenerChannel) -> usize {
        self.listeners
            .borrow()
            .values()
            .filter(|attached| **attached == channel)
            .count()
    }

    /// Whether `id` is currently attached.
    #[must_use]
    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.listeners.borrow().contains_key(&id)
    }

    /// Whether some listener would receive `event`.
    #[must_use]
    pub fn wants(&self, event: &InputEvent) -> bool {
        ListenerChannel::for_event(event).is_some_and(|channel| self.count_for(channel) > 0)
    }

    /// Number of `detach` calls that named an id not attached at the time.
    #[must_use]
    pub fn unknown_detaches(&self) -> u64 {
        self.detached_unknown.get()
    }
}

impl InputSurface for InputBus {
    fn attach(&self, channel: ListenerChannel) -> ListenerId {
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);
        self.listeners.borrow_mut().insert(id, channel);
        id
    }

    fn detach(&self, id: ListenerId) {
        if self.listeners.borrow_mut().remove(&id).is_none() {
            self.detached_unknown.set(self.detached_unknown.get() + 1);
            tracing::warn!(listener = id, "detach of unknown listener");
        }
    }
}
