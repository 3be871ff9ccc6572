#![forbid(unsafe_code)]

//! Element measurement and resize observation for uncontrolled sessions.

use std::cell::Cell;
use std::rc::Rc;

use resizekit_core::geometry::Dimensions;

/// The element a measured session sizes itself from.
///
/// `observe` starts delivering resize notifications (the host then calls
/// `ResizeSession::observed_resize`), `disconnect` stops them.
pub trait MeasureTarget {
    /// Current rendered size.
    fn client_size(&self) -> Dimensions;

    fn observe(&self);

    fn disconnect(&self);
}

/// Active resize observation, disconnected exactly once.
pub struct ObservationGuard {
    target: Option<Rc<dyn MeasureTarget>>,
}

impl std::fmt::Debug for ObservationGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservationGuard")
            .field("active", &self.is_active())
            .finish()
    }
}

impl ObservationGuard {
    /// Start observing `target`.
    pub fn observe(target: Rc<dyn MeasureTarget>) -> Self {
        target.observe();
        tracing::debug!("resize observation started");
        Self {
            target: Some(target),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Disconnect. Returns `false` if already disconnected.
    pub fn release(&mut self) -> bool {
        let Some(target) = self.target.take() else {
            return false;
        };
        target.disconnect();
        tracing::debug!("resize observation disconnected");
        true
    }
}

impl Drop for ObservationGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// In-memory [`MeasureTarget`] whose size is set by the host or a test.
#[derive(Debug, Default)]
pub struct MeasuredBox {
    size: Cell<Dimensions>,
    observers: Cell<u32>,
}

impl MeasuredBox {
    #[must_use]
    pub fn new(size: Dimensions) -> Self {
        Self {
            size: Cell::new(size),
            observers: Cell::new(0),
        }
    }

    /// Change the rendered size (as a layout pass would).
    pub fn set_size(&self, size: Dimensions) {
        self.size.set(size);
    }

    /// Number of live observations.
    #[must_use]
    pub fn observer_count(&self) -> u32 {
        self.observers.get()
    }
}

impl MeasureTarget for MeasuredBox {
    fn client_size(&self) -> Dimensions {
        self.size.get()
    }

    fn observe(&self) {
        self.observers.set(self.observers.get() + 1);
    }

    fn disconnect(&self) {
        self.observers.set(self.observers.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_observes_and_disconnects_once() {
        let target = Rc::new(MeasuredBox::new(Dimensions::new(10.0, 20.0)));
        let mut guard = ObservationGuard::observe(target.clone());
        assert_eq!(target.observer_count(), 1);
        assert!(guard.release());
        assert!(!guard.release());
        drop(guard);
        assert_eq!(target.observer_count(), 0);
    }

    #[test]
    fn drop_disconnects() {
        let target = Rc::new(MeasuredBox::default());
        {
            let _guard = ObservationGuard::observe(target.clone());
            assert_eq!(target.observer_count(), 1);
        }
        assert_eq!(target.observer_count(), 0);
    }

    #[test]
    fn set_size_is_visible_to_client_size() {
        let target = MeasuredBox::new(Dimensions::new(1.0, 1.0));
        target.set_size(Dimensions::new(300.0, 150.0));
        assert_eq!(target.client_size(), Dimensions::new(300.0, 150.0));
    }
}
