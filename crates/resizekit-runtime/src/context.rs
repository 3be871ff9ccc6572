#![forbid(unsafe_code)]

//! Provider/consumer scope for a session.
//!
//! A resizable container provides its session to the handles and content
//! elements nested under it. Those consumers reach the session through a
//! [`ResizableScope`]; a consumer placed outside any container gets
//! [`ContextError::OutsideSession`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use resizekit_core::direction::ResizeDirection;

use crate::handle::{ContainerAttributes, ContentStyle, HandleDescriptor};
use crate::session::{ResizeSession, SessionState};

/// Shared handle to a session.
pub type SharedSession = Rc<RefCell<ResizeSession>>;

/// Structural misuse of the provider/consumer relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// A consumer asked for a session with no provider above it.
    OutsideSession,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideSession => {
                f.write_str("resizable consumer used outside of a resizable session")
            }
        }
    }
}

impl std::error::Error for ContextError {}

/// Read-only view handed to dependent display elements.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub state: SessionState,
    pub container: ContainerAttributes,
    pub content: ContentStyle,
}

impl SessionView {
    /// Descriptor for one handle, reflecting the current drag state.
    #[must_use]
    pub fn handle(&self, direction: ResizeDirection) -> HandleDescriptor {
        HandleDescriptor::new(direction, self.state.is_resizing)
    }
}

/// Scope through which consumers find their session.
#[derive(Debug, Clone, Default)]
pub struct ResizableScope {
    session: Option<SharedSession>,
}

impl ResizableScope {
    /// Scope with no provider.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Scope providing `session` to everything beneath it.
    #[must_use]
    pub fn provide(session: ResizeSession) -> Self {
        Self {
            session: Some(Rc::new(RefCell::new(session))),
        }
    }

    /// Scope providing an already-shared session.
    #[must_use]
    pub fn provide_shared(session: SharedSession) -> Self {
        Self {
            session: Some(session),
        }
    }

    #[must_use]
    pub const fn is_provided(&self) -> bool {
        self.session.is_some()
    }

    /// The shared session, for consumers that drive it (handles).
    pub fn session(&self) -> Result<SharedSession, ContextError> {
        self.session
            .as_ref()
            .map(Rc::clone)
            .ok_or(ContextError::OutsideSession)
    }

    /// Snapshot of the provided session's render state.
    pub fn view(&self) -> Result<SessionView, ContextError> {
        let shared = self.session.as_ref().ok_or(ContextError::OutsideSession)?;
        let session = shared.borrow();
        Ok(SessionView {
            state: session.state(),
            container: session.container_attributes(),
            content: session.content_style(),
        })
    }
}
