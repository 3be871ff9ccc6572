#![forbid(unsafe_code)]

//! Keyboard shortcuts for starting and stopping a resize.
//!
//! The default table binds `Enter` to a bottom-right drag started from the
//! handle's anchor point and `Escape` to ending the active drag.

use resizekit_core::direction::ResizeDirection;
use resizekit_core::event::KeyCode;
use resizekit_core::shortcut::{KeyCombo, ShortcutMap, ShortcutOptions};

use crate::session::SessionTransition;

/// What a resolved shortcut asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    StartResize(ResizeDirection),
    StopResize,
}

/// Enter starts a bottom-right resize, Escape stops it.
#[must_use]
pub fn default_shortcuts() -> ShortcutMap<ShortcutAction> {
    ShortcutMap::new(ShortcutOptions::default())
        .bind(
            KeyCombo::new(KeyCode::Enter),
            ShortcutAction::StartResize(ResizeDirection::BottomRight),
        )
        .bind(KeyCombo::new(KeyCode::Escape), ShortcutAction::StopResize)
}

/// Result of handing a key to the session when a binding matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDispatch {
    pub action: ShortcutAction,
    /// Host should suppress the key's default handling.
    pub prevent_default: bool,
    /// Host should stop propagating the key.
    pub stop_propagation: bool,
    pub transition: SessionTransition,
}
