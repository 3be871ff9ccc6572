#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Hosts translate their native pointer, touch, and keyboard events into
//! these types before handing them to a resize session.
//!
//! # Design Notes
//!
//! - Coordinates are host surface coordinates (`clientX`/`clientY` on web).
//! - Touch events carry the list of *active* touch points; a touch end
//!   usually arrives with an empty list.
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

use crate::geometry::PointerPosition;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse/pen button pressed.
    PointerDown(PointerEvent),
    /// Mouse/pen moved.
    PointerMove(PointerEvent),
    /// Mouse/pen button released.
    PointerUp(PointerEvent),
    /// First finger placed.
    TouchStart(TouchEvent),
    /// Finger(s) moved.
    TouchMove(TouchEvent),
    /// Finger(s) lifted.
    TouchEnd(TouchEvent),
    /// A keyboard event.
    Key(KeyEvent),
}

impl InputEvent {
    /// Input family that produced this event, `None` for keyboard events.
    #[must_use]
    pub const fn source(&self) -> Option<InputSource> {
        match self {
            Self::PointerDown(_) | Self::PointerMove(_) | Self::PointerUp(_) => {
                Some(InputSource::Pointer)
            }
            Self::TouchStart(_) | Self::TouchMove(_) | Self::TouchEnd(_) => {
                Some(InputSource::Touch)
            }
            Self::Key(_) => None,
        }
    }
}

/// Input family that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Pointer,
    Touch,
}

/// Mouse/pen button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left mouse button / pen contact.
    #[default]
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Middle,
}

/// A pointer (mouse/pen) event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in surface coordinates.
    pub position: PointerPosition,
    /// Button involved in the event.
    pub button: PointerButton,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a primary-button pointer event without modifiers.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            position: PointerPosition::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a pointer event for a specific button.
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Check if Shift was held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// A touch event with its active touch points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEvent {
    /// Active touch points, primary touch first.
    pub touches: Vec<PointerPosition>,
}

impl TouchEvent {
    /// Create a touch event from active points.
    #[must_use]
    pub fn new(touches: impl IntoIterator<Item = PointerPosition>) -> Self {
        Self {
            touches: touches.into_iter().collect(),
        }
    }

    /// Single-finger touch event.
    #[must_use]
    pub fn single(x: f64, y: f64) -> Self {
        Self {
            touches: vec![PointerPosition::new(x, y)],
        }
    }

    /// Touch event with no active points (typical for touch end).
    #[must_use]
    pub fn released() -> Self {
        Self::default()
    }

    /// The primary (first) touch point, if any.
    #[must_use]
    pub fn primary(&self) -> Option<PointerPosition> {
        self.touches.first().copied()
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key (space is `Char(' ')`).
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Meta/Command key.
        const META  = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}
