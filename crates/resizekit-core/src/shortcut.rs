#![forbid(unsafe_code)]

//! Keyboard shortcut parsing and action mapping.
//!
//! Shortcuts are written as `+`-separated combos such as `"Enter"`,
//! `"Shift+S"` or `"Ctrl+ArrowUp"`. The last segment is the key; every
//! preceding segment is a modifier. Matching is exact on modifiers and
//! case-insensitive on character keys.
//!
//! # Example
//!
//! ```
//! use resizekit_core::event::{KeyCode, KeyEvent, Modifiers};
//! use resizekit_core::shortcut::{ShortcutMap, ShortcutOptions};
//!
//! let map = ShortcutMap::new(ShortcutOptions::default())
//!     .bind_str("Shift+S", "save")
//!     .expect("valid combo");
//!
//! let event = KeyEvent::new(KeyCode::Char('S')).with_modifiers(Modifiers::SHIFT);
//! let hit = map.resolve(&event).expect("combo should match");
//! assert_eq!(hit.action, "save");
//! assert!(hit.prevent_default);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};

/// A parsed key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Combo for a bare key.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Combo with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Parse a combo such as `"Ctrl+Shift+Z"`.
    pub fn parse(input: &str) -> Result<Self, ShortcutParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut parts: Vec<&str> = trimmed.split('+').map(str::trim).collect();
        // "Ctrl++" binds the plus key itself.
        if trimmed.ends_with("++") {
            parts.truncate(parts.len().saturating_sub(2));
            parts.push("+");
        }
        let Some(key) = parts.pop() else {
            return Err(ShortcutParseError::Empty);
        };
        if key.is_empty() {
            return Err(ShortcutParseError::MissingKey {
                input: input.to_string(),
            });
        }

        let mut modifiers = Modifiers::NONE;
        for part in parts {
            modifiers |= parse_modifier(part).ok_or_else(|| {
                ShortcutParseError::UnknownModifier {
                    modifier: part.to_string(),
                }
            })?;
        }

        let code = parse_key(key).ok_or_else(|| ShortcutParseError::UnknownKey {
            key: key.to_string(),
        })?;

        Ok(Self { code, modifiers })
    }

    /// Whether `event` triggers this combo.
    ///
    /// Release events never match. Modifiers must match exactly, so
    /// `"Enter"` does not fire for Shift+Enter.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }
        if event.modifiers != self.modifiers {
            return false;
        }
        match (self.code, event.code) {
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                expected.to_lowercase().eq(actual.to_lowercase())
            }
            (expected, actual) => expected == actual,
        }
    }
}

impl FromStr for KeyCombo {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_modifier(name: &str) -> Option<Modifiers> {
    match name.to_ascii_lowercase().as_str() {
        "alt" | "option" => Some(Modifiers::ALT),
        "ctrl" | "control" => Some(Modifiers::CTRL),
        "meta" | "cmd" | "command" | "super" => Some(Modifiers::META),
        "shift" => Some(Modifiers::SHIFT),
        _ => None,
    }
}

fn parse_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(ch));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "escape" | "esc" => KeyCode::Escape,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "arrowup" | "up" => KeyCode::Up,
        "arrowdown" | "down" => KeyCode::Down,
        "arrowleft" | "left" => KeyCode::Left,
        "arrowright" | "right" => KeyCode::Right,
        "space" | "spacebar" => KeyCode::Char(' '),
        "plus" => KeyCode::Char('+'),
        other => {
            let number = other.strip_prefix('f')?.parse::<u8>().ok()?;
            if !(1..=24).contains(&number) {
                return None;
            }
            KeyCode::F(number)
        }
    };
    Some(code)
}

/// Errors produced while parsing a shortcut string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    Empty,
    MissingKey { input: String },
    UnknownModifier { modifier: String },
    UnknownKey { key: String },
}

impl fmt::Display for ShortcutParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "shortcut must not be empty"),
            Self::MissingKey { input } => write!(f, "shortcut {input:?} has no key"),
            Self::UnknownModifier { modifier } => {
                write!(f, "unknown shortcut modifier {modifier:?}")
            }
            Self::UnknownKey { key } => write!(f, "unknown shortcut key {key:?}"),
        }
    }
}

impl std::error::Error for ShortcutParseError {}

/// Behavior flags shared by every binding in a [`ShortcutMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutOptions {
    /// When false, nothing resolves.
    pub is_active: bool,
    /// Ask the host to suppress its default handling of a matched key.
    pub prevent_default: bool,
    /// Ask the host to stop propagating a matched key.
    pub stop_propagation: bool,
}

impl Default for ShortcutOptions {
    fn default() -> Self {
        Self {
            is_active: true,
            prevent_default: true,
            stop_propagation: false,
        }
    }
}

/// A resolved shortcut plus the host-side handling the options request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutMatch<A> {
    pub action: A,
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

/// Ordered key-combo → action table.
///
/// The first binding (in insertion order) that matches an event wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutMap<A> {
    bindings: Vec<(KeyCombo, A)>,
    options: ShortcutOptions,
}

impl<A> Default for ShortcutMap<A> {
    fn default() -> Self {
        Self::new(ShortcutOptions::default())
    }
}

impl<A> ShortcutMap<A> {
    /// Create an empty map.
    #[must_use]
    pub fn new(options: ShortcutOptions) -> Self {
        Self {
            bindings: Vec::new(),
            options,
        }
    }

    /// Add a binding.
    #[must_use]
    pub fn bind(mut self, combo: KeyCombo, action: A) -> Self {
        self.bindings.push((combo, action));
        self
    }

    /// Parse `combo` and add a binding.
    pub fn bind_str(self, combo: &str, action: A) -> Result<Self, ShortcutParseError> {
        let combo = KeyCombo::parse(combo)?;
        Ok(self.bind(combo, action))
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> ShortcutOptions {
        self.options
    }

    /// Enable or disable resolution.
    pub fn set_active(&mut self, active: bool) {
        self.options.is_active = active;
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the map has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate bindings in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyCombo, &A)> {
        self.bindings.iter().map(|(combo, action)| (combo, action))
    }
}

impl<A: Clone> ShortcutMap<A> {
    /// Resolve an event against the table.
    #[must_use]
    pub fn resolve(&self, event: &KeyEvent) -> Option<ShortcutMatch<A>> {
        if !self.options.is_active {
            return None;
        }
        self.bindings
            .iter()
            .find(|(combo, _)| combo.matches(event))
            .map(|(_, action)| ShortcutMatch {
                action: action.clone(),
                prevent_default: self.options.prevent_default,
                stop_propagation: self.options.stop_propagation,
            })
    }
}
