#![forbid(unsafe_code)]

//! Canonical keyboard event types.
//!
//! Every keystroke the host page observes is normalized into a [`KeyEvent`]
//! before it reaches the mode controller. All types derive `Clone`,
//! `PartialEq`, and `Eq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press`; held keys produce `Repeat` events
//! - `Modifiers` use bitflags for easy combination
//! - Host key names follow the DOM `KeyboardEvent.key` vocabulary; see
//!   [`KeyCode::from_key_name`]

use bitflags::bitflags;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press, repeat, or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A press of `code` with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a press event for a character key.
    ///
    /// Uppercase ASCII letters imply the Shift modifier, mirroring what a
    /// browser reports for a shifted letter.
    #[must_use]
    pub fn char(c: char) -> Self {
        let event = Self::new(KeyCode::Char(c));
        if c.is_ascii_uppercase() {
            event.with_modifiers(Modifiers::SHIFT)
        } else {
            event
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// The release counterpart of this event.
    #[must_use]
    pub const fn released(self) -> Self {
        self.with_kind(KeyEventKind::Release)
    }

    /// Whether this is the character key `c`.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// The character carried by this event, if any.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Whether this is the Escape key.
    #[must_use]
    pub const fn is_escape(&self) -> bool {
        matches!(self.code, KeyCode::Escape)
    }

    /// Whether this event is a key release.
    #[must_use]
    pub const fn is_release(&self) -> bool {
        matches!(self.kind, KeyEventKind::Release)
    }

    /// Ctrl held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Alt held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Shift held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Meta/Cmd held.
    #[must_use]
    pub const fn super_key(&self) -> bool {
        self.modifiers.contains(Modifiers::SUPER)
    }
}

/// Key codes for keyboard events.
///
/// Only keys the engine reacts to get their own variant. Everything else the
/// host reports collapses to [`KeyCode::Other`] and passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable key, already case-resolved by the host.
    Char(char),
    /// Enter/Return; submits the query box.
    Enter,
    /// Escape; cancels hints, leaves Insert mode, stops scrolling.
    Escape,
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// An arrow key.
    Arrow(ArrowKey),
    /// A bare modifier key (Shift, Control, Alt, Meta) pressed on its own.
    Modifier,
    /// Any other named key.
    Other,
}

/// Arrow key directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` name to a key code.
    ///
    /// Single-character names become [`KeyCode::Char`]; unknown multi-character
    /// names become [`KeyCode::Other`].
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Char(c);
        }
        match name {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Backspace" => Self::Backspace,
            "Tab" => Self::Tab,
            "ArrowUp" => Self::Arrow(ArrowKey::Up),
            "ArrowDown" => Self::Arrow(ArrowKey::Down),
            "ArrowLeft" => Self::Arrow(ArrowKey::Left),
            "ArrowRight" => Self::Arrow(ArrowKey::Right),
            "Shift" | "Control" | "Alt" | "Meta" | "AltGraph" => Self::Modifier,
            _ => Self::Other,
        }
    }
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
    /// Modifier keys that can be held during a key event.
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
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// Parse a single modifier name (`ctrl`, `alt`, `shift`, `super`/`meta`).
    #[must_use]
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Self::CTRL),
            "alt" | "option" => Some(Self::ALT),
            "shift" => Some(Self::SHIFT),
            "super" | "meta" | "cmd" => Some(Self::SUPER),
            _ => None,
        }
    }
}
