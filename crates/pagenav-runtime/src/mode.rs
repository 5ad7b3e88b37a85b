#![forbid(unsafe_code)]

//! Input modes.

use std::fmt;

/// Which component owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Keys go through the command table.
    #[default]
    Normal,
    /// Keys go to the page untouched; only Escape is intercepted.
    Insert,
    /// A hint session consumes every key.
    HintActive,
    /// The query box has focus; Enter submits and Escape hides it.
    FindBoxFocused,
}

impl Mode {
    /// Lowercase name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Insert => "insert",
            Self::HintActive => "hint",
            Self::FindBoxFocused => "find",
        }
    }

    /// Whether this mode consumes keystrokes exclusively.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::HintActive | Self::FindBoxFocused)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn only_hint_and_find_are_exclusive() {
        assert!(Mode::HintActive.is_exclusive());
        assert!(Mode::FindBoxFocused.is_exclusive());
        assert!(!Mode::Normal.is_exclusive());
        assert!(!Mode::Insert.is_exclusive());
        assert_eq!(Mode::FindBoxFocused.to_string(), "find");
    }
}
