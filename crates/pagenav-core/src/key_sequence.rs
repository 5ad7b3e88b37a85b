#![forbid(unsafe_code)]

//! Rolling two-key window for multi-key commands.
//!
//! [`KeySequenceBuffer`] remembers the last two keys typed in Normal mode.
//! It is a sliding window, never explicitly reset: every key shifts the
//! previous one out, so `N g g` recognizes `gg` on its third keystroke.
//!
//! # Invariants
//! 1. At most two keys are retained.
//! 2. A non-character key occupies a slot like any other key, so `g Esc g`
//!    does not form `gg`.
//! 3. Detection is a pure function of the window contents.
//!
//! # Example
//!
//! ```
//! use pagenav_core::key_sequence::{KeySequenceBuffer, KeySequenceKind};
//! use pagenav_core::event::KeyEvent;
//!
//! let mut buf = KeySequenceBuffer::new();
//! assert_eq!(buf.push(&KeyEvent::char('x')), None);
//! assert_eq!(buf.push(&KeyEvent::char('g')), None);
//! assert_eq!(buf.push(&KeyEvent::char('g')), Some(KeySequenceKind::JumpToTop));
//! ```

use crate::event::KeyEvent;

// ---------------------------------------------------------------------------
// KeySequenceKind
// ---------------------------------------------------------------------------

/// Recognized key sequence patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySequenceKind {
    /// `g g` - jump to the start of the document.
    JumpToTop,
}

impl KeySequenceKind {
    /// Human-readable name for this sequence.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::JumpToTop => "g g",
        }
    }
}

// ---------------------------------------------------------------------------
// KeySequenceBuffer
// ---------------------------------------------------------------------------

/// Sliding window over the last two keys.
///
/// Slots hold `Some(c)` for character keys and `None` for anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySequenceBuffer {
    prev: Option<char>,
    last: Option<char>,
}

impl KeySequenceBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prev: None,
            last: None,
        }
    }

    /// Shift `event` into the window and report a completed sequence, if any.
    pub fn push(&mut self, event: &KeyEvent) -> Option<KeySequenceKind> {
        self.prev = self.last;
        self.last = event.as_char();
        let kind = self.detect();
        if let Some(kind) = kind {
            crate::trace!(sequence = kind.name(), "key sequence completed");
        }
        kind
    }

    /// Whether the window currently holds exactly `first` then `second`.
    #[must_use]
    pub fn ends_with(&self, first: char, second: char) -> bool {
        self.prev == Some(first) && self.last == Some(second)
    }

    /// The sequence formed by the current window, if any.
    #[must_use]
    pub fn detect(&self) -> Option<KeySequenceKind> {
        if self.ends_with('g', 'g') {
            Some(KeySequenceKind::JumpToTop)
        } else {
            None
        }
    }

    /// Current window contents, oldest first. Non-character keys are skipped.
    #[must_use]
    pub fn contents(&self) -> String {
        self.prev.into_iter().chain(self.last).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    fn feed(buf: &mut KeySequenceBuffer, keys: &str) -> Vec<Option<KeySequenceKind>> {
        keys.chars().map(|c| buf.push(&KeyEvent::char(c))).collect()
    }

    #[test]
    fn xgg_triggers_once_on_third_key() {
        let mut buf = KeySequenceBuffer::new();
        let hits = feed(&mut buf, "xgg");
        assert_eq!(hits, vec![None, None, Some(KeySequenceKind::JumpToTop)]);
    }

    #[test]
    fn gxg_never_triggers() {
        let mut buf = KeySequenceBuffer::new();
        assert!(feed(&mut buf, "gxg").iter().all(Option::is_none));
    }

    #[test]
    fn window_slides_without_reset() {
        let mut buf = KeySequenceBuffer::new();
        let hits = feed(&mut buf, "Ngg");
        assert_eq!(hits[2], Some(KeySequenceKind::JumpToTop));
        assert_eq!(buf.contents(), "gg");
    }

    #[test]
    fn non_char_key_breaks_sequence() {
        let mut buf = KeySequenceBuffer::new();
        buf.push(&KeyEvent::char('g'));
        buf.push(&KeyEvent::new(KeyCode::Escape));
        assert_eq!(buf.push(&KeyEvent::char('g')), None);
        assert_eq!(buf.contents(), "g");
    }

    #[test]
    fn single_g_is_not_a_sequence() {
        let mut buf = KeySequenceBuffer::new();
        assert_eq!(buf.push(&KeyEvent::char('g')), None);
        assert_eq!(buf.contents(), "g");
    }

    #[test]
    fn sequence_kind_name() {
        assert_eq!(KeySequenceKind::JumpToTop.name(), "g g");
    }
}
