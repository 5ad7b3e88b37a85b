#![forbid(unsafe_code)]

//! Host seams used by the controller beyond hints and scrolling.

use pagenav_core::clock::PageClock;
use pagenav_core::element::ElementKind;
use pagenav_hints::HintHost;
use pagenav_scroll::ScrollHost;

use crate::mode::Mode;

/// The currently focused element.
pub trait FocusHost {
    /// Capability of the focused element, or `None` when the page body has
    /// focus. A focused query box may report itself as a text entry.
    fn focused_kind(&self) -> Option<ElementKind>;

    /// Remove focus from the focused element.
    fn blur_focused(&mut self);
}

/// Session history. Moving past either end is a no-op.
pub trait HistoryHost {
    /// Go back one entry.
    fn history_back(&mut self);

    /// Go forward one entry.
    fn history_forward(&mut self);
}

/// The find-in-page query input.
pub trait QueryBox {
    /// Make the box visible.
    fn show_query_box(&mut self);

    /// Hide the box.
    fn hide_query_box(&mut self);

    /// Give the box input focus.
    fn focus_query_box(&mut self);

    /// Take input focus away from the box.
    fn blur_query_box(&mut self);

    /// Whether the box is visible.
    fn query_box_visible(&self) -> bool;

    /// Text currently in the box.
    fn query_text(&self) -> String;

    /// Replace the displayed text.
    fn set_query_text(&mut self, text: &str);
}

/// Flags passed to [`FindCapability::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindOptions {
    /// Match case exactly.
    pub case_sensitive: bool,
    /// Search toward the start of the document.
    pub backwards: bool,
    /// Continue from the other end after the last match.
    pub wrap_around: bool,
    /// Only match whole words.
    pub whole_word: bool,
    /// Include subframes.
    pub search_frames: bool,
    /// Show the host's own find dialog.
    pub show_dialog: bool,
}

/// The host's find-in-page capability.
pub trait FindCapability {
    /// Highlight the next match of `query`; returns whether one was found.
    fn find(&mut self, query: &str, options: FindOptions) -> bool;
}

/// Receives every mode change (drives the "Insert Mode" indicator).
pub trait ModeIndicator {
    /// The controller entered `mode`.
    fn mode_changed(&mut self, mode: Mode);
}

/// Everything the controller needs from the host page.
pub trait NavHost:
    HintHost
    + ScrollHost
    + FocusHost
    + HistoryHost
    + QueryBox
    + FindCapability
    + ModeIndicator
    + PageClock
{
}

impl<T> NavHost for T where
    T: HintHost
        + ScrollHost
        + FocusHost
        + HistoryHost
        + QueryBox
        + FindCapability
        + ModeIndicator
        + PageClock
{
}
