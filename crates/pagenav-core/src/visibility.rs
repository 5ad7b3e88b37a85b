#![forbid(unsafe_code)]

//! Element visibility.
//!
//! An element counts as visible only when it is rendered, not hidden by
//! style, not skipped by content visibility, has non-zero opacity, and its
//! bounding box lies entirely inside the viewport.

use crate::geometry::{Rect, Viewport};

/// Rendering state of a node as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// The node has a layout box (not `display: none` or detached).
    pub rendered: bool,
    /// `visibility: hidden` or `collapse` applies.
    pub visibility_hidden: bool,
    /// `content-visibility` skipped the node's contents.
    pub content_skipped: bool,
    /// Effective opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            rendered: true,
            visibility_hidden: false,
            content_skipped: false,
            opacity: 1.0,
        }
    }
}

impl RenderState {
    /// Whether style allows the node to be seen at all, ignoring geometry.
    #[inline]
    #[must_use]
    pub fn is_painted(&self) -> bool {
        self.rendered && !self.visibility_hidden && !self.content_skipped && self.opacity > 0.0
    }
}

/// Visibility test shared by hint enumeration and scroll-target selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityPredicate;

impl VisibilityPredicate {
    /// Whether a node with `render` state and viewport-relative `rect` is
    /// fully visible.
    #[must_use]
    pub fn is_visible(&self, render: &RenderState, rect: &Rect, viewport: &Viewport) -> bool {
        render.is_painted() && viewport.bounds().contains_rect(rect)
    }
}
