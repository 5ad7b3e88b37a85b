#![forbid(unsafe_code)]

//! Scroll target selection and the host seam for scroll offsets.
//!
//! The page itself wins whenever it overflows on either axis. Otherwise the
//! largest visible container whose vertical overflow is `scroll` or `auto`
//! is used, and the page is the fallback when nothing qualifies (scrolling
//! then simply does not move anything).

use pagenav_core::element::ElementId;
use pagenav_core::geometry::{Rect, ViewportSource};
use pagenav_core::visibility::{RenderState, VisibilityPredicate};

use crate::direction::Axis;

/// What a scroll session moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollSurface {
    /// The page viewport.
    Page,
    /// An inner scroll container.
    Element(ElementId),
}

/// Computed `overflow-y` of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    /// Content spills out unclipped.
    #[default]
    Visible,
    /// Clipped, scrollable only programmatically.
    Hidden,
    /// Always scrollable.
    Scroll,
    /// Scrollable when content overflows.
    Auto,
    /// Clipped, never scrollable.
    Clip,
}

impl Overflow {
    /// Whether the user can scroll a container with this overflow.
    #[must_use]
    pub const fn is_scrollable(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }
}

/// A container that might become the scroll target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCandidate {
    /// Host node handle.
    pub id: ElementId,
    /// Viewport-relative bounding box.
    pub rect: Rect,
    /// Computed vertical overflow.
    pub overflow_y: Overflow,
    /// Rendering state.
    pub render: RenderState,
}

impl ScrollCandidate {
    /// A fully rendered candidate.
    #[must_use]
    pub fn new(id: ElementId, rect: Rect, overflow_y: Overflow) -> Self {
        Self {
            id,
            rect,
            overflow_y,
            render: RenderState::default(),
        }
    }
}

/// Scroll offsets of the page and its containers.
pub trait ScrollHost: ViewportSource {
    /// Block-level containers that could scroll, in document order.
    fn scroll_candidates(&self) -> Vec<ScrollCandidate>;

    /// Current offset of `surface` on `axis`.
    fn scroll_position(&self, surface: ScrollSurface, axis: Axis) -> f64;

    /// Jump `surface` to `position` on `axis`. The host clamps to its range.
    fn set_scroll_position(&mut self, surface: ScrollSurface, axis: Axis, position: f64);

    /// Smoothly scroll the page by a delta.
    fn smooth_scroll_page_by(&mut self, dx: f64, dy: f64);

    /// Smoothly scroll the page to an absolute offset.
    fn smooth_scroll_page_to(&mut self, x: f64, y: f64);
}

/// Pick the surface a new scroll session should move.
#[must_use]
pub fn select_surface<H: ScrollHost + ?Sized>(host: &H) -> ScrollSurface {
    let viewport = host.viewport();
    if viewport.has_overflow() {
        return ScrollSurface::Page;
    }

    let predicate = VisibilityPredicate;
    let mut best = ScrollSurface::Page;
    let mut largest = 0.0;
    for candidate in host.scroll_candidates() {
        if !candidate.overflow_y.is_scrollable()
            || !predicate.is_visible(&candidate.render, &candidate.rect, &viewport)
        {
            continue;
        }
        let area = candidate.rect.area();
        if area > largest {
            largest = area;
            best = ScrollSurface::Element(candidate.id);
        }
    }
    best
}
