#![forbid(unsafe_code)]

//! In-memory page.
//!
//! Element and container rectangles are stored in document coordinates and
//! reported to the engine viewport-relative, so scrolling the page moves
//! them the way a real layout would. Every scroll offset is clamped to its
//! scrollable range.

use std::collections::BTreeMap;
use std::time::Duration;

use pagenav_core::clock::{DeterministicClock, PageClock};
use pagenav_core::element::{ElementId, ElementKind, ElementRole};
use pagenav_core::geometry::{Point, Rect, Viewport, ViewportSource};
use pagenav_core::visibility::RenderState;
use pagenav_hints::{
    ClickOptions, ContentTree, ElementActions, ElementNode, MarkerHandle, MarkerLayer,
};
use pagenav_runtime::{
    FindCapability, FindOptions, FocusHost, HistoryHost, Mode, ModeIndicator, QueryBox,
};
use pagenav_scroll::{Axis, Overflow, ScrollCandidate, ScrollHost, ScrollSurface};

/// An actionable element.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeElement {
    /// Node handle.
    pub id: ElementId,
    /// Actionable role.
    pub role: ElementRole,
    /// Document-space bounding box.
    pub rect: Rect,
    /// Rendering state.
    pub render: RenderState,
    /// Text value (inputs, text areas, editable regions).
    pub value: String,
    /// Caret offset while focused.
    pub caret: Option<usize>,
}

/// A block that may scroll on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeContainer {
    /// Node handle.
    pub id: ElementId,
    /// Document-space bounding box.
    pub rect: Rect,
    /// Computed `overflow-y`.
    pub overflow_y: Overflow,
    /// Rendering state.
    pub render: RenderState,
    /// Height of the scrolled content.
    pub content_height: f64,
    /// Current vertical offset.
    pub scroll_top: f64,
    /// Current horizontal offset (content is never wider than the box).
    pub scroll_left: f64,
}

/// Deterministic page implementing every host trait.
#[derive(Debug, Default)]
pub struct FakePage {
    clock: DeterministicClock,
    viewport: Viewport,
    elements: Vec<FakeElement>,
    containers: Vec<FakeContainer>,
    next_id: u64,
    focused: Option<ElementId>,
    markers: BTreeMap<MarkerHandle, (String, Point)>,
    next_marker: u64,
    clicks: Vec<(ElementId, ClickOptions)>,
    history: Vec<String>,
    history_index: usize,
    query_visible: bool,
    query_focused: bool,
    query_text: String,
    text: String,
    finds: Vec<(String, FindOptions)>,
    modes: Vec<Mode>,
    smooth_scrolls: usize,
}

impl FakePage {
    /// A page whose document exactly fits a `width` × `height` viewport.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport {
                width,
                height,
                document_width: width,
                document_height: height,
                ..Viewport::default()
            },
            history: vec!["about:blank".to_string()],
            ..Self::default()
        }
    }

    /// Set the document size (builder).
    #[must_use]
    pub fn with_document_size(mut self, width: f64, height: f64) -> Self {
        self.viewport.document_width = width;
        self.viewport.document_height = height;
        self
    }

    /// Set the text find-in-page searches (builder).
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Set the history entries and the current position (builder).
    #[must_use]
    pub fn with_history(mut self, entries: &[&str], index: usize) -> Self {
        self.history = entries.iter().map(|e| e.to_string()).collect();
        self.history_index = index.min(self.history.len().saturating_sub(1));
        self
    }

    fn alloc_id(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId(self.next_id)
    }

    /// Add an actionable element at a document-space rectangle.
    pub fn add_element(&mut self, role: ElementRole, rect: Rect) -> ElementId {
        let id = self.alloc_id();
        self.elements.push(FakeElement {
            id,
            role,
            rect,
            render: RenderState::default(),
            value: String::new(),
            caret: None,
        });
        id
    }

    /// Add a scroll container at a document-space rectangle.
    pub fn add_container(
        &mut self,
        rect: Rect,
        overflow_y: Overflow,
        content_height: f64,
    ) -> ElementId {
        let id = self.alloc_id();
        self.containers.push(FakeContainer {
            id,
            rect,
            overflow_y,
            render: RenderState::default(),
            content_height,
            scroll_top: 0.0,
            scroll_left: 0.0,
        });
        id
    }

    /// Replace an element's or container's rendering state.
    pub fn set_render(&mut self, id: ElementId, render: RenderState) {
        if let Some(e) = self.elements.iter_mut().find(|e| e.id == id) {
            e.render = render;
        }
        if let Some(c) = self.containers.iter_mut().find(|c| c.id == id) {
            c.render = render;
        }
    }

    /// Focus an element directly, as a mouse click would.
    pub fn focus(&mut self, id: ElementId) {
        self.query_focused = false;
        self.focused = Some(id);
        if let Some(e) = self.element_mut(id) {
            e.caret = Some(e.value.len());
        }
    }

    /// The focused element.
    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Look up an element.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&FakeElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut FakeElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Look up a container.
    #[must_use]
    pub fn container(&self, id: ElementId) -> Option<&FakeContainer> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Deliver a character the controller passed through, as the page's
    /// default key handling would: it lands in the focused query box or text
    /// field, and is otherwise ignored.
    pub fn type_char(&mut self, c: char) {
        if self.query_focused {
            self.query_text.push(c);
            return;
        }
        let Some(id) = self.focused else {
            return;
        };
        if let Some(e) = self.element_mut(id) {
            if e.role.kind().is_text_editing() {
                e.value.push(c);
                e.caret = Some(e.value.len());
            }
        }
    }

    /// Advance the clock.
    pub fn advance(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Page horizontal offset.
    #[must_use]
    pub fn scroll_x(&self) -> f64 {
        self.viewport.scroll_x
    }

    /// Page vertical offset.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y
    }

    /// Live markers in placement order.
    #[must_use]
    pub fn markers(&self) -> Vec<(String, Point)> {
        self.markers.values().cloned().collect()
    }

    /// Every synthesized click.
    #[must_use]
    pub fn clicks(&self) -> &[(ElementId, ClickOptions)] {
        &self.clicks
    }

    /// Every find call.
    #[must_use]
    pub fn finds(&self) -> &[(String, FindOptions)] {
        &self.finds
    }

    /// Every mode the indicator was told about.
    #[must_use]
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Whether the "Insert Mode" indicator is showing.
    #[must_use]
    pub fn insert_indicator_visible(&self) -> bool {
        self.modes.last() == Some(&Mode::Insert)
    }

    /// The current history entry.
    #[must_use]
    pub fn current_url(&self) -> &str {
        self.history.get(self.history_index).map_or("", String::as_str)
    }

    /// Whether the query box has focus.
    #[must_use]
    pub fn query_box_focused(&self) -> bool {
        self.query_focused
    }

    /// Number of smooth page scrolls requested.
    #[must_use]
    pub fn smooth_scrolls(&self) -> usize {
        self.smooth_scrolls
    }

    fn to_viewport(&self, rect: Rect) -> Rect {
        rect.translate(-self.viewport.scroll_x, -self.viewport.scroll_y)
    }

    fn set_page_scroll(&mut self, x: f64, y: f64) {
        self.viewport.scroll_x = x.clamp(0.0, self.viewport.overflow_x());
        self.viewport.scroll_y = y.clamp(0.0, self.viewport.overflow_y());
    }
}

impl PageClock for FakePage {
    fn now(&self) -> Duration {
        self.clock.now()
    }
}

impl ViewportSource for FakePage {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl ContentTree for FakePage {
    fn actionable_nodes(&self) -> Vec<ElementNode> {
        self.elements
            .iter()
            .map(|e| ElementNode::new(e.id, e.role, self.to_viewport(e.rect)).with_render(e.render))
            .collect()
    }
}

impl MarkerLayer for FakePage {
    fn place_marker(&mut self, text: &str, at: Point) -> MarkerHandle {
        self.next_marker += 1;
        let handle = MarkerHandle(self.next_marker);
        self.markers.insert(handle, (text.to_string(), at));
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.remove(&handle);
    }
}

impl ElementActions for FakePage {
    fn focus_text_entry(&mut self, id: ElementId) {
        self.focus(id);
    }

    fn focus_editable(&mut self, id: ElementId) {
        self.focus(id);
    }

    fn click(&mut self, id: ElementId, options: ClickOptions) {
        self.clicks.push((id, options));
    }
}

impl FocusHost for FakePage {
    fn focused_kind(&self) -> Option<ElementKind> {
        if self.query_focused {
            return Some(ElementKind::TextEntry);
        }
        self.focused
            .and_then(|id| self.element(id))
            .map(|e| e.role.kind())
    }

    fn blur_focused(&mut self) {
        if let Some(id) = self.focused.take() {
            if let Some(e) = self.element_mut(id) {
                e.caret = None;
            }
        }
    }
}

impl HistoryHost for FakePage {
    fn history_back(&mut self) {
        self.history_index = self.history_index.saturating_sub(1);
    }

    fn history_forward(&mut self) {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
        }
    }
}

impl QueryBox for FakePage {
    fn show_query_box(&mut self) {
        self.query_visible = true;
    }

    fn hide_query_box(&mut self) {
        self.query_visible = false;
        self.query_focused = false;
    }

    fn focus_query_box(&mut self) {
        self.focused = None;
        self.query_focused = true;
    }

    fn blur_query_box(&mut self) {
        self.query_focused = false;
    }

    fn query_box_visible(&self) -> bool {
        self.query_visible
    }

    fn query_text(&self) -> String {
        self.query_text.clone()
    }

    fn set_query_text(&mut self, text: &str) {
        self.query_text = text.to_string();
    }
}

impl FindCapability for FakePage {
    fn find(&mut self, query: &str, options: FindOptions) -> bool {
        self.finds.push((query.to_string(), options));
        // Mimic hosts that overwrite the input while searching.
        self.query_text.clear();
        if options.case_sensitive {
            self.text.contains(query)
        } else {
            self.text.to_lowercase().contains(&query.to_lowercase())
        }
    }
}

impl ModeIndicator for FakePage {
    fn mode_changed(&mut self, mode: Mode) {
        self.modes.push(mode);
    }
}

impl ScrollHost for FakePage {
    fn scroll_candidates(&self) -> Vec<ScrollCandidate> {
        self.containers
            .iter()
            .map(|c| ScrollCandidate {
                id: c.id,
                rect: self.to_viewport(c.rect),
                overflow_y: c.overflow_y,
                render: c.render,
            })
            .collect()
    }

    fn scroll_position(&self, surface: ScrollSurface, axis: Axis) -> f64 {
        match (surface, axis) {
            (ScrollSurface::Page, Axis::Vertical) => self.viewport.scroll_y,
            (ScrollSurface::Page, Axis::Horizontal) => self.viewport.scroll_x,
            (ScrollSurface::Element(id), axis) => self.container(id).map_or(0.0, |c| match axis {
                Axis::Vertical => c.scroll_top,
                Axis::Horizontal => c.scroll_left,
            }),
        }
    }

    fn set_scroll_position(&mut self, surface: ScrollSurface, axis: Axis, position: f64) {
        match surface {
            ScrollSurface::Page => match axis {
                Axis::Vertical => self.set_page_scroll(self.viewport.scroll_x, position),
                Axis::Horizontal => self.set_page_scroll(position, self.viewport.scroll_y),
            },
            ScrollSurface::Element(id) => {
                let Some(c) = self.containers.iter_mut().find(|c| c.id == id) else {
                    return;
                };
                match axis {
                    Axis::Vertical => {
                        let max = (c.content_height - c.rect.height).max(0.0);
                        c.scroll_top = position.clamp(0.0, max);
                    }
                    Axis::Horizontal => c.scroll_left = 0.0,
                }
            }
        }
    }

    fn smooth_scroll_page_by(&mut self, dx: f64, dy: f64) {
        self.smooth_scrolls += 1;
        self.set_page_scroll(self.viewport.scroll_x + dx, self.viewport.scroll_y + dy);
    }

    fn smooth_scroll_page_to(&mut self, x: f64, y: f64) {
        self.smooth_scrolls += 1;
        self.set_page_scroll(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_scroll_is_clamped() {
        let mut page = FakePage::new(100.0, 100.0).with_document_size(100.0, 300.0);
        page.set_scroll_position(ScrollSurface::Page, Axis::Vertical, 1000.0);
        assert_eq!(page.scroll_y(), 200.0);
        page.set_scroll_position(ScrollSurface::Page, Axis::Vertical, -5.0);
        assert_eq!(page.scroll_y(), 0.0);
        page.set_scroll_position(ScrollSurface::Page, Axis::Horizontal, 50.0);
        assert_eq!(page.scroll_x(), 0.0);
    }

    #[test]
    fn nodes_are_reported_viewport_relative() {
        let mut page = FakePage::new(100.0, 100.0).with_document_size(100.0, 500.0);
        let id = page.add_element(ElementRole::Link, Rect::new(10.0, 250.0, 20.0, 10.0));
        page.smooth_scroll_page_to(0.0, 200.0);
        let nodes = page.actionable_nodes();
        assert_eq!(nodes[0].id, id);
        assert_eq!(nodes[0].rect, Rect::new(10.0, 50.0, 20.0, 10.0));
    }

    #[test]
    fn history_stops_at_both_ends() {
        let mut page = FakePage::new(10.0, 10.0).with_history(&["a", "b"], 1);
        page.history_forward();
        assert_eq!(page.current_url(), "b");
        page.history_back();
        page.history_back();
        assert_eq!(page.current_url(), "a");
    }

    #[test]
    fn typing_only_reaches_text_fields() {
        let mut page = FakePage::new(100.0, 100.0);
        let input = page.add_element(ElementRole::Input, Rect::new(0.0, 0.0, 50.0, 10.0));
        let link = page.add_element(ElementRole::Link, Rect::new(0.0, 20.0, 50.0, 10.0));
        page.focus(link);
        page.type_char('x');
        page.focus(input);
        page.type_char('y');
        assert_eq!(page.element(input).map(|e| e.value.as_str()), Some("y"));
        assert_eq!(page.element(link).map(|e| e.value.as_str()), Some(""));
    }
}
