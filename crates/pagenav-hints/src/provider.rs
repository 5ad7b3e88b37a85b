#![forbid(unsafe_code)]

//! Actionable element enumeration.
//!
//! The host exposes its content tree through [`ContentTree`]; an
//! [`ElementProvider`] turns that into the ordered list of actionable
//! elements a hint session labels. The default provider keeps document
//! order and drops everything the [`VisibilityPredicate`] rejects.

use pagenav_core::element::{ActionableElement, ElementId, ElementRole};
use pagenav_core::geometry::{Rect, ViewportSource};
pub use pagenav_core::visibility::{RenderState, VisibilityPredicate};

/// One actionable node as reported by the host, in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementNode {
    /// Host node handle.
    pub id: ElementId,
    /// Why the node is actionable.
    pub role: ElementRole,
    /// Viewport-relative bounding box.
    pub rect: Rect,
    /// Rendering state.
    pub render: RenderState,
}

impl ElementNode {
    /// A fully rendered node.
    #[must_use]
    pub fn new(id: ElementId, role: ElementRole, rect: Rect) -> Self {
        Self {
            id,
            role,
            rect,
            render: RenderState::default(),
        }
    }

    /// Replace the rendering state (builder).
    #[must_use]
    pub fn with_render(mut self, render: RenderState) -> Self {
        self.render = render;
        self
    }
}

/// Read access to the host's content tree.
pub trait ContentTree: ViewportSource {
    /// Every node with an actionable role, in document order.
    fn actionable_nodes(&self) -> Vec<ElementNode>;
}

// ---------------------------------------------------------------------------
// ElementProvider
// ---------------------------------------------------------------------------

/// Source of the elements a hint session labels.
pub trait ElementProvider {
    /// Visible actionable elements in a stable order.
    fn visible_elements(&self, tree: &dyn ContentTree) -> Vec<ActionableElement>;
}

/// Document-order provider filtered by a [`VisibilityPredicate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibleElementProvider {
    predicate: VisibilityPredicate,
}

impl VisibleElementProvider {
    /// Create a provider using `predicate`.
    #[must_use]
    pub const fn new(predicate: VisibilityPredicate) -> Self {
        Self { predicate }
    }
}

impl ElementProvider for VisibleElementProvider {
    fn visible_elements(&self, tree: &dyn ContentTree) -> Vec<ActionableElement> {
        let viewport = tree.viewport();
        tree.actionable_nodes()
            .into_iter()
            .filter(|node| self.predicate.is_visible(&node.render, &node.rect, &viewport))
            .map(|node| ActionableElement::new(node.id, node.role, node.rect))
            .collect()
    }
}
