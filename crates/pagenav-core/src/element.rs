#![forbid(unsafe_code)]

//! Element model shared by the hint and mode subsystems.
//!
//! The engine never holds live references into the host's content tree.
//! Elements are named by an opaque [`ElementId`] and classified once, at
//! enumeration time, into an [`ElementKind`] capability that later code
//! dispatches on with `match`.

use crate::geometry::Rect;

/// Opaque handle to a node in the host's content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// The markup role that made an element actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// A hyperlink.
    Link,
    /// A single-line form input.
    Input,
    /// A multi-line text field.
    TextArea,
    /// A disclosure summary toggle.
    Summary,
    /// A native button.
    Button,
    /// A non-button element exposing a button role.
    RoleButton,
    /// A content-editable region.
    ContentEditable,
}

impl ElementRole {
    /// Capability implied by this role.
    #[must_use]
    pub const fn kind(self) -> ElementKind {
        match self {
            Self::Input | Self::TextArea => ElementKind::TextEntry,
            Self::ContentEditable => ElementKind::ContentEditable,
            Self::Link | Self::Summary | Self::Button | Self::RoleButton => ElementKind::Clickable,
        }
    }
}

/// What can be done with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Accepts typed text with a value-based caret.
    TextEntry,
    /// Editable region whose caret is a document selection.
    ContentEditable,
    /// Activated with a synthesized click.
    Clickable,
}

impl ElementKind {
    /// Whether keystrokes aimed at this element are text editing.
    #[must_use]
    pub const fn is_text_editing(self) -> bool {
        matches!(self, Self::TextEntry | Self::ContentEditable)
    }
}

/// An actionable element captured at enumeration time.
///
/// The rectangle is cached when the hint session starts and is never
/// refreshed; the value must be discarded when its session ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionableElement {
    /// Host node handle.
    pub id: ElementId,
    /// Capability resolved from the element's role.
    pub kind: ElementKind,
    /// Viewport-relative bounding box at capture time.
    pub rect: Rect,
}

impl ActionableElement {
    /// Capture an element with the capability implied by `role`.
    #[must_use]
    pub const fn new(id: ElementId, role: ElementRole, rect: Rect) -> Self {
        Self {
            id,
            kind: role.kind(),
            rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_resolve_to_capabilities() {
        assert_eq!(ElementRole::Input.kind(), ElementKind::TextEntry);
        assert_eq!(ElementRole::TextArea.kind(), ElementKind::TextEntry);
        assert_eq!(ElementRole::ContentEditable.kind(), ElementKind::ContentEditable);
        for role in [
            ElementRole::Link,
            ElementRole::Summary,
            ElementRole::Button,
            ElementRole::RoleButton,
        ] {
            assert_eq!(role.kind(), ElementKind::Clickable);
        }
    }

    #[test]
    fn text_editing_kinds() {
        assert!(ElementKind::TextEntry.is_text_editing());
        assert!(ElementKind::ContentEditable.is_text_editing());
        assert!(!ElementKind::Clickable.is_text_editing());
    }
}
