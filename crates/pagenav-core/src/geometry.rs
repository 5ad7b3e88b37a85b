#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are CSS pixels as `f64`. Element rectangles are
//! viewport-relative (origin at the top-left of the visible area) unless a
//! function says otherwise.

/// A point in page or viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, as reported by a bounding-box query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Area in square pixels. Negative extents count as zero.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether `other` lies entirely inside this rectangle.
    ///
    /// Edges are inclusive, so a rectangle touching the border still counts.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shift the rectangle by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Snapshot of the page viewport and the document it shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
    /// Current horizontal scroll offset.
    pub scroll_x: f64,
    /// Current vertical scroll offset.
    pub scroll_y: f64,
    /// Full scrollable document width.
    pub document_width: f64,
    /// Full scrollable document height.
    pub document_height: f64,
}

impl Viewport {
    /// Viewport bounds in viewport coordinates.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Convert a viewport-relative point to document coordinates.
    #[inline]
    pub fn to_document(&self, point: Point) -> Point {
        Point::new(point.x + self.scroll_x, point.y + self.scroll_y)
    }

    /// Vertical overflow (document height beyond the visible height).
    #[inline]
    pub fn overflow_y(&self) -> f64 {
        (self.document_height - self.height).max(0.0)
    }

    /// Horizontal overflow (document width beyond the visible width).
    #[inline]
    pub fn overflow_x(&self) -> f64 {
        (self.document_width - self.width).max(0.0)
    }

    /// Whether the page itself can scroll on either axis.
    #[inline]
    pub fn has_overflow(&self) -> bool {
        self.overflow_x() > 0.0 || self.overflow_y() > 0.0
    }
}

/// Anything that can report the current page viewport.
pub trait ViewportSource {
    /// Current viewport geometry and scroll offsets.
    fn viewport(&self) -> Viewport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_area() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.area(), 1200.0);
        assert!(!r.is_empty());
    }

    #[test]
    fn negative_extent_has_no_area() {
        let r = Rect::new(0.0, 0.0, -5.0, 10.0);
        assert_eq!(r.area(), 0.0);
        assert!(r.is_empty());
    }

    #[test]
    fn contains_rect_is_edge_inclusive() {
        let outer = Rect::from_size(100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 5.0, 5.0)));
        assert!(!outer.contains_rect(&Rect::new(96.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn viewport_overflow() {
        let vp = Viewport {
            width: 800.0,
            height: 600.0,
            document_width: 800.0,
            document_height: 600.0,
            ..Viewport::default()
        };
        assert!(!vp.has_overflow());

        let tall = Viewport {
            document_height: 2000.0,
            ..vp
        };
        assert_eq!(tall.overflow_y(), 1400.0);
        assert!(tall.has_overflow());
    }

    #[test]
    fn to_document_adds_scroll() {
        let vp = Viewport {
            scroll_x: 5.0,
            scroll_y: 300.0,
            ..Viewport::default()
        };
        assert_eq!(vp.to_document(Point::new(1.0, 2.0)), Point::new(6.0, 302.0));
    }
}
