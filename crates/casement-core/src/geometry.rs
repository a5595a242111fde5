//! Screen-space geometry types.
//!
//! Window bounds, content bounds and draggable regions are all expressed in
//! integer pixels. Integer arithmetic keeps the content/window bounds
//! conversion exactly invertible. Edge and inset arithmetic saturates at the
//! `i32` range, so caller-supplied rectangles never overflow.

/// A point in screen or window-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Return this point translated by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A size (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Return a copy with the height grown (or shrunk) by `delta`.
    #[inline]
    pub const fn enlarge_height(self, delta: i32) -> Self {
        Self {
            width: self.width,
            height: self.height.saturating_add(delta),
        }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// Per-edge thickness, used for window decorations.
///
/// Follows the usual toolkit ordering: top, left, bottom, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    /// Create insets from the four edge thicknesses.
    #[inline]
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets with the same thickness on every edge.
    #[inline]
    pub const fn uniform(all: i32) -> Self {
        Self::new(all, all, all, all)
    }

    /// No insets.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Combined horizontal thickness.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Combined vertical thickness.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Check whether every edge is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top == 0 && self.left == 0 && self.bottom == 0 && self.right == 0
    }
}

/// A rectangle defined by origin and size.
///
/// The rectangle is half-open: it contains `x..x + width` horizontally and
/// `y..y + height` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size components.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from its left, top, right and bottom edges.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub const fn x(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.size.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.size.height
    }

    /// Right edge x coordinate (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.origin.x.saturating_add(self.size.width)
    }

    /// Bottom edge y coordinate (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.origin.y.saturating_add(self.size.height)
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x() && point.x < self.right() && point.y >= self.y() && point.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::from_ltrb(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Check whether two rectangles overlap.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// Return a copy with a different size, keeping the origin.
    #[inline]
    pub const fn with_size(self, size: Size) -> Self {
        Self {
            origin: self.origin,
            size,
        }
    }

    /// Return a copy with a different origin, keeping the size.
    #[inline]
    pub const fn with_origin(self, origin: Point) -> Self {
        Self {
            origin,
            size: self.size,
        }
    }

    /// Grow the rectangle outward by `insets`.
    #[inline]
    pub const fn outset(self, insets: Insets) -> Self {
        Self::new(
            self.origin.x.saturating_sub(insets.left),
            self.origin.y.saturating_sub(insets.top),
            self.size.width.saturating_add(insets.width()),
            self.size.height.saturating_add(insets.height()),
        )
    }

    /// Shrink the rectangle inward by `insets`.
    #[inline]
    pub const fn inset(self, insets: Insets) -> Self {
        Self::new(
            self.origin.x.saturating_add(insets.left),
            self.origin.y.saturating_add(insets.top),
            self.size.width.saturating_sub(insets.width()),
            self.size.height.saturating_sub(insets.height()),
        )
    }

    /// Subtract `cut` from this rectangle.
    ///
    /// Returns up to four disjoint pieces covering `self \ cut`: a full-width
    /// band above, a full-width band below, and the left and right pieces of
    /// the middle band.
    pub fn subtract(&self, cut: &Rect) -> Vec<Rect> {
        let Some(overlap) = self.intersect(cut) else {
            return if self.is_empty() { Vec::new() } else { vec![*self] };
        };

        let mut pieces = Vec::with_capacity(4);
        if overlap.y() > self.y() {
            pieces.push(Rect::from_ltrb(self.x(), self.y(), self.right(), overlap.y()));
        }
        if overlap.bottom() < self.bottom() {
            pieces.push(Rect::from_ltrb(self.x(), overlap.bottom(), self.right(), self.bottom()));
        }
        if overlap.x() > self.x() {
            pieces.push(Rect::from_ltrb(self.x(), overlap.y(), overlap.x(), overlap.bottom()));
        }
        if overlap.right() < self.right() {
            pieces.push(Rect::from_ltrb(overlap.right(), overlap.y(), self.right(), overlap.bottom()));
        }
        pieces
    }
}
