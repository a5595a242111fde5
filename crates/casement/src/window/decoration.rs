//! Window decorations: native frames and frameless resize borders.
//!
//! A [`DecorationProvider`] answers two questions for the controller: how
//! much space the decoration takes around the client area, and whether a
//! point lies on a custom resize border.
//!
//! ```ignore
//! use casement::window::{select_decoration, DecorationProvider};
//!
//! let frame = select_decoration(false, Insets::ZERO);
//! match frame.resizing_border_hit_test(cursor, window_size) {
//!     Some(direction) => host.begin_resize_drag(direction),
//!     None => { /* normal mouse handling */ }
//! }
//! ```

use casement_core::{Insets, Point, Rect, Size};

/// Re-export of winit's ResizeDirection for convenience.
pub use winit::window::ResizeDirection;

/// Result of hit testing a window-relative point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestResult {
    /// The point belongs to the embedded surface and its child views.
    Client,

    /// The point is in a draggable region.
    ///
    /// Clicking and dragging should initiate a window move operation.
    Caption,

    /// The point is in a resize border.
    ///
    /// Clicking and dragging should initiate a window resize operation
    /// in the specified direction.
    ResizeBorder(ResizeDirection),
}

impl HitTestResult {
    /// Check if this result indicates a resize operation.
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::ResizeBorder(_))
    }

    /// Check if this result indicates a draggable area.
    pub fn is_draggable(&self) -> bool {
        matches!(self, Self::Caption)
    }

    /// Whether events at this point go to child views.
    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client)
    }
}

/// Decoration geometry of a window.
pub trait DecorationProvider: Send {
    /// Whether the OS draws a frame around the client area.
    fn has_frame(&self) -> bool;

    /// Space taken by the decoration on each side of the client area.
    fn insets(&self) -> Insets;

    /// Window bounds for the given client bounds.
    fn window_bounds_for_client_bounds(&self, client: Rect) -> Rect {
        client.outset(self.insets())
    }

    /// Client bounds for the given window bounds.
    fn client_bounds_for_window_bounds(&self, window: Rect) -> Rect {
        window.inset(self.insets())
    }

    /// The resize direction for a window-relative point, if it lies on a
    /// custom resize border.
    fn resizing_border_hit_test(&self, point: Point, window_size: Size) -> Option<ResizeDirection>;

    /// Enable or disable custom resize borders.
    fn set_resize_enabled(&mut self, _enabled: bool) {}
}

/// An OS-drawn frame.
///
/// The insets are the ones the host reports; resizing is handled by the OS
/// so there are no custom resize borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeFrame {
    insets: Insets,
}

impl NativeFrame {
    pub fn new(insets: Insets) -> Self {
        Self { insets }
    }
}

impl DecorationProvider for NativeFrame {
    fn has_frame(&self) -> bool {
        true
    }

    fn insets(&self) -> Insets {
        self.insets
    }

    fn resizing_border_hit_test(&self, _point: Point, _window_size: Size) -> Option<ResizeDirection> {
        None
    }
}

/// A frameless window with invisible resize borders along its edges.
///
/// # Defaults
///
/// - Resize border: 5 pixels inside the window bounds
/// - Corner size: 16 pixels along each edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramelessFrame {
    /// Border thickness for resize detection.
    resize_border: i32,
    /// Corner size for diagonal resize detection.
    ///
    /// Corners extend this far along each edge.
    corner_size: i32,
    resize_enabled: bool,
}

impl Default for FramelessFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl FramelessFrame {
    /// Default thickness of the resize border.
    pub const RESIZE_BORDER: i32 = 5;
    /// Default extent of the corner resize areas.
    pub const CORNER_SIZE: i32 = 16;

    pub fn new() -> Self {
        Self {
            resize_border: Self::RESIZE_BORDER,
            corner_size: Self::CORNER_SIZE,
            resize_enabled: true,
        }
    }

    /// Set the resize border thickness.
    pub fn with_resize_border(mut self, border: i32) -> Self {
        self.resize_border = border.max(0);
        self
    }

    /// Set the corner size for diagonal resizing.
    pub fn with_corner_size(mut self, size: i32) -> Self {
        self.corner_size = size.max(0);
        self
    }

    pub fn with_resize_enabled(mut self, enabled: bool) -> Self {
        self.resize_enabled = enabled;
        self
    }

    pub fn resize_border(&self) -> i32 {
        self.resize_border
    }

    pub fn corner_size(&self) -> i32 {
        self.corner_size
    }

    pub fn is_resize_enabled(&self) -> bool {
        self.resize_enabled
    }
}

impl DecorationProvider for FramelessFrame {
    fn has_frame(&self) -> bool {
        false
    }

    fn insets(&self) -> Insets {
        Insets::ZERO
    }

    fn resizing_border_hit_test(&self, point: Point, window_size: Size) -> Option<ResizeDirection> {
        if !self.resize_enabled || self.resize_border == 0 {
            return None;
        }

        let (x, y) = (point.x, point.y);
        let (width, height) = (window_size.width, window_size.height);
        if x < 0 || y < 0 || x >= width || y >= height {
            return None;
        }

        let border = self.resize_border;
        let corner = self.corner_size;

        let on_left = x < border;
        let on_right = x >= width.saturating_sub(border);
        let on_top = y < border;
        let on_bottom = y >= height.saturating_sub(border);

        // Corners override edges
        let in_left_corner = x < corner;
        let in_right_corner = x >= width.saturating_sub(corner);
        let in_top_corner = y < corner;
        let in_bottom_corner = y >= height.saturating_sub(corner);

        if on_top && in_left_corner || on_left && in_top_corner {
            return Some(ResizeDirection::NorthWest);
        }
        if on_top && in_right_corner || on_right && in_top_corner {
            return Some(ResizeDirection::NorthEast);
        }
        if on_bottom && in_left_corner || on_left && in_bottom_corner {
            return Some(ResizeDirection::SouthWest);
        }
        if on_bottom && in_right_corner || on_right && in_bottom_corner {
            return Some(ResizeDirection::SouthEast);
        }

        if on_top {
            return Some(ResizeDirection::North);
        }
        if on_bottom {
            return Some(ResizeDirection::South);
        }
        if on_left {
            return Some(ResizeDirection::West);
        }
        if on_right {
            return Some(ResizeDirection::East);
        }

        None
    }

    fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize_enabled = enabled;
    }
}

/// Pick the decoration for a window.
///
/// `insets` are the host-reported frame insets and are ignored for
/// frameless windows.
pub fn select_decoration(has_frame: bool, insets: Insets) -> Box<dyn DecorationProvider> {
    if has_frame {
        Box::new(NativeFrame::new(insets))
    } else {
        Box::new(FramelessFrame::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(800, 600);

    #[test]
    fn test_native_frame_bounds() {
        let frame = NativeFrame::new(Insets::new(31, 8, 8, 8));
        let client = Rect::new(100, 100, 800, 600);
        let window = frame.window_bounds_for_client_bounds(client);

        assert_eq!(window, Rect::new(92, 69, 816, 639));
        assert_eq!(frame.client_bounds_for_window_bounds(window), client);
        assert_eq!(frame.resizing_border_hit_test(Point::new(0, 0), SIZE), None);
    }

    #[test]
    fn test_frameless_client_area() {
        let frame = FramelessFrame::new();
        assert_eq!(frame.insets(), Insets::ZERO);
        assert_eq!(frame.resizing_border_hit_test(Point::new(400, 300), SIZE), None);
        // Just inside the 5px border
        assert_eq!(frame.resizing_border_hit_test(Point::new(400, 5), SIZE), None);
        assert_eq!(frame.resizing_border_hit_test(Point::new(5, 5), SIZE), None);
    }

    #[test]
    fn test_frameless_edges() {
        let frame = FramelessFrame::new();
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(400, 4), SIZE),
            Some(ResizeDirection::North)
        );
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(400, 597), SIZE),
            Some(ResizeDirection::South)
        );
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(0, 300), SIZE),
            Some(ResizeDirection::West)
        );
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(799, 300), SIZE),
            Some(ResizeDirection::East)
        );
    }

    #[test]
    fn test_frameless_corners() {
        let frame = FramelessFrame::new();
        // On the top edge but within 16px of the left side
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(12, 2), SIZE),
            Some(ResizeDirection::NorthWest)
        );
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(797, 10), SIZE),
            Some(ResizeDirection::NorthEast)
        );
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(2, 590), SIZE),
            Some(ResizeDirection::SouthWest)
        );
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(790, 598), SIZE),
            Some(ResizeDirection::SouthEast)
        );
    }

    #[test]
    fn test_frameless_outside_window() {
        let frame = FramelessFrame::new();
        assert_eq!(frame.resizing_border_hit_test(Point::new(-1, 300), SIZE), None);
        assert_eq!(frame.resizing_border_hit_test(Point::new(800, 300), SIZE), None);
    }

    #[test]
    fn test_resize_disabled() {
        let mut frame = FramelessFrame::new();
        frame.set_resize_enabled(false);
        assert_eq!(frame.resizing_border_hit_test(Point::new(0, 0), SIZE), None);

        let frame = FramelessFrame::new().with_resize_enabled(false);
        assert!(!frame.is_resize_enabled());
    }

    #[test]
    fn test_builder_chain() {
        let frame = FramelessFrame::new().with_resize_border(8).with_corner_size(20);
        assert_eq!(frame.resize_border(), 8);
        assert_eq!(frame.corner_size(), 20);
        assert_eq!(
            frame.resizing_border_hit_test(Point::new(400, 7), SIZE),
            Some(ResizeDirection::North)
        );
    }

    #[test]
    fn test_select_decoration() {
        let insets = Insets::new(31, 8, 8, 8);
        let framed = select_decoration(true, insets);
        assert!(framed.has_frame());
        assert_eq!(framed.insets(), insets);

        let frameless = select_decoration(false, insets);
        assert!(!frameless.has_frame());
        assert_eq!(frameless.insets(), Insets::ZERO);
    }
}
