//! Conversion between content bounds and window bounds.
//!
//! Window bounds are the content bounds grown by the decoration insets and,
//! while an in-window menu bar is visible, by the menu bar height. The menu
//! bar only ever adds to the height.

use casement_core::Rect;

use super::decoration::DecorationProvider;

/// Translates between content bounds and window bounds.
///
/// Both directions are pure and exact inverses for a fixed decoration and
/// menu bar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsConverter {
    menu_bar_height: i32,
}

impl BoundsConverter {
    pub fn new(menu_bar_height: i32) -> Self {
        Self { menu_bar_height }
    }

    pub fn menu_bar_height(&self) -> i32 {
        self.menu_bar_height
    }

    /// Window bounds that give the requested content bounds.
    pub fn content_to_window(
        &self,
        decoration: &dyn DecorationProvider,
        content: Rect,
        menu_bar_visible: bool,
    ) -> Rect {
        let mut window = if decoration.has_frame() {
            decoration.window_bounds_for_client_bounds(content)
        } else {
            content
        };
        if menu_bar_visible {
            window.size = window.size.enlarge_height(self.menu_bar_height);
        }
        window
    }

    /// Content bounds inside the given window bounds.
    pub fn window_to_content(
        &self,
        decoration: &dyn DecorationProvider,
        window: Rect,
        menu_bar_visible: bool,
    ) -> Rect {
        let mut content = if decoration.has_frame() {
            decoration.client_bounds_for_window_bounds(window)
        } else {
            window
        };
        if menu_bar_visible {
            content.size = content.size.enlarge_height(-self.menu_bar_height);
        }
        content
    }
}
