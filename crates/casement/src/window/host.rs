//! Collaborators of the window controller.
//!
//! The controller drives a [`HostWidget`] (the OS window), lays out and
//! focuses an [`EmbeddedSurface`] (the renderer content), and optionally
//! hands menus to a [`GlobalMenuSurface`]. The host calls back into the
//! controller through [`WidgetDelegate`]; exactly one controller listens per
//! window for the window's whole lifetime.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use casement_core::{Insets, Rect, Size};
use thiserror::Error;

use super::decoration::ResizeDirection;
use crate::keyboard::KeyCombination;
use crate::menu::{AcceleratorPriority, MenuModel};

/// Errors raised while creating the host widget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A platform service the window needs is not available.
    #[error("platform service unavailable: {0}")]
    ServiceUnavailable(String),
    /// The native window could not be created.
    #[error("native window creation failed: {0}")]
    CreationFailed(String),
}

impl From<HostError> for casement_core::CasementError {
    fn from(err: HostError) -> Self {
        Self::WindowCreation(err.to_string())
    }
}

/// OS-level window style flags.
///
/// Only meaningful for framed windows; platforms without a matching
/// primitive ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowStyle(u8);

impl WindowStyle {
    /// No style flags.
    pub const NONE: WindowStyle = WindowStyle(0);

    /// The window has a minimize button.
    pub const MINIMIZE_BOX: WindowStyle = WindowStyle(1 << 0);

    /// The window has a maximize button.
    pub const MAXIMIZE_BOX: WindowStyle = WindowStyle(1 << 1);

    /// The window has a sizing border.
    pub const THICK_FRAME: WindowStyle = WindowStyle(1 << 2);

    /// Style of a resizable window.
    pub const RESIZABLE: WindowStyle =
        WindowStyle(Self::MINIMIZE_BOX.0 | Self::MAXIMIZE_BOX.0 | Self::THICK_FRAME.0);

    /// The style matching a resizable state.
    ///
    /// A fixed-size window loses its maximize button and sizing border but
    /// keeps its minimize button.
    pub fn with_resizable(resizable: bool) -> Self {
        if resizable {
            Self::RESIZABLE
        } else {
            Self::MINIMIZE_BOX
        }
    }

    /// Check if a flag is set.
    pub fn has(&self, flag: WindowStyle) -> bool {
        (self.0 & flag.0) == flag.0
    }

    pub fn has_minimize_box(&self) -> bool {
        self.has(Self::MINIMIZE_BOX)
    }

    pub fn has_maximize_box(&self) -> bool {
        self.has(Self::MAXIMIZE_BOX)
    }

    pub fn has_thick_frame(&self) -> bool {
        self.has(Self::THICK_FRAME)
    }
}

impl BitOr for WindowStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        WindowStyle(self.0 | rhs.0)
    }
}

impl BitOrAssign for WindowStyle {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for WindowStyle {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        WindowStyle(self.0 & rhs.0)
    }
}

/// Client-area layout computed by the controller.
///
/// Rectangles are relative to the client area's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLayout {
    /// The whole client area.
    pub client: Rect,
    /// The in-window menu bar, when visible.
    pub menu_bar: Option<Rect>,
    /// The area given to the embedded surface.
    pub content: Rect,
}

/// Parameters the host widget is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetParams {
    /// Initial window bounds in screen coordinates.
    pub bounds: Rect,
    pub title: String,
    pub has_frame: bool,
    pub resizable: bool,
}

/// The OS window the controller drives.
///
/// Setters are best-effort: a platform without the matching primitive
/// ignores the call.
pub trait HostWidget {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    /// Ask the window to close through the normal close path.
    fn close(&mut self);
    /// Destroy the window immediately.
    fn close_now(&mut self);

    fn activate(&mut self);
    fn deactivate(&mut self);
    fn is_active(&self) -> bool;

    /// Window bounds in screen coordinates.
    fn window_bounds(&self) -> Rect;
    /// Bounds the window returns to when restored.
    fn restored_bounds(&self) -> Rect;
    fn set_window_bounds(&mut self, bounds: Rect);
    /// Center a window of `size` on its display.
    fn center_window(&mut self, size: Size);
    /// Insets of the native frame around the client area.
    fn frame_insets(&self) -> Insets;

    /// Minimum window size; zero means unconstrained.
    fn set_minimum_size(&mut self, size: Size);
    fn set_maximum_size(&mut self, size: Size);

    fn maximize(&mut self);
    fn minimize(&mut self);
    fn restore(&mut self);
    fn is_maximized(&self) -> bool;
    fn is_minimized(&self) -> bool;
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn is_fullscreen(&self) -> bool;

    fn set_always_on_top(&mut self, always_on_top: bool);
    fn is_always_on_top(&self) -> bool;
    fn set_title(&mut self, title: &str);
    fn flash_frame(&mut self, flash: bool);
    fn set_skip_taskbar(&mut self, skip: bool);
    fn set_window_style(&mut self, style: WindowStyle);

    /// Start moving the window with the pointer.
    fn begin_move_drag(&mut self);
    /// Start resizing the window with the pointer.
    fn begin_resize_drag(&mut self, direction: ResizeDirection);

    /// Replace the items shown by the in-window menu bar.
    fn set_menu_bar_model(&mut self, model: &MenuModel);
    /// Place the menu bar and content.
    fn apply_layout(&mut self, layout: &ContentLayout);

    /// Drop every accelerator this window registered.
    fn unregister_accelerators(&mut self);
    /// Route `combination` to this window's accelerator callback.
    fn register_accelerator(&mut self, combination: KeyCombination, priority: AcceleratorPriority);
}

/// Creates the host widget for a new window.
pub trait HostWidgetFactory {
    fn create(&mut self, params: &WidgetParams) -> Result<Box<dyn HostWidget>, HostError>;
}

impl<F> HostWidgetFactory for F
where
    F: FnMut(&WidgetParams) -> Result<Box<dyn HostWidget>, HostError>,
{
    fn create(&mut self, params: &WidgetParams) -> Result<Box<dyn HostWidget>, HostError> {
        self(params)
    }
}

/// The renderer content embedded in the window.
pub trait EmbeddedSurface {
    /// Give input focus to the surface.
    fn focus(&mut self);

    /// Begin the surface's own close sequence.
    ///
    /// The surface may veto or finish asynchronously; once done it calls
    /// [`WindowController::close_immediately`](super::WindowController::close_immediately).
    fn request_close(&mut self);

    /// Whether an auxiliary inspection surface currently holds focus.
    fn is_inspector_focused(&self) -> bool {
        false
    }
}

/// A desktop-provided menu bar outside the window.
pub trait GlobalMenuSurface {
    /// Whether the desktop's menu server is running.
    fn is_server_started(&self) -> bool;
    fn set_menu(&mut self, model: &MenuModel);
}

/// Callbacks from the host widget into its controller.
pub trait WidgetDelegate {
    /// The host asks whether the window may close now.
    fn can_close(&mut self) -> bool;
    fn on_activation_changed(&mut self, active: bool);
    fn on_bounds_changed(&mut self, bounds: Rect);
    fn on_widget_destroyed(&mut self);
    fn can_resize(&self) -> bool;
    fn can_maximize(&self) -> bool;
    fn window_title(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resizable_style() {
        let style = WindowStyle::with_resizable(true);
        assert!(style.has_minimize_box());
        assert!(style.has_maximize_box());
        assert!(style.has_thick_frame());

        let style = WindowStyle::with_resizable(false);
        assert!(style.has_minimize_box());
        assert!(!style.has_maximize_box());
        assert!(!style.has_thick_frame());
    }

    #[test]
    fn test_style_bit_ops() {
        let mut style = WindowStyle::NONE;
        style |= WindowStyle::THICK_FRAME;
        assert_eq!(style | WindowStyle::MINIMIZE_BOX, WindowStyle(0b101));
        assert_eq!(WindowStyle::RESIZABLE & WindowStyle::MAXIMIZE_BOX, WindowStyle::MAXIMIZE_BOX);
    }

    #[test]
    fn test_host_error_into_casement_error() {
        let err: casement_core::CasementError = HostError::ServiceUnavailable("display".into()).into();
        assert_eq!(
            err,
            casement_core::CasementError::WindowCreation("platform service unavailable: display".into())
        );
    }
}
