//! winit-backed host widget.
//!
//! `WinitHost` implements [`HostWidget`] over a `winit::window::Window`. All
//! geometry is in physical pixels.

use std::sync::Arc;

use casement_core::logging::targets;
use casement_core::{Insets, Point, Rect, Size};
use tracing::{trace, warn};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{
    Fullscreen, UserAttentionType, Window, WindowAttributes, WindowButtons, WindowId, WindowLevel,
};

use super::decoration::ResizeDirection;
use super::host::{ContentLayout, HostError, HostWidget, HostWidgetFactory, WidgetParams, WindowStyle};
use crate::keyboard::KeyCombination;
use crate::menu::{AcceleratorPriority, MenuModel};

/// A [`HostWidget`] wrapping a winit window.
///
/// winit has no accelerator manager or menu bar of its own, so registered
/// accelerators and the menu bar model are recorded here for the embedding
/// renderer; key dispatch goes through
/// [`WindowController::handle_keyboard_event`](super::WindowController::handle_keyboard_event).
pub struct WinitHost {
    /// The underlying winit window; `None` once closed.
    window: Option<Arc<Window>>,
    always_on_top: bool,
    accelerators: Vec<(KeyCombination, AcceleratorPriority)>,
    menu_bar_model: Option<MenuModel>,
    layout: Option<ContentLayout>,
}

impl WinitHost {
    /// Wrap an existing winit window.
    pub fn from_window(window: Arc<Window>) -> Self {
        Self {
            window: Some(window),
            always_on_top: false,
            accelerators: Vec::new(),
            menu_bar_model: None,
            layout: None,
        }
    }

    /// Create a window from widget parameters.
    ///
    /// This must be called from within the event loop (typically in `resumed()`).
    pub fn create(event_loop: &ActiveEventLoop, params: &WidgetParams) -> Result<Self, HostError> {
        let window = event_loop
            .create_window(window_attributes(params))
            .map_err(|e| HostError::CreationFailed(e.to_string()))?;
        Ok(Self::from_window(Arc::new(window)))
    }

    /// Get the winit window ID, if the window still exists.
    pub fn id(&self) -> Option<WindowId> {
        self.window.as_ref().map(|w| w.id())
    }

    /// Get an Arc reference to the underlying winit window.
    ///
    /// This is useful for surface creation.
    pub fn winit_window(&self) -> Option<Arc<Window>> {
        self.window.clone()
    }

    /// Accelerators currently registered for this window.
    pub fn accelerators(&self) -> &[(KeyCombination, AcceleratorPriority)] {
        &self.accelerators
    }

    /// The model the in-window menu bar should draw.
    pub fn menu_bar_model(&self) -> Option<&MenuModel> {
        self.menu_bar_model.as_ref()
    }

    /// The last layout computed by the controller.
    pub fn layout(&self) -> Option<&ContentLayout> {
        self.layout.as_ref()
    }

    fn inner_size_for(&self, window: &Window, size: Size) -> PhysicalSize<u32> {
        let insets = frame_insets(window);
        PhysicalSize::new(
            to_extent(size.width.saturating_sub(insets.width())),
            to_extent(size.height.saturating_sub(insets.height())),
        )
    }
}

/// Attributes for a new window.
///
/// winit takes an inner size at creation, so framed windows start larger
/// than `params.bounds`; the controller re-applies the outer size once the
/// frame insets are known.
fn window_attributes(params: &WidgetParams) -> WindowAttributes {
    let bounds = params.bounds;
    Window::default_attributes()
        .with_title(&params.title)
        .with_inner_size(PhysicalSize::new(to_extent(bounds.width()), to_extent(bounds.height())))
        .with_position(PhysicalPosition::new(bounds.x(), bounds.y()))
        .with_decorations(params.has_frame)
        .with_resizable(params.resizable)
        // The controller shows the window once its state is applied
        .with_visible(false)
}

fn to_extent(value: i32) -> u32 {
    u32::try_from(value.max(1)).unwrap_or(1)
}

fn to_coordinate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Frame insets from the difference between outer and inner geometry.
fn frame_insets(window: &Window) -> Insets {
    let (Ok(outer), Ok(inner)) = (window.outer_position(), window.inner_position()) else {
        return Insets::ZERO;
    };
    let outer_size = window.outer_size();
    let inner_size = window.inner_size();

    let top = inner.y - outer.y;
    let left = inner.x - outer.x;
    let bottom = to_coordinate(outer_size.height) - to_coordinate(inner_size.height) - top;
    let right = to_coordinate(outer_size.width) - to_coordinate(inner_size.width) - left;
    Insets::new(top.max(0), left.max(0), bottom.max(0), right.max(0))
}

fn outer_bounds(window: &Window) -> Rect {
    let origin = window
        .outer_position()
        .map(|p| Point::new(p.x, p.y))
        .unwrap_or(Point::ZERO);
    let size = window.outer_size();
    Rect::from_origin_size(
        origin,
        Size::new(to_coordinate(size.width), to_coordinate(size.height)),
    )
}

impl HostWidget for WinitHost {
    fn show(&mut self) {
        if let Some(window) = &self.window {
            window.set_visible(true);
        }
    }

    fn hide(&mut self) {
        if let Some(window) = &self.window {
            window.set_visible(false);
        }
    }

    fn is_visible(&self) -> bool {
        self.window
            .as_ref()
            .is_some_and(|w| w.is_visible().unwrap_or(true))
    }

    fn close(&mut self) {
        self.close_now();
    }

    fn close_now(&mut self) {
        // Dropping the last reference destroys the native window
        self.window = None;
    }

    fn activate(&mut self) {
        if let Some(window) = &self.window {
            window.focus_window();
        }
    }

    fn deactivate(&mut self) {
        trace!(target: targets::WINDOW, "deactivate is not supported by winit");
    }

    fn is_active(&self) -> bool {
        self.window.as_ref().is_some_and(|w| w.has_focus())
    }

    fn window_bounds(&self) -> Rect {
        self.window.as_deref().map(outer_bounds).unwrap_or(Rect::ZERO)
    }

    fn restored_bounds(&self) -> Rect {
        // winit does not expose restored bounds
        self.window_bounds()
    }

    fn set_window_bounds(&mut self, bounds: Rect) {
        let Some(window) = &self.window else {
            return;
        };
        window.set_outer_position(PhysicalPosition::new(bounds.x(), bounds.y()));
        let inner = self.inner_size_for(window, bounds.size);
        let _ = window.request_inner_size(inner);
    }

    fn center_window(&mut self, size: Size) {
        let Some(monitor) = self.window.as_ref().and_then(|w| w.current_monitor()) else {
            trace!(target: targets::WINDOW, "no monitor to center on");
            return;
        };
        let origin = monitor.position();
        let area = monitor.size();
        let x = origin.x.saturating_add(to_coordinate(area.width).saturating_sub(size.width) / 2);
        let y = origin.y.saturating_add(to_coordinate(area.height).saturating_sub(size.height) / 2);
        self.set_window_bounds(Rect::from_origin_size(Point::new(x, y), size));
    }

    fn frame_insets(&self) -> Insets {
        self.window.as_deref().map(frame_insets).unwrap_or(Insets::ZERO)
    }

    fn set_minimum_size(&mut self, size: Size) {
        if let Some(window) = &self.window {
            let min = (!size.is_empty()).then(|| self.inner_size_for(window, size));
            window.set_min_inner_size(min);
        }
    }

    fn set_maximum_size(&mut self, size: Size) {
        if let Some(window) = &self.window {
            let max = (!size.is_empty()).then(|| self.inner_size_for(window, size));
            window.set_max_inner_size(max);
        }
    }

    fn maximize(&mut self) {
        if let Some(window) = &self.window {
            window.set_maximized(true);
        }
    }

    fn minimize(&mut self) {
        if let Some(window) = &self.window {
            window.set_minimized(true);
        }
    }

    fn restore(&mut self) {
        if let Some(window) = &self.window {
            window.set_minimized(false);
            window.set_maximized(false);
        }
    }

    fn is_maximized(&self) -> bool {
        self.window.as_ref().is_some_and(|w| w.is_maximized())
    }

    fn is_minimized(&self) -> bool {
        self.window
            .as_ref()
            .and_then(|w| w.is_minimized())
            .unwrap_or(false)
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if let Some(window) = &self.window {
            window.set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.window.as_ref().is_some_and(|w| w.fullscreen().is_some())
    }

    fn set_always_on_top(&mut self, always_on_top: bool) {
        if let Some(window) = &self.window {
            let level = if always_on_top {
                WindowLevel::AlwaysOnTop
            } else {
                WindowLevel::Normal
            };
            window.set_window_level(level);
            self.always_on_top = always_on_top;
        }
    }

    fn is_always_on_top(&self) -> bool {
        self.always_on_top
    }

    fn set_title(&mut self, title: &str) {
        if let Some(window) = &self.window {
            window.set_title(title);
        }
    }

    fn flash_frame(&mut self, flash: bool) {
        if let Some(window) = &self.window {
            window.request_user_attention(flash.then_some(UserAttentionType::Informational));
        }
    }

    #[cfg(target_os = "windows")]
    fn set_skip_taskbar(&mut self, skip: bool) {
        use winit::platform::windows::WindowExtWindows;

        if let Some(window) = &self.window {
            window.set_skip_taskbar(skip);
        }
    }

    #[cfg(not(target_os = "windows"))]
    fn set_skip_taskbar(&mut self, skip: bool) {
        trace!(target: targets::WINDOW, skip, "skip-taskbar is not supported on this platform");
    }

    fn set_window_style(&mut self, style: WindowStyle) {
        let Some(window) = &self.window else {
            return;
        };
        let mut buttons = WindowButtons::CLOSE;
        if style.has_minimize_box() {
            buttons |= WindowButtons::MINIMIZE;
        }
        if style.has_maximize_box() {
            buttons |= WindowButtons::MAXIMIZE;
        }
        window.set_enabled_buttons(buttons);
        window.set_resizable(style.has_thick_frame());
    }

    fn begin_move_drag(&mut self) {
        if let Some(window) = &self.window
            && let Err(err) = window.drag_window()
        {
            warn!(target: targets::WINDOW, error = %err, "window drag failed");
        }
    }

    fn begin_resize_drag(&mut self, direction: ResizeDirection) {
        if let Some(window) = &self.window
            && let Err(err) = window.drag_resize_window(direction)
        {
            warn!(target: targets::WINDOW, error = %err, ?direction, "window resize failed");
        }
    }

    fn set_menu_bar_model(&mut self, model: &MenuModel) {
        self.menu_bar_model = Some(model.clone());
    }

    fn apply_layout(&mut self, layout: &ContentLayout) {
        self.layout = Some(*layout);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn unregister_accelerators(&mut self) {
        self.accelerators.clear();
    }

    fn register_accelerator(&mut self, combination: KeyCombination, priority: AcceleratorPriority) {
        self.accelerators.push((combination, priority));
    }
}

impl std::fmt::Debug for WinitHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinitHost")
            .field("id", &self.id())
            .field("bounds", &self.window_bounds())
            .field("accelerators", &self.accelerators.len())
            .finish()
    }
}

/// Creates [`WinitHost`] widgets on an active event loop.
pub struct WinitHostFactory<'a> {
    event_loop: &'a ActiveEventLoop,
}

impl<'a> WinitHostFactory<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop) -> Self {
        Self { event_loop }
    }
}

impl HostWidgetFactory for WinitHostFactory<'_> {
    fn create(&mut self, params: &WidgetParams) -> Result<Box<dyn HostWidget>, HostError> {
        Ok(Box::new(WinitHost::create(self.event_loop, params)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_conversion() {
        assert_eq!(to_extent(800), 800);
        assert_eq!(to_extent(0), 1);
        assert_eq!(to_extent(-20), 1);
        assert_eq!(to_coordinate(u32::MAX), i32::MAX);
        assert_eq!(to_coordinate(600), 600);
    }

    #[test]
    fn test_host_error_display() {
        let err = HostError::CreationFailed("test error".to_string());
        assert!(format!("{}", err).contains("test error"));
    }
}
