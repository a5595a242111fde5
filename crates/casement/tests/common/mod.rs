//! Test doubles for the window controller's collaborators.

#![allow(dead_code)]

use std::sync::Arc;

use casement::keyboard::KeyCombination;
use casement::menu::{AcceleratorPriority, MenuModel};
use casement::window::{
    ContentLayout, EmbeddedSurface, GlobalMenuSurface, HostError, HostWidget, HostWidgetFactory,
    ResizeDirection, WidgetParams, WindowStyle,
};
use casement::{Insets, Rect, Size};
use parking_lot::Mutex;

/// Frame insets reported by framed mock hosts: a 30px caption and 8px borders.
pub const FRAME_INSETS: Insets = Insets::new(30, 8, 8, 8);

/// Screen the mock host centers windows on.
pub const SCREEN: Size = Size::new(1920, 1080);

/// Everything a mock host records.
#[derive(Debug, Default)]
pub struct HostState {
    pub params: Option<WidgetParams>,
    pub bounds: Rect,
    pub restored_bounds: Rect,
    pub insets: Insets,
    pub visible: bool,
    pub active: bool,
    pub maximized: bool,
    pub minimized: bool,
    pub fullscreen: bool,
    pub always_on_top: bool,
    pub skip_taskbar: bool,
    pub flashing: bool,
    pub title: String,
    pub min_size: Option<Size>,
    pub max_size: Option<Size>,
    pub style: Option<WindowStyle>,
    pub layout: Option<ContentLayout>,
    pub menu_bar_items: Option<usize>,
    pub accelerators: Vec<(KeyCombination, AcceleratorPriority)>,
    /// Creation bounds size the client area, as winit does.
    pub sizes_client_at_creation: bool,
    pub unregister_calls: usize,
    pub close_calls: usize,
    pub close_now_calls: usize,
    pub move_drags: usize,
    pub resize_drags: Vec<ResizeDirection>,
}

/// A host widget that records every call in shared state.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    state: Arc<Mutex<HostState>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that treats the creation bounds as client bounds.
    pub fn sizing_client_at_creation() -> Self {
        let host = Self::default();
        host.state.lock().sizes_client_at_creation = true;
        host
    }

    pub fn state(&self) -> parking_lot::MutexGuard<'_, HostState> {
        self.state.lock()
    }

    /// A factory handing out this host, sized from the widget parameters.
    pub fn factory(&self) -> impl HostWidgetFactory + use<> {
        let host = self.clone();
        move |params: &WidgetParams| -> Result<Box<dyn HostWidget>, HostError> {
            {
                let mut state = host.state.lock();
                state.title = params.title.clone();
                state.insets = if params.has_frame {
                    FRAME_INSETS
                } else {
                    Insets::ZERO
                };
                let bounds = if state.sizes_client_at_creation {
                    params.bounds.outset(state.insets)
                } else {
                    params.bounds
                };
                state.bounds = bounds;
                state.restored_bounds = bounds;
                state.params = Some(params.clone());
            }
            Ok(Box::new(host.clone()))
        }
    }
}

/// A factory that always fails.
pub fn failing_factory() -> impl HostWidgetFactory {
    |_: &WidgetParams| -> Result<Box<dyn HostWidget>, HostError> {
        Err(HostError::ServiceUnavailable("no display".to_string()))
    }
}

impl HostWidget for MockHost {
    fn show(&mut self) {
        self.state.lock().visible = true;
    }

    fn hide(&mut self) {
        self.state.lock().visible = false;
    }

    fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    fn close(&mut self) {
        self.state.lock().close_calls += 1;
    }

    fn close_now(&mut self) {
        let mut state = self.state.lock();
        state.close_now_calls += 1;
        state.visible = false;
    }

    fn activate(&mut self) {
        self.state.lock().active = true;
    }

    fn deactivate(&mut self) {
        self.state.lock().active = false;
    }

    fn is_active(&self) -> bool {
        self.state.lock().active
    }

    fn window_bounds(&self) -> Rect {
        self.state.lock().bounds
    }

    fn restored_bounds(&self) -> Rect {
        self.state.lock().restored_bounds
    }

    fn set_window_bounds(&mut self, bounds: Rect) {
        let mut state = self.state.lock();
        state.bounds = bounds;
        state.restored_bounds = bounds;
    }

    fn center_window(&mut self, size: Size) {
        let x = (SCREEN.width - size.width) / 2;
        let y = (SCREEN.height - size.height) / 2;
        self.set_window_bounds(Rect::new(x, y, size.width, size.height));
    }

    fn frame_insets(&self) -> Insets {
        self.state.lock().insets
    }

    fn set_minimum_size(&mut self, size: Size) {
        self.state.lock().min_size = Some(size);
    }

    fn set_maximum_size(&mut self, size: Size) {
        self.state.lock().max_size = Some(size);
    }

    fn maximize(&mut self) {
        self.state.lock().maximized = true;
    }

    fn minimize(&mut self) {
        self.state.lock().minimized = true;
    }

    fn restore(&mut self) {
        let mut state = self.state.lock();
        state.maximized = false;
        state.minimized = false;
    }

    fn is_maximized(&self) -> bool {
        self.state.lock().maximized
    }

    fn is_minimized(&self) -> bool {
        self.state.lock().minimized
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.state.lock().fullscreen = fullscreen;
    }

    fn is_fullscreen(&self) -> bool {
        self.state.lock().fullscreen
    }

    fn set_always_on_top(&mut self, always_on_top: bool) {
        self.state.lock().always_on_top = always_on_top;
    }

    fn is_always_on_top(&self) -> bool {
        self.state.lock().always_on_top
    }

    fn set_title(&mut self, title: &str) {
        self.state.lock().title = title.to_string();
    }

    fn flash_frame(&mut self, flash: bool) {
        self.state.lock().flashing = flash;
    }

    fn set_skip_taskbar(&mut self, skip: bool) {
        self.state.lock().skip_taskbar = skip;
    }

    fn set_window_style(&mut self, style: WindowStyle) {
        self.state.lock().style = Some(style);
    }

    fn begin_move_drag(&mut self) {
        self.state.lock().move_drags += 1;
    }

    fn begin_resize_drag(&mut self, direction: ResizeDirection) {
        self.state.lock().resize_drags.push(direction);
    }

    fn set_menu_bar_model(&mut self, model: &MenuModel) {
        self.state.lock().menu_bar_items = Some(model.len());
    }

    fn apply_layout(&mut self, layout: &ContentLayout) {
        self.state.lock().layout = Some(*layout);
    }

    fn unregister_accelerators(&mut self) {
        let mut state = self.state.lock();
        state.unregister_calls += 1;
        state.accelerators.clear();
    }

    fn register_accelerator(&mut self, combination: KeyCombination, priority: AcceleratorPriority) {
        self.state.lock().accelerators.push((combination, priority));
    }
}

#[derive(Debug, Default)]
pub struct SurfaceState {
    pub focus_calls: usize,
    pub close_requests: usize,
    pub inspector_focused: bool,
}

/// An embedded surface that records focus and close requests.
#[derive(Debug, Clone, Default)]
pub struct MockSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> parking_lot::MutexGuard<'_, SurfaceState> {
        self.state.lock()
    }

    pub fn boxed(&self) -> Box<dyn EmbeddedSurface> {
        Box::new(self.clone())
    }
}

impl EmbeddedSurface for MockSurface {
    fn focus(&mut self) {
        self.state.lock().focus_calls += 1;
    }

    fn request_close(&mut self) {
        self.state.lock().close_requests += 1;
    }

    fn is_inspector_focused(&self) -> bool {
        self.state.lock().inspector_focused
    }
}

#[derive(Debug, Default)]
pub struct GlobalMenuState {
    pub server_started: bool,
    pub menus: Vec<usize>,
}

/// A desktop menu server double.
#[derive(Debug, Clone, Default)]
pub struct MockGlobalMenu {
    state: Arc<Mutex<GlobalMenuState>>,
}

impl MockGlobalMenu {
    pub fn started() -> Self {
        let menu = Self::default();
        menu.state.lock().server_started = true;
        menu
    }

    pub fn stopped() -> Self {
        Self::default()
    }

    pub fn state(&self) -> parking_lot::MutexGuard<'_, GlobalMenuState> {
        self.state.lock()
    }
}

impl GlobalMenuSurface for MockGlobalMenu {
    fn is_server_started(&self) -> bool {
        self.state.lock().server_started
    }

    fn set_menu(&mut self, model: &MenuModel) {
        self.state.lock().menus.push(model.len());
    }
}

/// Route casement's logs to the test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("casement=debug")),
        )
        .with_test_writer()
        .try_init();
}
