//! The window controller.
//!
//! `WindowController` owns the menu bar state machine, the accelerator
//! table, the draggable region mask and the bounds converter. It translates
//! window lifecycle calls into host widget calls and routes input (keys,
//! activation, mouse-downs, hit tests) to the right component.
//!
//! # Example
//!
//! ```ignore
//! use casement::prelude::*;
//!
//! let config = WindowConfig::from_options(&WindowOptions::from_json(json)?)?;
//! let mut window = WindowController::new(config, WinitHostFactory::new(event_loop), surface)?;
//!
//! window.command_activated().connect(|id| println!("command {id}"));
//! window.set_menu(menu);
//! ```

use casement_core::logging::{span_names, targets};
use casement_core::{CasementError, Point, Rect, Signal, Size};
use tracing::{debug, trace, warn};

use super::bounds::BoundsConverter;
use super::decoration::{select_decoration, DecorationProvider, HitTestResult, ResizeDirection};
use super::draggable_region::{DraggableRegion, DraggableRegionMask};
use super::host::{
    ContentLayout, EmbeddedSurface, GlobalMenuSurface, HostWidget, HostWidgetFactory,
    WidgetDelegate, WidgetParams, WindowStyle,
};
use super::options::WindowConfig;
use super::platform::{DesktopEnvironment, KeyClassifier, Platform};
use crate::keyboard::{KeyCombination, KeyEvent};
use crate::menu::{AcceleratorTable, CommandId, MenuBarController, MenuBarMode, MenuBarState, MenuModel};

/// Platform capabilities a window is constructed with.
pub struct WindowCapabilities {
    platform: Platform,
    key_classifier: Option<Box<dyn KeyClassifier>>,
    global_menu: Option<Box<dyn GlobalMenuSurface>>,
}

impl WindowCapabilities {
    /// Capabilities of the platform this binary runs on.
    pub fn detect() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Capabilities of a specific platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            key_classifier: None,
            global_menu: None,
        }
    }

    /// Override the platform's key classifier.
    pub fn with_key_classifier(mut self, classifier: Box<dyn KeyClassifier>) -> Self {
        self.key_classifier = Some(classifier);
        self
    }

    /// Use a global menu surface whenever its server is running.
    pub fn with_global_menu(mut self, surface: Box<dyn GlobalMenuSurface>) -> Self {
        self.global_menu = Some(surface);
        self
    }

    /// Use a global menu surface only where the desktop provides one.
    pub fn with_global_menu_if_supported(self, surface: Box<dyn GlobalMenuSurface>) -> Self {
        if self.platform.supports_global_menu()
            && DesktopEnvironment::detect().should_use_global_menu_bar()
        {
            self.with_global_menu(surface)
        } else {
            self
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl Default for WindowCapabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// A single native window and its interaction state.
pub struct WindowController {
    config: WindowConfig,
    platform: Platform,
    host: Box<dyn HostWidget>,
    surface: Box<dyn EmbeddedSurface>,
    global_menu: Option<Box<dyn GlobalMenuSurface>>,
    decoration: Box<dyn DecorationProvider>,
    converter: BoundsConverter,
    menu_bar: MenuBarController,
    accelerators: AcceleratorTable,
    draggable: DraggableRegionMask,
    menu: Option<MenuModel>,
    destroyed: bool,

    focused: Signal<()>,
    blurred: Signal<()>,
    closed: Signal<()>,
    command_activated: Signal<CommandId>,
}

impl WindowController {
    /// Create a window with the current platform's capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`CasementError::WindowCreation`] if the host widget cannot be
    /// created; no window exists in that case.
    pub fn new(
        config: WindowConfig,
        factory: impl HostWidgetFactory,
        surface: Box<dyn EmbeddedSurface>,
    ) -> Result<Self, CasementError> {
        Self::with_capabilities(config, factory, surface, WindowCapabilities::detect())
    }

    /// Create a window with explicit platform capabilities.
    pub fn with_capabilities(
        config: WindowConfig,
        mut factory: impl HostWidgetFactory,
        surface: Box<dyn EmbeddedSurface>,
        capabilities: WindowCapabilities,
    ) -> Result<Self, CasementError> {
        let _span = tracing::info_span!(span_names::WINDOW_CREATE, title = config.title()).entered();

        let params = WidgetParams {
            bounds: config.initial_bounds(),
            title: config.title().to_string(),
            has_frame: config.has_frame(),
            resizable: config.is_resizable(),
        };
        let host = factory.create(&params).map_err(|err| {
            warn!(target: targets::WINDOW, error = %err, "host widget creation failed");
            CasementError::from(err)
        })?;

        let platform = capabilities.platform;
        let mut decoration = select_decoration(config.has_frame(), host.frame_insets());
        decoration.set_resize_enabled(config.is_resizable());
        let classifier = capabilities
            .key_classifier
            .unwrap_or_else(|| platform.key_classifier());

        let mut controller = Self {
            menu_bar: MenuBarController::new(config.menu_bar_auto_hide(), classifier),
            converter: BoundsConverter::new(platform.menu_bar_height()),
            config,
            platform,
            host,
            surface,
            global_menu: capabilities.global_menu,
            decoration,
            accelerators: AcceleratorTable::new(),
            draggable: DraggableRegionMask::new(),
            menu: None,
            destroyed: false,
            focused: Signal::new(),
            blurred: Signal::new(),
            closed: Signal::new(),
            command_activated: Signal::new(),
        };
        controller.apply_initial_state();

        debug!(
            target: targets::WINDOW,
            bounds = ?controller.bounds(),
            has_frame = controller.config.has_frame(),
            platform = ?platform,
            "window created"
        );
        Ok(controller)
    }

    fn apply_initial_state(&mut self) {
        if self.config.use_content_size() {
            self.set_content_size(self.config.size());
        } else {
            // Some hosts size the client area at creation; width and height
            // are the outer size here.
            self.set_size(self.config.size());
        }
        if self.config.position().is_none() {
            self.center();
        }

        self.host.set_minimum_size(self.config.min_size());
        self.host.set_maximum_size(self.config.max_size());
        if self.config.has_frame() {
            self.host
                .set_window_style(WindowStyle::with_resizable(self.config.is_resizable()));
        }
        if self.config.always_on_top() {
            self.host.set_always_on_top(true);
        }
        if self.config.fullscreen() {
            self.host.set_fullscreen(true);
        }
        if self.config.skip_taskbar() {
            self.host.set_skip_taskbar(true);
        }

        self.layout();
        if self.config.is_visible() {
            self.host.show();
        }
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted when the window gains activation.
    pub fn focused(&self) -> &Signal<()> {
        &self.focused
    }

    /// Emitted when the window loses activation.
    pub fn blurred(&self) -> &Signal<()> {
        &self.blurred
    }

    /// Emitted once the host widget has been destroyed.
    pub fn closed(&self) -> &Signal<()> {
        &self.closed
    }

    /// Emitted with the command id of each dispatched accelerator.
    pub fn command_activated(&self) -> &Signal<CommandId> {
        &self.command_activated
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Close gracefully.
    ///
    /// The embedded surface is asked to close first; its own close sequence
    /// ends in [`close_immediately`](Self::close_immediately). If it never
    /// completes, the window stays open.
    pub fn close(&mut self) {
        if WidgetDelegate::can_close(self) {
            self.host.close();
        }
    }

    /// Close without consulting the embedded surface.
    pub fn close_immediately(&mut self) {
        debug!(target: targets::WINDOW, "closing window immediately");
        self.host.close_now();
    }

    /// Whether the host widget has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn show(&mut self) {
        self.host.show();
    }

    pub fn hide(&mut self) {
        self.host.hide();
    }

    pub fn is_visible(&self) -> bool {
        self.host.is_visible()
    }

    /// Activate or deactivate the window.
    pub fn focus(&mut self, focus: bool) {
        if focus {
            self.host.activate();
        } else {
            self.host.deactivate();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.host.is_active()
    }

    // =========================================================================
    // Window state
    // =========================================================================

    pub fn maximize(&mut self) {
        self.host.maximize();
    }

    pub fn unmaximize(&mut self) {
        self.host.restore();
    }

    pub fn is_maximized(&self) -> bool {
        self.host.is_maximized()
    }

    pub fn minimize(&mut self) {
        self.host.minimize();
    }

    pub fn restore(&mut self) {
        self.host.restore();
    }

    pub fn is_minimized(&self) -> bool {
        self.host.is_minimized()
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.host.set_fullscreen(fullscreen);
    }

    pub fn is_fullscreen(&self) -> bool {
        self.host.is_fullscreen()
    }

    /// Kiosk mode is fullscreen on this layer.
    pub fn set_kiosk(&mut self, kiosk: bool) {
        self.set_fullscreen(kiosk);
    }

    pub fn is_kiosk(&self) -> bool {
        self.is_fullscreen()
    }

    // =========================================================================
    // Bounds
    // =========================================================================

    /// Window bounds in screen coordinates.
    ///
    /// Where the platform asks for it, a minimized window reports the
    /// bounds it will be restored to.
    pub fn bounds(&self) -> Rect {
        if self.platform.reports_restored_bounds_when_minimized() && self.host.is_minimized() {
            self.host.restored_bounds()
        } else {
            self.host.window_bounds()
        }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.host.set_window_bounds(bounds);
    }

    pub fn position(&self) -> Point {
        self.bounds().origin
    }

    pub fn set_position(&mut self, position: Point) {
        let bounds = self.host.window_bounds().with_origin(position);
        self.set_bounds(bounds);
    }

    pub fn size(&self) -> Size {
        self.bounds().size
    }

    pub fn set_size(&mut self, size: Size) {
        let bounds = self.host.window_bounds().with_size(size);
        self.set_bounds(bounds);
    }

    /// Center the window on its display.
    pub fn center(&mut self) {
        let size = self.size();
        self.host.center_window(size);
    }

    /// Bounds of the area given to the embedded surface, in screen
    /// coordinates.
    pub fn content_bounds(&self) -> Rect {
        self.converter.window_to_content(
            self.decoration.as_ref(),
            self.host.window_bounds(),
            self.menu_bar.is_visible(),
        )
    }

    pub fn set_content_bounds(&mut self, bounds: Rect) {
        let window = self.converter.content_to_window(
            self.decoration.as_ref(),
            bounds,
            self.menu_bar.is_visible(),
        );
        self.host.set_window_bounds(window);
    }

    /// Size of the content area, excluding the decoration and a visible
    /// menu bar.
    pub fn content_size(&self) -> Size {
        self.content_bounds().size
    }

    /// Resize the window so the content area has `size`, keeping the
    /// window's position.
    pub fn set_content_size(&mut self, size: Size) {
        let window = self.converter.content_to_window(
            self.decoration.as_ref(),
            Rect::from_origin_size(Point::ZERO, size),
            self.menu_bar.is_visible(),
        );
        let bounds = self.host.window_bounds().with_size(window.size);
        self.host.set_window_bounds(bounds);
    }

    pub fn set_minimum_size(&mut self, size: Size) {
        self.config.set_min_size(size);
        self.host.set_minimum_size(size);
    }

    pub fn minimum_size(&self) -> Size {
        self.config.min_size()
    }

    pub fn set_maximum_size(&mut self, size: Size) {
        self.config.set_max_size(size);
        self.host.set_maximum_size(size);
    }

    pub fn maximum_size(&self) -> Size {
        self.config.max_size()
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn title(&self) -> &str {
        self.config.title()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.host.set_title(&title);
        self.config.set_title(title);
    }

    /// Change whether the window can be resized.
    ///
    /// Framed windows also update their minimize/maximize buttons and sizing
    /// border; frameless windows only toggle their resize borders.
    pub fn set_resizable(&mut self, resizable: bool) {
        self.config.set_resizable(resizable);
        self.decoration.set_resize_enabled(resizable);
        if self.config.has_frame() {
            self.host.set_window_style(WindowStyle::with_resizable(resizable));
        } else {
            trace!(target: targets::WINDOW, "window style not applied to frameless window");
        }
    }

    pub fn is_resizable(&self) -> bool {
        self.config.is_resizable()
    }

    pub fn set_always_on_top(&mut self, always_on_top: bool) {
        self.host.set_always_on_top(always_on_top);
    }

    pub fn is_always_on_top(&self) -> bool {
        self.host.is_always_on_top()
    }

    pub fn set_skip_taskbar(&mut self, skip: bool) {
        self.config.set_skip_taskbar(skip);
        self.host.set_skip_taskbar(skip);
    }

    pub fn is_skip_taskbar(&self) -> bool {
        self.config.skip_taskbar()
    }

    /// Start or stop flashing the window to attract attention.
    pub fn flash_frame(&mut self, flash: bool) {
        self.host.flash_frame(flash);
    }

    pub fn has_frame(&self) -> bool {
        self.config.has_frame()
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Install a menu.
    ///
    /// Accelerators are always registered. A running global menu surface
    /// then takes the menu; otherwise a framed window creates its in-window
    /// bar on first use. Frameless windows never show a menu bar.
    pub fn set_menu(&mut self, model: MenuModel) {
        self.accelerators.register(&model, self.host.as_mut());

        if let Some(global) = self.global_menu.as_mut()
            && global.is_server_started()
        {
            global.set_menu(&model);
            debug!(target: targets::MENU_BAR, "menu handed to global menu bar");
            self.menu = Some(model);
            return;
        }

        if !self.config.has_frame() {
            trace!(target: targets::MENU_BAR, "frameless window, no menu bar");
            self.menu = Some(model);
            return;
        }

        let content = self.content_size();
        if self.menu_bar.attach() && self.config.use_content_size() {
            self.set_content_size(content);
        }
        self.host.set_menu_bar_model(&model);
        self.menu = Some(model);
        self.layout();
    }

    /// The menu last passed to [`set_menu`](Self::set_menu).
    pub fn menu(&self) -> Option<&MenuModel> {
        self.menu.as_ref()
    }

    pub fn menu_bar_state(&self) -> MenuBarMode {
        self.menu_bar.mode()
    }

    pub fn menu_bar(&self) -> MenuBarState {
        self.menu_bar.state()
    }

    pub fn is_menu_bar_visible(&self) -> bool {
        self.menu_bar.is_visible()
    }

    /// Show or hide the in-window menu bar, if there is one.
    pub fn set_menu_bar_visibility(&mut self, visible: bool) {
        if self.menu_bar.set_visible(visible) {
            self.menu_bar_visibility_changed();
        }
    }

    pub fn set_auto_hide_menu_bar(&mut self, auto_hide: bool) {
        self.config.set_menu_bar_auto_hide(auto_hide);
        if self.menu_bar.set_auto_hide(auto_hide) {
            self.menu_bar_visibility_changed();
        }
    }

    pub fn is_menu_bar_auto_hide(&self) -> bool {
        self.menu_bar.is_auto_hide()
    }

    /// The menu bar appeared or disappeared: keep the content size if asked
    /// to, then lay out again.
    fn menu_bar_visibility_changed(&mut self) {
        let visible = self.menu_bar.is_visible();
        if self.config.use_content_size() {
            let previous = self.converter.window_to_content(
                self.decoration.as_ref(),
                self.host.window_bounds(),
                !visible,
            );
            self.set_content_size(previous.size);
        }
        self.layout();
    }

    pub fn accelerators(&self) -> &AcceleratorTable {
        &self.accelerators
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// A registered accelerator fired.
    ///
    /// Returns `false` when the combination is not bound, so the host can
    /// continue with its default handling.
    pub fn accelerator_pressed(&mut self, combination: KeyCombination) -> bool {
        self.dispatch_accelerator(combination)
    }

    fn dispatch_accelerator(&self, combination: KeyCombination) -> bool {
        let signal = &self.command_activated;
        self.accelerators.dispatch(combination, |id| signal.emit(id))
    }

    /// A key event the embedded surface did not consume.
    ///
    /// Key-downs are matched against the accelerator table; every event
    /// feeds the menu bar's Alt-tap detector. Returns whether an
    /// accelerator handled the event.
    pub fn handle_keyboard_event(&mut self, event: &KeyEvent) -> bool {
        let handled = event.is_press() && self.dispatch_accelerator(event.combination());
        if self.menu_bar.handle_key_event(event) {
            self.menu_bar_visibility_changed();
        }
        handled
    }

    /// The primary content surface received a mouse-down.
    pub fn handle_mouse_down(&mut self) {
        if self.menu_bar.handle_mouse_down() {
            self.menu_bar_visibility_changed();
        }
    }

    /// Replace the draggable regions of a frameless window.
    ///
    /// Framed windows ignore draggable regions.
    pub fn update_draggable_regions(&mut self, regions: &[DraggableRegion]) {
        if self.config.has_frame() {
            trace!(target: targets::HIT_TEST, "framed window, draggable regions ignored");
            return;
        }
        self.draggable.rebuild(regions);
    }

    pub fn draggable_region(&self) -> &DraggableRegionMask {
        &self.draggable
    }

    /// Classify a window-relative point.
    ///
    /// Draggable regions come first, then the resize border of a frameless
    /// resizable window.
    pub fn hit_test(&self, point: Point) -> HitTestResult {
        if self.draggable.contains(point) {
            return HitTestResult::Caption;
        }
        if let Some(direction) = self.resizing_border(point) {
            return HitTestResult::ResizeBorder(direction);
        }
        HitTestResult::Client
    }

    /// Whether events at `point` should be routed to child views.
    pub fn should_descend_into_child(&self, point: Point) -> bool {
        let result = self.hit_test(point);
        trace!(target: targets::HIT_TEST, x = point.x, y = point.y, ?result, "hit test");
        result.is_client()
    }

    fn resizing_border(&self, point: Point) -> Option<ResizeDirection> {
        if self.config.has_frame() || !self.can_resize() {
            return None;
        }
        self.decoration
            .resizing_border_hit_test(point, self.host.window_bounds().size)
    }

    /// Start moving the window with the pointer.
    pub fn begin_move_drag(&mut self) {
        self.host.begin_move_drag();
    }

    /// Start resizing the window with the pointer.
    pub fn begin_resize_drag(&mut self, direction: ResizeDirection) {
        self.host.begin_resize_drag(direction);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Place the menu bar and the content inside the client area and hand
    /// the result to the host.
    pub fn layout(&mut self) -> ContentLayout {
        let _span = tracing::trace_span!(span_names::LAYOUT).entered();

        let client = self.converter.window_to_content(
            self.decoration.as_ref(),
            self.host.window_bounds(),
            false,
        );
        let client = Rect::from_origin_size(Point::ZERO, client.size);

        let layout = if self.menu_bar.is_visible() {
            let height = self.converter.menu_bar_height().min(client.height().max(0));
            ContentLayout {
                client,
                menu_bar: Some(Rect::new(0, 0, client.width(), height)),
                content: Rect::new(0, height, client.width(), client.height() - height),
            }
        } else {
            ContentLayout {
                client,
                menu_bar: None,
                content: client,
            }
        };

        self.host.apply_layout(&layout);
        layout
    }
}

impl WidgetDelegate for WindowController {
    /// Hand the close to the embedded surface and answer "not yet".
    fn can_close(&mut self) -> bool {
        debug!(target: targets::WINDOW, "close requested, asking embedded surface");
        self.surface.request_close();
        false
    }

    fn on_activation_changed(&mut self, active: bool) {
        if active {
            self.focused.emit(());
            if !self.surface.is_inspector_focused() {
                self.surface.focus();
            }
        } else {
            self.blurred.emit(());
            if self.menu_bar.handle_blur() {
                self.menu_bar_visibility_changed();
            }
        }
    }

    fn on_bounds_changed(&mut self, bounds: Rect) {
        trace!(target: targets::WINDOW, ?bounds, "bounds changed");
        self.layout();
    }

    fn on_widget_destroyed(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        debug!(target: targets::WINDOW, "window destroyed");
        self.closed.emit(());
    }

    fn can_resize(&self) -> bool {
        self.config.is_resizable()
    }

    fn can_maximize(&self) -> bool {
        self.config.is_resizable()
    }

    fn window_title(&self) -> &str {
        self.config.title()
    }
}

impl Drop for WindowController {
    fn drop(&mut self) {
        self.accelerators.unregister(self.host.as_mut());
    }
}

impl std::fmt::Debug for WindowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowController")
            .field("config", &self.config)
            .field("platform", &self.platform)
            .field("menu_bar", &self.menu_bar)
            .field("accelerators", &self.accelerators.len())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
