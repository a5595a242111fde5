//! Window event routing.
//!
//! [`WindowEventRouter`] translates winit window events into
//! [`WindowController`] calls:
//!
//! - `Focused`: activation changes (focus/blur signals, menu bar auto-hide)
//! - `CloseRequested`: the graceful close path
//! - `Destroyed`: the `closed` signal
//! - `ModifiersChanged` and `KeyboardInput`: accelerators and the Alt-tap
//!   detector
//! - `CursorMoved` and left-button presses: hit testing, which starts a
//!   window drag, a resize drag, or hides an auto-hidden menu bar
//! - `Resized` and `Moved`: layout
//!
//! # Usage
//!
//! ```ignore
//! impl ApplicationHandler for App {
//!     fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!         self.router.handle_window_event(&mut self.window, &event);
//!     }
//! }
//! ```

use casement_core::Point;
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::controller::WindowController;
use super::decoration::HitTestResult;
use super::host::WidgetDelegate;
use crate::keyboard::{
    key_from_winit, modifiers_for_key_event, modifiers_from_winit, KeyEvent, KeyboardModifiers,
};

/// Routes winit events for one window to its controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEventRouter {
    /// Last cursor position, relative to the client area.
    cursor: Point,
    /// Modifier state from the last `ModifiersChanged` or modifier key.
    modifiers: KeyboardModifiers,
}

impl WindowEventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// Handle a single window event.
    ///
    /// Returns `true` if the event was consumed, `false` to let the
    /// application perform default processing.
    pub fn handle_window_event(
        &mut self,
        controller: &mut WindowController,
        event: &WindowEvent,
    ) -> bool {
        match event {
            WindowEvent::Focused(focused) => {
                controller.on_activation_changed(*focused);
                false
            }
            WindowEvent::CloseRequested => {
                if controller.can_close() {
                    controller.close_immediately();
                }
                true
            }
            WindowEvent::Destroyed => {
                controller.on_widget_destroyed();
                true
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers_from_winit(modifiers);
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = key_from_winit(&event.logical_key, &event.physical_key);
                let pressed = event.state == ElementState::Pressed;
                let modifiers = modifiers_for_key_event(key, pressed, self.modifiers);
                if key.is_modifier() {
                    self.modifiers = modifiers;
                }

                let key_event = if pressed {
                    KeyEvent::pressed(key, modifiers).with_repeat(event.repeat)
                } else {
                    KeyEvent::released(key, modifiers)
                };
                let handled = controller.handle_keyboard_event(&key_event);

                if !handled && pressed && event.text.is_some() {
                    controller.handle_keyboard_event(&KeyEvent::character(key, modifiers));
                }
                handled
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x.floor() as i32, position.y.floor() as i32);
                false
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_left_press(controller),
            WindowEvent::Resized(_) | WindowEvent::Moved(_) => {
                let bounds = controller.bounds();
                controller.on_bounds_changed(bounds);
                false
            }
            _ => false,
        }
    }

    fn handle_left_press(&self, controller: &mut WindowController) -> bool {
        match controller.hit_test(self.cursor) {
            HitTestResult::Caption => {
                controller.begin_move_drag();
                true
            }
            HitTestResult::ResizeBorder(direction) => {
                controller.begin_resize_drag(direction);
                true
            }
            HitTestResult::Client => {
                controller.handle_mouse_down();
                false
            }
        }
    }
}
