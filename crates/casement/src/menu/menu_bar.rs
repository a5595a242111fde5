//! In-window menu bar state and the Alt-tap detector.

use casement_core::logging::targets;
use tracing::{debug, trace};

use crate::keyboard::{KeyEvent, KeyEventKind};
use crate::window::KeyClassifier;

/// Observable menu bar state.
///
/// `visible` implies `present`, and `present` never reverts to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuBarState {
    /// A menu bar exists for this window.
    pub present: bool,
    /// The menu bar is attached to the layout.
    pub visible: bool,
    /// A bare Alt key-down is waiting for its key-up.
    pub alt_pressed: bool,
}

/// The three states of the menu bar state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBarMode {
    /// No menu bar has been created.
    NoBar,
    /// The bar exists but is hidden.
    ///
    /// This covers any hidden bar, including one hidden with
    /// [`MenuBarController::set_visible`] while auto-hide is off; check
    /// [`MenuBarController::is_auto_hide`] to tell whether an Alt tap will
    /// reveal it.
    BarHiddenAutoHide,
    /// The bar is shown.
    BarVisible,
}

/// Owns menu bar presence, visibility and the auto-hide policy.
///
/// Every mutating method returns `true` when visibility changed, so the
/// owner can re-run layout and compensate the content size.
pub struct MenuBarController {
    state: MenuBarState,
    auto_hide: bool,
    classifier: Box<dyn KeyClassifier>,
}

impl MenuBarController {
    pub fn new(auto_hide: bool, classifier: Box<dyn KeyClassifier>) -> Self {
        Self {
            state: MenuBarState::default(),
            auto_hide,
            classifier,
        }
    }

    pub fn state(&self) -> MenuBarState {
        self.state
    }

    /// The state machine state. A hidden bar reports
    /// [`MenuBarMode::BarHiddenAutoHide`] whatever the auto-hide policy.
    pub fn mode(&self) -> MenuBarMode {
        match (self.state.present, self.state.visible) {
            (false, _) => MenuBarMode::NoBar,
            (true, false) => MenuBarMode::BarHiddenAutoHide,
            (true, true) => MenuBarMode::BarVisible,
        }
    }

    pub fn is_present(&self) -> bool {
        self.state.present
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Create the bar on the first menu of a framed window.
    ///
    /// The bar starts visible unless auto-hide is enabled. Later calls keep
    /// the existing bar and its visibility.
    pub fn attach(&mut self) -> bool {
        if self.state.present {
            return false;
        }
        self.state.present = true;
        debug!(target: targets::MENU_BAR, auto_hide = self.auto_hide, "menu bar created");

        if self.auto_hide {
            false
        } else {
            self.set_visible(true)
        }
    }

    /// Show or hide the bar. Does nothing before the bar exists.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if !self.state.present || self.state.visible == visible {
            return false;
        }
        self.state.visible = visible;
        debug!(target: targets::MENU_BAR, visible, "menu bar visibility changed");
        true
    }

    /// Change the auto-hide policy.
    ///
    /// Turning auto-hide off while the bar is hidden shows it; turning it on
    /// leaves the bar as it is.
    pub fn set_auto_hide(&mut self, auto_hide: bool) -> bool {
        self.auto_hide = auto_hide;
        self.state.alt_pressed = false;
        if !auto_hide {
            self.set_visible(true)
        } else {
            false
        }
    }

    /// Feed a key event to the Alt-tap detector.
    ///
    /// A bare Alt key-down arms the detector; the matching bare Alt key-up
    /// toggles the bar. Any other event in between disarms it, so `Alt+X`
    /// shortcuts never toggle.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        if !self.auto_hide {
            return false;
        }

        let is_alt = self.classifier.is_alt_key(event);
        match event.kind {
            KeyEventKind::Pressed if is_alt && self.classifier.is_alt_only_modifier(event) => {
                self.state.alt_pressed = true;
                trace!(target: targets::MENU_BAR, "alt tap armed");
                false
            }
            KeyEventKind::Released
                if is_alt && self.classifier.has_no_modifiers(event) && self.state.alt_pressed =>
            {
                self.state.alt_pressed = false;
                trace!(target: targets::MENU_BAR, "alt tap completed");
                let visible = !self.state.visible;
                self.set_visible(visible)
            }
            _ => {
                if self.state.alt_pressed {
                    trace!(target: targets::MENU_BAR, "alt tap disarmed");
                }
                self.state.alt_pressed = false;
                false
            }
        }
    }

    /// The window lost activation.
    pub fn handle_blur(&mut self) -> bool {
        self.hide_if_auto_hidden()
    }

    /// The primary content surface received a mouse-down.
    pub fn handle_mouse_down(&mut self) -> bool {
        self.hide_if_auto_hidden()
    }

    fn hide_if_auto_hidden(&mut self) -> bool {
        if self.auto_hide && self.state.visible {
            self.set_visible(false)
        } else {
            false
        }
    }
}

impl std::fmt::Debug for MenuBarController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBarController")
            .field("state", &self.state)
            .field("auto_hide", &self.auto_hide)
            .finish()
    }
}
