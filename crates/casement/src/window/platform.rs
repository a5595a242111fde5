//! Platform capabilities selected at window construction.
//!
//! The controller never branches on the target OS directly. Everything that
//! differs per platform (menu bar height, Alt key detection, global menus,
//! bounds reporting while minimized) is answered by the types here.

use std::env;

use crate::keyboard::{KeyEvent, KeyboardModifiers};

/// Virtual-key code of the left Alt key (`VK_LMENU`).
const VK_LMENU: u32 = 164;
/// Virtual-key code of the right Alt key (`VK_RMENU`).
const VK_RMENU: u32 = 165;
/// Virtual-key code of either Alt key (`VK_MENU`).
const VK_MENU: u32 = 18;

/// The platform family the window runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Height of the in-window menu bar in pixels.
    pub fn menu_bar_height(self) -> i32 {
        match self {
            Platform::Windows => 20,
            _ => 25,
        }
    }

    /// Whether size and position should report the restored bounds while
    /// the window is minimized.
    pub fn reports_restored_bounds_when_minimized(self) -> bool {
        self == Platform::Windows
    }

    /// Whether a global (desktop-provided) menu bar may replace the
    /// in-window bar.
    pub fn supports_global_menu(self) -> bool {
        self == Platform::Linux
    }

    /// The key classifier matching this platform's key events.
    pub fn key_classifier(self) -> Box<dyn KeyClassifier> {
        match self {
            Platform::Windows | Platform::Linux => Box::new(VirtualKeyClassifier::new(self)),
            Platform::MacOs | Platform::Other => Box::new(LogicalKeyClassifier),
        }
    }
}

/// Classifies key events for the Alt-tap detector.
pub trait KeyClassifier: Send {
    /// The event is for the left or right Alt key.
    fn is_alt_key(&self, event: &KeyEvent) -> bool;

    /// Alt is the only modifier held.
    fn is_alt_only_modifier(&self, event: &KeyEvent) -> bool {
        event.modifiers == KeyboardModifiers::ALT
    }

    /// No modifier is held.
    fn has_no_modifiers(&self, event: &KeyEvent) -> bool {
        event.modifiers.none()
    }
}

/// Identifies Alt by the layout-independent [`Key`](crate::keyboard::Key).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalKeyClassifier;

impl KeyClassifier for LogicalKeyClassifier {
    fn is_alt_key(&self, event: &KeyEvent) -> bool {
        event.key.is_alt()
    }
}

/// Identifies Alt by native virtual-key code.
///
/// X11 reports the sided codes (164/165) while Windows reports the unsided
/// `VK_MENU` (18). Events without a native code fall back to the logical key.
#[derive(Debug, Clone, Copy)]
pub struct VirtualKeyClassifier {
    platform: Platform,
}

impl VirtualKeyClassifier {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl KeyClassifier for VirtualKeyClassifier {
    fn is_alt_key(&self, event: &KeyEvent) -> bool {
        match event.native_key_code {
            Some(code) if self.platform == Platform::Windows => code == VK_MENU,
            Some(code) => code == VK_LMENU || code == VK_RMENU,
            None => event.key.is_alt(),
        }
    }
}

/// Desktop environment detected from the session variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopEnvironment {
    Unity,
    Gnome,
    Kde,
    Xfce,
    Other,
}

impl DesktopEnvironment {
    /// Detect the running desktop from `XDG_CURRENT_DESKTOP`, falling back to
    /// `DESKTOP_SESSION`.
    pub fn detect() -> Self {
        let current = env::var("XDG_CURRENT_DESKTOP").ok();
        let session = env::var("DESKTOP_SESSION").ok();
        Self::from_vars(current.as_deref(), session.as_deref())
    }

    /// Classify from the raw variable values.
    pub fn from_vars(current_desktop: Option<&str>, desktop_session: Option<&str>) -> Self {
        if let Some(current) = current_desktop.filter(|v| !v.is_empty()) {
            // XDG_CURRENT_DESKTOP may be a colon-separated list
            for name in current.split(':') {
                match name.trim().to_ascii_lowercase().as_str() {
                    "unity" => return DesktopEnvironment::Unity,
                    "gnome" => return DesktopEnvironment::Gnome,
                    "kde" => return DesktopEnvironment::Kde,
                    "xfce" => return DesktopEnvironment::Xfce,
                    _ => {}
                }
            }
        }

        match desktop_session.map(str::to_ascii_lowercase).as_deref() {
            Some(s) if s.contains("unity") || s == "ubuntu" => DesktopEnvironment::Unity,
            Some("gnome") => DesktopEnvironment::Gnome,
            Some(s) if s.contains("kde") || s == "plasma" => DesktopEnvironment::Kde,
            Some(s) if s.contains("xfce") => DesktopEnvironment::Xfce,
            _ => DesktopEnvironment::Other,
        }
    }

    /// Whether a global menu bar should be used.
    ///
    /// Some desktops claim to be Unity without providing the global
    /// application menu, so only Unity itself qualifies.
    pub fn should_use_global_menu_bar(self) -> bool {
        self == DesktopEnvironment::Unity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Key;

    #[test]
    fn test_menu_bar_height() {
        assert_eq!(Platform::Windows.menu_bar_height(), 20);
        assert_eq!(Platform::Linux.menu_bar_height(), 25);
        assert_eq!(Platform::MacOs.menu_bar_height(), 25);
    }

    #[test]
    fn test_restored_bounds_only_on_windows() {
        assert!(Platform::Windows.reports_restored_bounds_when_minimized());
        assert!(!Platform::Linux.reports_restored_bounds_when_minimized());
    }

    #[test]
    fn test_virtual_key_classifier_x11_codes() {
        let classifier = VirtualKeyClassifier::new(Platform::Linux);
        let left = KeyEvent::pressed(Key::Unknown(0), KeyboardModifiers::ALT).with_native_key_code(164);
        let right = KeyEvent::pressed(Key::Unknown(0), KeyboardModifiers::ALT).with_native_key_code(165);
        let menu = KeyEvent::pressed(Key::AltLeft, KeyboardModifiers::ALT).with_native_key_code(18);

        assert!(classifier.is_alt_key(&left));
        assert!(classifier.is_alt_key(&right));
        // The native code wins over the logical key
        assert!(!classifier.is_alt_key(&menu));
    }

    #[test]
    fn test_virtual_key_classifier_windows_code() {
        let classifier = VirtualKeyClassifier::new(Platform::Windows);
        let menu = KeyEvent::pressed(Key::AltLeft, KeyboardModifiers::ALT).with_native_key_code(18);
        let lmenu = KeyEvent::pressed(Key::AltLeft, KeyboardModifiers::ALT).with_native_key_code(164);

        assert!(classifier.is_alt_key(&menu));
        assert!(!classifier.is_alt_key(&lmenu));
    }

    #[test]
    fn test_virtual_key_classifier_fallback() {
        let classifier = VirtualKeyClassifier::new(Platform::Linux);
        assert!(classifier.is_alt_key(&KeyEvent::pressed(Key::AltRight, KeyboardModifiers::ALT)));
        assert!(!classifier.is_alt_key(&KeyEvent::pressed(Key::A, KeyboardModifiers::ALT)));
    }

    #[test]
    fn test_modifier_checks() {
        let classifier = LogicalKeyClassifier;
        let bare = KeyEvent::pressed(Key::AltLeft, KeyboardModifiers::ALT);
        let shifted = KeyEvent::pressed(Key::AltLeft, KeyboardModifiers::ALT_SHIFT);
        let up = KeyEvent::released(Key::AltLeft, KeyboardModifiers::NONE);

        assert!(classifier.is_alt_only_modifier(&bare));
        assert!(!classifier.is_alt_only_modifier(&shifted));
        assert!(classifier.has_no_modifiers(&up));
        assert!(!classifier.has_no_modifiers(&bare));
    }

    #[test]
    fn test_desktop_detection() {
        assert_eq!(DesktopEnvironment::from_vars(Some("Unity"), None), DesktopEnvironment::Unity);
        assert_eq!(
            DesktopEnvironment::from_vars(Some("ubuntu:GNOME"), None),
            DesktopEnvironment::Gnome
        );
        assert_eq!(DesktopEnvironment::from_vars(Some("KDE"), None), DesktopEnvironment::Kde);
        assert_eq!(DesktopEnvironment::from_vars(None, Some("ubuntu")), DesktopEnvironment::Unity);
        assert_eq!(DesktopEnvironment::from_vars(Some(""), Some("xfce")), DesktopEnvironment::Xfce);
        assert_eq!(DesktopEnvironment::from_vars(None, None), DesktopEnvironment::Other);
    }

    #[test]
    fn test_global_menu_only_for_unity() {
        assert!(DesktopEnvironment::Unity.should_use_global_menu_bar());
        assert!(!DesktopEnvironment::Gnome.should_use_global_menu_bar());
        assert!(!DesktopEnvironment::Other.should_use_global_menu_bar());
    }
}
