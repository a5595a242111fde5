//! Keyboard types for the window layer.
//!
//! This module provides:
//!
//! - [`Key`] and [`KeyboardModifiers`]: layout-independent key identity and
//!   modifier state
//! - [`KeyEvent`]: a key press, release or character event as delivered by
//!   the host or the embedded surface
//! - [`KeyCombination`]: an accelerator (one key plus modifiers), parseable
//!   from strings like `"CmdOrCtrl+Shift+Z"`
//! - Conversions from winit keyboard types

mod accelerator;
mod winit_keys;

pub use accelerator::{AcceleratorParseError, KeyCombination};
pub use winit_keys::{key_from_winit, modifiers_for_key_event, modifiers_from_winit};

/// Modifier key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        control: true,
        ..Self::NONE
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Alt + Shift modifiers.
    pub const ALT_SHIFT: Self = Self {
        alt: true,
        shift: true,
        ..Self::NONE
    };

    /// Control + Shift modifiers.
    pub const CTRL_SHIFT: Self = Self {
        control: true,
        shift: true,
        ..Self::NONE
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Keyboard keys, identified by their position on a US layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete, Insert,
    Enter, Tab, Space,

    // Modifiers (also tracked via KeyboardModifiers, but delivered as key events)
    ShiftLeft, ShiftRight,
    ControlLeft, ControlRight,
    AltLeft, AltRight,
    MetaLeft, MetaRight,

    // Punctuation and symbols
    Minus, Equal,
    BracketLeft, BracketRight, Backslash,
    Semicolon, Quote,
    Comma, Period, Slash,
    Grave, Plus,

    // Control
    Escape,
    CapsLock, NumLock, ScrollLock,
    PrintScreen, Pause, ContextMenu,

    /// A key without a dedicated variant.
    Unknown(u16),
}

impl Key {
    /// Check whether this key is one of the modifier keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::ShiftLeft
                | Key::ShiftRight
                | Key::ControlLeft
                | Key::ControlRight
                | Key::AltLeft
                | Key::AltRight
                | Key::MetaLeft
                | Key::MetaRight
        )
    }

    /// Check whether this key is the left or right Alt key.
    pub fn is_alt(self) -> bool {
        matches!(self, Key::AltLeft | Key::AltRight)
    }

    /// The modifier flag this key controls, if it is a modifier key.
    pub fn modifier_flag(self) -> Option<KeyboardModifiers> {
        match self {
            Key::ShiftLeft | Key::ShiftRight => Some(KeyboardModifiers::SHIFT),
            Key::ControlLeft | Key::ControlRight => Some(KeyboardModifiers::CTRL),
            Key::AltLeft | Key::AltRight => Some(KeyboardModifiers::ALT),
            Key::MetaLeft | Key::MetaRight => Some(KeyboardModifiers::META),
            _ => None,
        }
    }
}

/// What happened to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    /// The key went down (before any character translation).
    Pressed,
    /// The key went up.
    Released,
    /// A character was produced by a previous press.
    Character,
}

/// A keyboard event delivered to the window.
///
/// `modifiers` is the modifier state as reported with the event itself: a
/// bare Alt press reports `ALT`, and the matching release reports `NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Press, release or character.
    pub kind: KeyEventKind,
    /// The key involved.
    pub key: Key,
    /// Modifier state for this event.
    pub modifiers: KeyboardModifiers,
    /// Platform virtual-key code, when the source provides one.
    pub native_key_code: Option<u32>,
    /// Whether this is an auto-repeat press.
    pub is_repeat: bool,
}

impl KeyEvent {
    /// Create a key-down event.
    pub fn pressed(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            kind: KeyEventKind::Pressed,
            key,
            modifiers,
            native_key_code: None,
            is_repeat: false,
        }
    }

    /// Create a key-up event.
    pub fn released(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            kind: KeyEventKind::Released,
            key,
            modifiers,
            native_key_code: None,
            is_repeat: false,
        }
    }

    /// Create a character event.
    pub fn character(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            kind: KeyEventKind::Character,
            key,
            modifiers,
            native_key_code: None,
            is_repeat: false,
        }
    }

    /// Attach a native virtual-key code.
    pub fn with_native_key_code(mut self, code: u32) -> Self {
        self.native_key_code = Some(code);
        self
    }

    /// Mark this event as an auto-repeat.
    pub fn with_repeat(mut self, is_repeat: bool) -> Self {
        self.is_repeat = is_repeat;
        self
    }

    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Pressed
    }

    pub fn is_release(&self) -> bool {
        self.kind == KeyEventKind::Released
    }

    /// The accelerator this event would trigger.
    pub fn combination(&self) -> KeyCombination {
        KeyCombination::new(self.key, self.modifiers)
    }
}
