//! Conversion from winit keyboard types.

use winit::event::Modifiers;
use winit::keyboard::{Key as WinitKey, KeyCode, NamedKey, PhysicalKey};

use super::{Key, KeyboardModifiers};

/// Convert a winit key to a Casement [`Key`].
///
/// The physical key is preferred for layout-independent identification; the
/// logical key is the fallback when the physical key is unidentified.
pub fn key_from_winit(logical: &WinitKey, physical: &PhysicalKey) -> Key {
    let key = match physical {
        PhysicalKey::Code(code) => from_key_code(*code),
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    };
    if !matches!(key, Key::Unknown(_)) {
        return key;
    }

    match logical {
        WinitKey::Named(named) => from_named_key(*named),
        WinitKey::Character(c) => from_character(c),
        WinitKey::Unidentified(_) | WinitKey::Dead(_) => Key::Unknown(0),
    }
}

/// Convert winit modifier state to [`KeyboardModifiers`].
pub fn modifiers_from_winit(modifiers: &Modifiers) -> KeyboardModifiers {
    let state = modifiers.state();
    KeyboardModifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Compute the modifier state to report with a key event.
///
/// winit does not order `ModifiersChanged` consistently relative to the key
/// event of the modifier itself. A modifier key's own press always reports
/// that modifier and its release never does, so a bare Alt tap reads as
/// `ALT` down followed by `NONE` up on every platform.
pub fn modifiers_for_key_event(
    key: Key,
    pressed: bool,
    current: KeyboardModifiers,
) -> KeyboardModifiers {
    let Some(flag) = key.modifier_flag() else {
        return current;
    };

    KeyboardModifiers {
        shift: if flag.shift { pressed } else { current.shift },
        control: if flag.control { pressed } else { current.control },
        alt: if flag.alt { pressed } else { current.alt },
        meta: if flag.meta { pressed } else { current.meta },
    }
}

fn from_named_key(key: NamedKey) -> Key {
    match key {
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::Home => Key::Home,
        NamedKey::End => Key::End,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::PageDown => Key::PageDown,
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Delete => Key::Delete,
        NamedKey::Insert => Key::Insert,
        NamedKey::Enter => Key::Enter,
        NamedKey::Tab => Key::Tab,
        NamedKey::Space => Key::Space,
        NamedKey::Escape => Key::Escape,
        NamedKey::CapsLock => Key::CapsLock,
        NamedKey::NumLock => Key::NumLock,
        NamedKey::ScrollLock => Key::ScrollLock,
        NamedKey::PrintScreen => Key::PrintScreen,
        NamedKey::Pause => Key::Pause,
        NamedKey::ContextMenu => Key::ContextMenu,
        // Logical modifiers carry no side; report the left key.
        NamedKey::Alt => Key::AltLeft,
        NamedKey::Control => Key::ControlLeft,
        NamedKey::Shift => Key::ShiftLeft,
        NamedKey::Super | NamedKey::Meta => Key::MetaLeft,
        NamedKey::F1 => Key::F1,
        NamedKey::F2 => Key::F2,
        NamedKey::F3 => Key::F3,
        NamedKey::F4 => Key::F4,
        NamedKey::F5 => Key::F5,
        NamedKey::F6 => Key::F6,
        NamedKey::F7 => Key::F7,
        NamedKey::F8 => Key::F8,
        NamedKey::F9 => Key::F9,
        NamedKey::F10 => Key::F10,
        NamedKey::F11 => Key::F11,
        NamedKey::F12 => Key::F12,
        _ => Key::Unknown(0),
    }
}

fn from_character(c: &str) -> Key {
    let mut chars = c.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Key::Unknown(0);
    };

    match ch.to_ascii_lowercase() {
        'a' => Key::A,
        'b' => Key::B,
        'c' => Key::C,
        'd' => Key::D,
        'e' => Key::E,
        'f' => Key::F,
        'g' => Key::G,
        'h' => Key::H,
        'i' => Key::I,
        'j' => Key::J,
        'k' => Key::K,
        'l' => Key::L,
        'm' => Key::M,
        'n' => Key::N,
        'o' => Key::O,
        'p' => Key::P,
        'q' => Key::Q,
        'r' => Key::R,
        's' => Key::S,
        't' => Key::T,
        'u' => Key::U,
        'v' => Key::V,
        'w' => Key::W,
        'x' => Key::X,
        'y' => Key::Y,
        'z' => Key::Z,
        '0' => Key::Digit0,
        '1' => Key::Digit1,
        '2' => Key::Digit2,
        '3' => Key::Digit3,
        '4' => Key::Digit4,
        '5' => Key::Digit5,
        '6' => Key::Digit6,
        '7' => Key::Digit7,
        '8' => Key::Digit8,
        '9' => Key::Digit9,
        '-' => Key::Minus,
        '=' => Key::Equal,
        '+' => Key::Plus,
        '[' => Key::BracketLeft,
        ']' => Key::BracketRight,
        '\\' => Key::Backslash,
        ';' => Key::Semicolon,
        '\'' => Key::Quote,
        ',' => Key::Comma,
        '.' => Key::Period,
        '/' => Key::Slash,
        '`' => Key::Grave,
        ' ' => Key::Space,
        other => Key::Unknown(u16::try_from(u32::from(other)).unwrap_or(0)),
    }
}

fn from_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::F13 => Key::F13,
        KeyCode::F14 => Key::F14,
        KeyCode::F15 => Key::F15,
        KeyCode::F16 => Key::F16,
        KeyCode::F17 => Key::F17,
        KeyCode::F18 => Key::F18,
        KeyCode::F19 => Key::F19,
        KeyCode::F20 => Key::F20,
        KeyCode::F21 => Key::F21,
        KeyCode::F22 => Key::F22,
        KeyCode::F23 => Key::F23,
        KeyCode::F24 => Key::F24,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Space => Key::Space,
        KeyCode::ShiftLeft => Key::ShiftLeft,
        KeyCode::ShiftRight => Key::ShiftRight,
        KeyCode::ControlLeft => Key::ControlLeft,
        KeyCode::ControlRight => Key::ControlRight,
        KeyCode::AltLeft => Key::AltLeft,
        KeyCode::AltRight => Key::AltRight,
        KeyCode::SuperLeft => Key::MetaLeft,
        KeyCode::SuperRight => Key::MetaRight,
        KeyCode::Minus => Key::Minus,
        KeyCode::Equal => Key::Equal,
        KeyCode::BracketLeft => Key::BracketLeft,
        KeyCode::BracketRight => Key::BracketRight,
        KeyCode::Backslash => Key::Backslash,
        KeyCode::Semicolon => Key::Semicolon,
        KeyCode::Quote => Key::Quote,
        KeyCode::Comma => Key::Comma,
        KeyCode::Period => Key::Period,
        KeyCode::Slash => Key::Slash,
        KeyCode::Backquote => Key::Grave,
        KeyCode::NumpadAdd => Key::Plus,
        KeyCode::Escape => Key::Escape,
        KeyCode::CapsLock => Key::CapsLock,
        KeyCode::NumLock => Key::NumLock,
        KeyCode::ScrollLock => Key::ScrollLock,
        KeyCode::PrintScreen => Key::PrintScreen,
        KeyCode::Pause => Key::Pause,
        KeyCode::ContextMenu => Key::ContextMenu,
        _ => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{NativeKeyCode, SmolStr};

    #[test]
    fn test_physical_key_preferred() {
        let key = key_from_winit(
            &WinitKey::Character(SmolStr::new("q")),
            &PhysicalKey::Code(KeyCode::KeyA),
        );
        // AZERTY: the physical A position produces 'q'
        assert_eq!(key, Key::A);
    }

    #[test]
    fn test_logical_fallback() {
        let key = key_from_winit(
            &WinitKey::Named(NamedKey::Alt),
            &PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
        );
        assert_eq!(key, Key::AltLeft);

        let key = key_from_winit(
            &WinitKey::Character(SmolStr::new("s")),
            &PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
        );
        assert_eq!(key, Key::S);
    }

    #[test]
    fn test_alt_keys_keep_side() {
        let alt = WinitKey::Named(NamedKey::Alt);
        let left = key_from_winit(&alt, &PhysicalKey::Code(KeyCode::AltLeft));
        let right = key_from_winit(&alt, &PhysicalKey::Code(KeyCode::AltRight));
        assert_eq!(left, Key::AltLeft);
        assert_eq!(right, Key::AltRight);
    }

    #[test]
    fn test_modifiers_for_bare_alt_tap() {
        // ModifiersChanged may not have arrived yet for the press.
        let down = modifiers_for_key_event(Key::AltLeft, true, KeyboardModifiers::NONE);
        assert_eq!(down, KeyboardModifiers::ALT);

        // ...and may not have been cleared yet for the release.
        let up = modifiers_for_key_event(Key::AltLeft, false, KeyboardModifiers::ALT);
        assert_eq!(up, KeyboardModifiers::NONE);
    }

    #[test]
    fn test_modifiers_for_regular_key_pass_through() {
        let mods = modifiers_for_key_event(Key::S, true, KeyboardModifiers::CTRL);
        assert_eq!(mods, KeyboardModifiers::CTRL);

        let mods = modifiers_for_key_event(Key::ShiftLeft, true, KeyboardModifiers::ALT);
        assert_eq!(mods, KeyboardModifiers::ALT_SHIFT);
    }
}
