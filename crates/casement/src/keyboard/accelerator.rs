//! Accelerator key combinations.
//!
//! An accelerator is a single key plus the modifiers that must be held, e.g.
//! `Ctrl+S` or `Alt+F4`. Menu items carry them and the window dispatches them
//! regardless of which child view has focus.
//!
//! # String Format
//!
//! - Modifiers: `Ctrl`/`Control`, `Alt`/`Option`, `Shift`,
//!   `Meta`/`Cmd`/`Command`/`Super`, and `CmdOrCtrl`/`CommandOrControl`
//!   (Meta on macOS, Ctrl elsewhere)
//! - Keys: letters, digits, `F1`–`F24`, named keys (`Enter`, `Esc`,
//!   `PageUp`, ...) and punctuation
//!
//! ```ignore
//! use casement::keyboard::KeyCombination;
//!
//! let save: KeyCombination = "CmdOrCtrl+S".parse()?;
//! let redo: KeyCombination = "Ctrl+Shift+Z".parse()?;
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Key, KeyboardModifiers};

/// A single key combination (one key with modifiers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    /// The primary key.
    pub key: Key,
    /// The modifier keys that must be held.
    pub modifiers: KeyboardModifiers,
}

impl KeyCombination {
    /// Create a new key combination from a key and modifiers.
    pub const fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combination with no modifiers.
    pub const fn key_only(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    /// Create a Ctrl+key combination.
    pub const fn ctrl(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::CTRL)
    }

    /// Create an Alt+key combination.
    pub const fn alt(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::ALT)
    }

    /// Check if this key combination matches the given key and modifiers.
    pub fn matches(&self, key: Key, modifiers: KeyboardModifiers) -> bool {
        self.key == key && self.modifiers == modifiers
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.control {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.meta {
            parts.push("Meta".to_string());
        }

        parts.push(key_to_string(self.key));

        write!(f, "{}", parts.join("+"))
    }
}

/// Error type for parsing accelerators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcceleratorParseError {
    /// The string is empty.
    #[error("empty accelerator")]
    Empty,
    /// No key was specified (only modifiers).
    #[error("no key specified (only modifiers)")]
    NoKey,
    /// More than one non-modifier key was specified.
    #[error("more than one key specified: {0}")]
    MultipleKeys(String),
    /// Unknown key name.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

impl From<AcceleratorParseError> for casement_core::CasementError {
    fn from(err: AcceleratorParseError) -> Self {
        Self::InvalidAccelerator(err.to_string())
    }
}

impl FromStr for KeyCombination {
    type Err = AcceleratorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AcceleratorParseError::Empty);
        }

        let mut modifiers = KeyboardModifiers::NONE;
        let mut key: Option<Key> = None;

        for part in split_parts(s) {
            let part = part.trim();
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers.control = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "cmd" | "command" | "super" | "win" => modifiers.meta = true,
                "cmdorctrl" | "commandorcontrol" => {
                    if cfg!(target_os = "macos") {
                        modifiers.meta = true;
                    } else {
                        modifiers.control = true;
                    }
                }
                _ => {
                    if key.is_some() {
                        return Err(AcceleratorParseError::MultipleKeys(s.to_string()));
                    }
                    key = Some(parse_key(part)?);
                }
            }
        }

        key.map(|k| KeyCombination::new(k, modifiers))
            .ok_or(AcceleratorParseError::NoKey)
    }
}

/// Split on `+`, keeping a trailing literal `+` as the key ("Ctrl++").
fn split_parts(s: &str) -> Vec<&str> {
    if let Some(prefix) = s.strip_suffix("++") {
        let mut parts: Vec<&str> = prefix.split('+').collect();
        parts.push("+");
        return parts;
    }
    if s == "+" {
        return vec!["+"];
    }
    s.split('+').collect()
}

/// Parse a key name to a Key enum value.
fn parse_key(s: &str) -> Result<Key, AcceleratorParseError> {
    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.clone().next()) {
        let key = match ch.to_ascii_uppercase() {
            'A' => Key::A,
            'B' => Key::B,
            'C' => Key::C,
            'D' => Key::D,
            'E' => Key::E,
            'F' => Key::F,
            'G' => Key::G,
            'H' => Key::H,
            'I' => Key::I,
            'J' => Key::J,
            'K' => Key::K,
            'L' => Key::L,
            'M' => Key::M,
            'N' => Key::N,
            'O' => Key::O,
            'P' => Key::P,
            'Q' => Key::Q,
            'R' => Key::R,
            'S' => Key::S,
            'T' => Key::T,
            'U' => Key::U,
            'V' => Key::V,
            'W' => Key::W,
            'X' => Key::X,
            'Y' => Key::Y,
            'Z' => Key::Z,
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
            _ => return Err(AcceleratorParseError::UnknownKey(s.to_string())),
        };
        return Ok(key);
    }

    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return function_key(n).ok_or_else(|| AcceleratorParseError::UnknownKey(s.to_string()));
    }

    match lower.as_str() {
        "up" | "arrowup" => Ok(Key::ArrowUp),
        "down" | "arrowdown" => Ok(Key::ArrowDown),
        "left" | "arrowleft" => Ok(Key::ArrowLeft),
        "right" | "arrowright" => Ok(Key::ArrowRight),
        "home" => Ok(Key::Home),
        "end" => Ok(Key::End),
        "pageup" | "pgup" => Ok(Key::PageUp),
        "pagedown" | "pgdn" => Ok(Key::PageDown),
        "backspace" | "back" => Ok(Key::Backspace),
        "delete" | "del" => Ok(Key::Delete),
        "insert" | "ins" => Ok(Key::Insert),
        "enter" | "return" => Ok(Key::Enter),
        "tab" => Ok(Key::Tab),
        "space" | "spacebar" => Ok(Key::Space),
        "escape" | "esc" => Ok(Key::Escape),
        "plus" => Ok(Key::Plus),
        "minus" => Ok(Key::Minus),
        "capslock" => Ok(Key::CapsLock),
        "numlock" => Ok(Key::NumLock),
        "scrolllock" => Ok(Key::ScrollLock),
        "printscreen" => Ok(Key::PrintScreen),
        "pause" => Ok(Key::Pause),
        _ => Err(AcceleratorParseError::UnknownKey(s.to_string())),
    }
}

fn function_key(n: u8) -> Option<Key> {
    const KEYS: [Key; 24] = [
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::F13,
        Key::F14,
        Key::F15,
        Key::F16,
        Key::F17,
        Key::F18,
        Key::F19,
        Key::F20,
        Key::F21,
        Key::F22,
        Key::F23,
        Key::F24,
    ];
    (1..=24).contains(&n).then(|| KEYS[usize::from(n) - 1])
}

/// Convert a Key to its accelerator string representation.
fn key_to_string(key: Key) -> String {
    let name = match key {
        Key::A => "A",
        Key::B => "B",
        Key::C => "C",
        Key::D => "D",
        Key::E => "E",
        Key::F => "F",
        Key::G => "G",
        Key::H => "H",
        Key::I => "I",
        Key::J => "J",
        Key::K => "K",
        Key::L => "L",
        Key::M => "M",
        Key::N => "N",
        Key::O => "O",
        Key::P => "P",
        Key::Q => "Q",
        Key::R => "R",
        Key::S => "S",
        Key::T => "T",
        Key::U => "U",
        Key::V => "V",
        Key::W => "W",
        Key::X => "X",
        Key::Y => "Y",
        Key::Z => "Z",
        Key::Digit0 => "0",
        Key::Digit1 => "1",
        Key::Digit2 => "2",
        Key::Digit3 => "3",
        Key::Digit4 => "4",
        Key::Digit5 => "5",
        Key::Digit6 => "6",
        Key::Digit7 => "7",
        Key::Digit8 => "8",
        Key::Digit9 => "9",
        Key::ArrowUp => "Up",
        Key::ArrowDown => "Down",
        Key::ArrowLeft => "Left",
        Key::ArrowRight => "Right",
        Key::Home => "Home",
        Key::End => "End",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::Backspace => "Backspace",
        Key::Delete => "Delete",
        Key::Insert => "Insert",
        Key::Enter => "Enter",
        Key::Tab => "Tab",
        Key::Space => "Space",
        Key::Escape => "Escape",
        Key::Minus => "-",
        Key::Equal => "=",
        Key::Plus => "Plus",
        Key::BracketLeft => "[",
        Key::BracketRight => "]",
        Key::Backslash => "\\",
        Key::Semicolon => ";",
        Key::Quote => "'",
        Key::Comma => ",",
        Key::Period => ".",
        Key::Slash => "/",
        Key::Grave => "`",
        other => {
            if let Some(n) = (1..=24u8).find(|&n| function_key(n) == Some(other)) {
                return format!("F{n}");
            }
            "Unknown"
        }
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let combo: KeyCombination = "Ctrl+S".parse().unwrap();
        assert_eq!(combo, KeyCombination::ctrl(Key::S));

        let combo: KeyCombination = "alt+f4".parse().unwrap();
        assert_eq!(combo, KeyCombination::alt(Key::F4));

        let combo: KeyCombination = "F11".parse().unwrap();
        assert_eq!(combo, KeyCombination::key_only(Key::F11));
    }

    #[test]
    fn test_parse_multiple_modifiers() {
        let combo: KeyCombination = "Ctrl + Shift + Z".parse().unwrap();
        assert_eq!(combo.key, Key::Z);
        assert_eq!(combo.modifiers, KeyboardModifiers::CTRL_SHIFT);
    }

    #[test]
    fn test_parse_cmd_or_ctrl() {
        let combo: KeyCombination = "CmdOrCtrl+Q".parse().unwrap();
        if cfg!(target_os = "macos") {
            assert!(combo.modifiers.meta);
        } else {
            assert!(combo.modifiers.control);
        }
        assert!(!combo.modifiers.alt);
    }

    #[test]
    fn test_parse_plus_key() {
        let combo: KeyCombination = "Ctrl++".parse().unwrap();
        assert_eq!(combo, KeyCombination::ctrl(Key::Plus));

        let combo: KeyCombination = "Ctrl+Plus".parse().unwrap();
        assert_eq!(combo, KeyCombination::ctrl(Key::Plus));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyCombination>(), Err(AcceleratorParseError::Empty));
        assert_eq!("Ctrl+Shift".parse::<KeyCombination>(), Err(AcceleratorParseError::NoKey));
        assert!(matches!(
            "Ctrl+Banana".parse::<KeyCombination>(),
            Err(AcceleratorParseError::UnknownKey(_))
        ));
        assert!(matches!(
            "Ctrl+A+B".parse::<KeyCombination>(),
            Err(AcceleratorParseError::MultipleKeys(_))
        ));
        assert!(matches!(
            "F25".parse::<KeyCombination>(),
            Err(AcceleratorParseError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyCombination::ctrl(Key::S).to_string(), "Ctrl+S");
        assert_eq!(
            KeyCombination::new(Key::F12, KeyboardModifiers::CTRL_SHIFT).to_string(),
            "Ctrl+Shift+F12"
        );
    }

    #[test]
    fn test_parse_error_converts_to_casement_error() {
        let err: casement_core::CasementError = AcceleratorParseError::NoKey.into();
        assert!(matches!(err, casement_core::CasementError::InvalidAccelerator(_)));
    }
}
