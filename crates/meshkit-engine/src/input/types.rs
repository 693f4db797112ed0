use std::fmt;

/// Keyboard key identifier.
///
/// Only keys the engine reacts to are named; the runtime maps everything else
/// to `Key::Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

impl Key {
    const DIGITS: [Key; 10] = [
        Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
        Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
    ];

    /// Digit key for `n` in `0..=9`.
    pub fn digit(n: u8) -> Option<Key> {
        Self::DIGITS.get(n as usize).copied()
    }

    /// Numeric value of a digit key.
    pub fn as_digit(self) -> Option<u8> {
        Self::DIGITS.iter().position(|&k| k == self).map(|i| i as u8)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
///
/// This is stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Stable platform code when available (e.g. scancode).
        code: u32,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_digit() {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_round_trip() {
        for n in 0..=9 {
            assert_eq!(Key::digit(n).and_then(Key::as_digit), Some(n));
        }
    }

    #[test]
    fn non_digits() {
        assert_eq!(Key::digit(10), None);
        assert_eq!(Key::Escape.as_digit(), None);
        assert_eq!(Key::Unknown(42).as_digit(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Key::Digit4.to_string(), "4");
        assert_eq!(Key::Escape.to_string(), "Escape");
    }
}
