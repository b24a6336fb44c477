//! Abstract input events consumed by the edit controller.
//!
//! Terminal backends translate raw events into these types; nothing downstream
//! inspects terminal bytes. The loop is synchronous: one `InputEvent` is read,
//! fully handled, and only then is the next one requested.

use std::fmt;

/// One step of input for the editor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Unmodified key.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    pub const fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CTRL)
    }

    pub fn is_ctrl(&self, ch: char) -> bool {
        self.mods.contains(KeyModifiers::CTRL) && self.code == KeyCode::Char(ch)
    }
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        Self::plain(KeyCode::Char(ch))
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}

/// Normalized logical keys. Space arrives as `Char(' ')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

// Log-safe rendering: printable characters are reported by class only.
impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => write!(f, "char"),
            KeyCode::Char(_) => write!(f, "symbol"),
            other => write!(f, "{other:?}"),
        }
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl Default for KeyModifiers {
    fn default() -> Self {
        Self::empty()
    }
}
