use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Semantic key identifier for a keyboard event.
///
/// Only the keys the shell can react to are named; anything else arrives
/// as `Char` and simply matches no dispatch rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character, case preserved
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "Enter"),
            Key::Escape => write!(f, "Escape"),
            Key::Tab => write!(f, "Tab"),
            Key::Backspace => write!(f, "Backspace"),
        }
    }
}

/// A single keyboard event with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            meta: false,
            ctrl: false,
            shift: false,
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChordParseError {
    #[error("empty key chord")]
    Empty,

    #[error("unknown modifier: {0}")]
    UnknownModifier(String),

    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// Parses key-chord strings like `Ctrl+Shift+X`, `Meta+0` or `Enter`.
///
/// Modifier names are case-insensitive (`ctrl`/`control`, `meta`/`cmd`/`super`,
/// `shift`); the final segment is the key itself. A chord ending in `+` means
/// the plus key ("Ctrl++").
impl FromStr for KeyEvent {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let mut key_part = parts.pop().unwrap_or("");
        if key_part.is_empty() && s.ends_with('+') {
            // "Ctrl++" splits into two trailing empty segments
            key_part = "+";
            if parts.last() == Some(&"") {
                parts.pop();
            }
        }
        if key_part.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut event = KeyEvent::new(parse_key(key_part)?);
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => event.ctrl = true,
                "meta" | "cmd" | "command" | "super" => event.meta = true,
                "shift" => event.shift = true,
                _ => return Err(ChordParseError::UnknownModifier(part.to_string())),
            }
        }
        Ok(event)
    }
}

fn parse_key(s: &str) -> Result<Key, ChordParseError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c));
    }
    match s.to_ascii_lowercase().as_str() {
        "enter" | "return" => Ok(Key::Enter),
        "escape" | "esc" => Ok(Key::Escape),
        "tab" => Ok(Key::Tab),
        "backspace" => Ok(Key::Backspace),
        _ => Err(ChordParseError::UnknownKey(s.to_string())),
    }
}
