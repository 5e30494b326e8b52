//! Input management system
//!
//! Tracks which keys are currently held. Platform layers feed key edges in
//! through [`InputManager::handle_key_input`]; games sample the held state
//! once per frame.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Input manager
#[derive(Debug, Clone, Default)]
pub struct InputManager {
    held: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Whether `key` is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any of `keys` is currently held
    pub fn any_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_key_down(*key))
    }

    /// Release every key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// R key
    R,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Canonical name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            KeyCode::A => "A",
            KeyCode::D => "D",
            KeyCode::S => "S",
            KeyCode::W => "W",
            KeyCode::R => "R",
            KeyCode::Space => "Space",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::Up => "Up",
            KeyCode::Down => "Down",
            KeyCode::Left => "Left",
            KeyCode::Right => "Right",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown key name in a binding
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown key name: {0}")]
pub struct KeyParseError(pub String);

impl FromStr for KeyCode {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_ascii_lowercase().as_str() {
            "a" => KeyCode::A,
            "d" => KeyCode::D,
            "s" => KeyCode::S,
            "w" => KeyCode::W,
            "r" => KeyCode::R,
            "space" => KeyCode::Space,
            "enter" | "return" => KeyCode::Enter,
            "escape" | "esc" => KeyCode::Escape,
            "up" | "arrowup" => KeyCode::Up,
            "down" | "arrowdown" => KeyCode::Down,
            "left" | "arrowleft" => KeyCode::Left,
            "right" | "arrowright" => KeyCode::Right,
            _ => return Err(KeyParseError(s.to_string())),
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);
        assert!(input.is_key_down(KeyCode::Space));

        input.handle_key_input(KeyCode::Space, false);
        assert!(!input.is_key_down(KeyCode::Space));
    }

    #[test]
    fn test_any_down_and_release_all() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Left, true);
        assert!(input.any_down(&[KeyCode::A, KeyCode::Left]));

        input.release_all();
        assert!(!input.any_down(&[KeyCode::A, KeyCode::Left]));
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("ArrowUp".parse::<KeyCode>(), Ok(KeyCode::Up));
        assert_eq!("space".parse::<KeyCode>(), Ok(KeyCode::Space));
        assert_eq!(" Left ".parse::<KeyCode>(), Ok(KeyCode::Left));
        assert_eq!("F13".parse::<KeyCode>(), Err(KeyParseError("F13".to_string())));
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for key in [KeyCode::W, KeyCode::Escape, KeyCode::Right, KeyCode::Space] {
            assert_eq!(key.name().parse::<KeyCode>(), Ok(key));
        }
    }
}
