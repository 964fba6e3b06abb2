//! Logical key state
//!
//! Raw key capture happens in the host; it translates events into
//! [`KeyState::press`] / [`KeyState::release`] calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Fire the burner (heat the envelope)
    Up,
    /// Open the valve (cool the envelope)
    Down,
    Left,
    Right,
    /// Cut the left weight loose
    ReleaseLeft,
    /// Cut the right weight loose
    ReleaseRight,
    /// Leave the flight for the menu, or quit from the menu
    Quit,
    /// Start flying from the main menu
    Confirm,
    Help,
    Credits,
    /// Return from help or credits
    Back,
}

/// Read-only key state query
pub trait InputQuery {
    fn is_pressed(&self, key: Key) -> bool;

    fn up(&self) -> bool {
        self.is_pressed(Key::Up)
    }

    fn down(&self) -> bool {
        self.is_pressed(Key::Down)
    }

    fn left(&self) -> bool {
        self.is_pressed(Key::Left)
    }

    fn right(&self) -> bool {
        self.is_pressed(Key::Right)
    }
}

/// Map-backed key state with rising-edge tracking
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<Key, bool>,
    rising: HashMap<Key, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held
    pub fn press(&mut self, key: Key) {
        if !self.is_pressed(key) {
            self.rising.insert(key, true);
        }
        self.pressed.insert(key, true);
    }

    /// Mark a key as released
    pub fn release(&mut self, key: Key) {
        self.pressed.insert(key, false);
        self.rising.insert(key, false);
    }

    /// Set a key to the given state
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    /// Returns true once per press, then false until the key is pressed again
    pub fn take_rising_edge(&mut self, key: Key) -> bool {
        self.rising.insert(key, false).unwrap_or(false)
    }

    /// Release every key
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.rising.clear();
    }
}

impl InputQuery for KeyState {
    fn is_pressed(&self, key: Key) -> bool {
        self.pressed.get(&key).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_released() {
        let keys = KeyState::new();
        assert!(!keys.is_pressed(Key::Up));
        assert!(!keys.up());
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        keys.press(Key::Left);
        assert!(keys.left());
        assert!(!keys.right());
        keys.release(Key::Left);
        assert!(!keys.left());
    }

    #[test]
    fn test_rising_edge_fires_once() {
        let mut keys = KeyState::new();
        keys.press(Key::Quit);
        assert!(keys.take_rising_edge(Key::Quit));
        assert!(!keys.take_rising_edge(Key::Quit));

        // Holding the key does not re-arm the edge
        keys.press(Key::Quit);
        assert!(!keys.take_rising_edge(Key::Quit));

        keys.release(Key::Quit);
        keys.press(Key::Quit);
        assert!(keys.take_rising_edge(Key::Quit));
    }
}
