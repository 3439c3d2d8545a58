//! Per-frame key state.
//!
//! The host's input layer owns an [`InputState`] and updates it from its own
//! key events. The simulation only reads it through [`KeyState`], once per
//! frame, without blocking.

use serde::{Deserialize, Serialize};

/// Logical directional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Every logical key.
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];

    /// Map a raw key name from a host event to a logical key.
    ///
    /// WASD and the arrow keys are both bound.
    #[must_use]
    pub fn from_binding(raw: &str) -> Option<Self> {
        match raw {
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            "w" | "W" | "ArrowUp" => Some(Key::Up),
            "s" | "S" | "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Read-only view of which keys are held this frame.
pub trait KeyState {
    /// Returns `true` if `key` is currently held.
    fn is_pressed(&self, key: Key) -> bool;
}

/// Pressed/released state for every logical key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    /// State with every key in `keys` held.
    #[must_use]
    pub fn holding(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for key in keys {
            state.press(*key);
        }
        state
    }

    /// Mark a key as held.
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Set a key's state.
    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    /// Apply a raw key event from the host. Unbound keys are ignored.
    ///
    /// Returns the logical key the event was bound to, if any.
    pub fn apply_raw(&mut self, raw: &str, pressed: bool) -> Option<Key> {
        let key = Key::from_binding(raw)?;
        self.set(key, pressed);
        Some(key)
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.pressed = [false; 4];
    }
}

impl KeyState for InputState {
    fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }
}
