//! Keyboard Input Module
//!
//! Tracks which keys are currently held. Key state is leveled: a key reads
//! true for as long as it is down, and any edge detection is left to the
//! consumer. Decoupled from winit to use generic key codes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of windowing system.
///
/// Only the keys the avatar controller can bind are listed; everything else
/// maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers
    ShiftLeft,
    ShiftRight,

    // Actions
    E,
    F,
    X,
    Space,
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Set of currently held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the held state of the key changed. Auto-repeat
    /// presses of an already-held key return `false`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key)
        }
    }

    /// Check if a key is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Check if any key is currently held.
    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    /// Borrow the set of held keys.
    pub fn held_keys(&self) -> &HashSet<KeyCode> {
        &self.held
    }

    /// Release every key (window lost focus).
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
