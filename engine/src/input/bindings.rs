//! Input Bindings Module
//!
//! Maps physical keys to logical actions. Several keys may drive the same
//! action (WASD and the arrow keys both steer), but each key drives at most
//! one action.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBack,
    /// Turn/strafe left (default: A, ArrowLeft)
    MoveLeft,
    /// Turn/strafe right (default: D, ArrowRight)
    MoveRight,
    /// Run modifier (default: Shift)
    Run,
    /// Toggle interaction with a nearby object (default: E)
    Interact,
    /// Debug: grant experience every frame while held (default: X)
    GrantXp,
}

/// One key-to-action pair, the on-disk form of [`KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub key: KeyCode,
    pub action: InputAction,
}

/// Maps physical keys to logical actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Binding>", into = "Vec<Binding>")]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W / ArrowUp = MoveForward
    /// - S / ArrowDown = MoveBack
    /// - A / ArrowLeft = MoveLeft
    /// - D / ArrowRight = MoveRight
    /// - Shift (either) = Run
    /// - E = Interact
    /// - X = GrantXp
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Run);
        bindings.bind(KeyCode::ShiftRight, InputAction::Run);
        bindings.bind(KeyCode::E, InputAction::Interact);
        bindings.bind(KeyCode::X, InputAction::GrantXp);

        bindings
    }

    /// Create a binding table with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action, replacing whatever the key
    /// was bound to before. Other keys bound to the same action are kept.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.key_to_action.insert(key, action);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Remove every key bound to an action.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.key_to_action.retain(|_, a| *a != action);
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// All keys bound to an action.
    pub fn keys_for(&self, action: InputAction) -> impl Iterator<Item = KeyCode> + '_ {
        self.key_to_action
            .iter()
            .filter(move |&(_, &a)| a == action)
            .map(|(&k, _)| k)
    }

    /// Check if an action is held, given the set of held keys.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        pressed_keys
            .iter()
            .any(|key| self.get_action(*key) == Some(action))
    }

    /// Get all current bindings as key-action pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, InputAction)> + '_ {
        self.key_to_action.iter().map(|(&k, &a)| (k, a))
    }
}

impl From<Vec<Binding>> for KeyBindings {
    fn from(list: Vec<Binding>) -> Self {
        let mut bindings = Self::empty();
        for Binding { key, action } in list {
            bindings.bind(key, action);
        }
        bindings
    }
}

impl From<KeyBindings> for Vec<Binding> {
    fn from(bindings: KeyBindings) -> Self {
        let mut list: Vec<Binding> = bindings
            .all_bindings()
            .map(|(key, action)| Binding { key, action })
            .collect();
        // Stable order so saved configs diff cleanly
        list.sort_by_key(|b| format!("{:?}{:?}", b.action, b.key));
        list
    }
}
