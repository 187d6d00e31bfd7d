//! Input Sampler
//!
//! Folds keyboard and pointer state into one immutable [`InputSnapshot`]
//! per frame. The host forwards raw events as they arrive; the frame loop
//! calls [`InputSampler::sample`] once and hands the snapshot to the
//! controller.

use glam::Vec2;

use super::{InputAction, KeyBindings, KeyCode, KeyboardState, PointerState};

/// Discrete action flags, true while the bound key is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub interact: bool,
    /// Debug experience grant
    pub get_exp: bool,
}

impl ActionFlags {
    /// Check if any steering/movement action is held.
    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Everything the controller reads from input in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub actions: ActionFlags,
    /// A mouse button or touch is held.
    pub dragging: bool,
    /// Pointer position in normalized device coordinates while dragging,
    /// zero otherwise.
    pub drag: Vec2,
}

static_assertions::assert_impl_all!(InputSnapshot: Copy, Send, Sync);

impl InputSnapshot {
    /// Snapshot with only the given action flags set and no drag.
    pub fn from_actions(actions: ActionFlags) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }

    /// Snapshot of an active drag at the given device coordinates.
    pub fn dragging_at(drag: Vec2) -> Self {
        Self {
            dragging: true,
            drag,
            ..Self::default()
        }
    }
}

/// Owns the raw input state and produces per-frame snapshots.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    bindings: KeyBindings,
    keyboard: KeyboardState,
    pointer: PointerState,
}

impl InputSampler {
    /// Create a sampler with the default key bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler with custom key bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Forward a key event. Returns `true` if the key is bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keyboard.handle_key(key, pressed);
        self.bindings.get_action(key).is_some()
    }

    /// Mutable access to the pointer for press/move/release events.
    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Window lost focus: release every key and end any drag.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.pointer.release();
    }

    /// Read the current state as a snapshot. Never fails; with no devices
    /// attached every flag is false and the drag is zero.
    pub fn sample(&self) -> InputSnapshot {
        let held = self.keyboard.held_keys();
        let pressed = |action| self.bindings.is_action_pressed(action, held);

        let actions = ActionFlags {
            forward: pressed(InputAction::MoveForward),
            backward: pressed(InputAction::MoveBack),
            left: pressed(InputAction::MoveLeft),
            right: pressed(InputAction::MoveRight),
            run: pressed(InputAction::Run),
            interact: pressed(InputAction::Interact),
            get_exp: pressed(InputAction::GrantXp),
        };

        let dragging = self.pointer.is_dragging();
        let drag = if dragging {
            self.pointer.ndc_position().unwrap_or(Vec2::ZERO)
        } else {
            Vec2::ZERO
        };

        InputSnapshot {
            actions,
            dragging,
            drag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample() {
        let sampler = InputSampler::new();
        assert_eq!(sampler.sample(), InputSnapshot::default());
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut sampler = InputSampler::new();
        assert!(sampler.handle_key(KeyCode::W, true));
        assert!(sampler.handle_key(KeyCode::ShiftLeft, true));
        assert!(!sampler.handle_key(KeyCode::Space, true));

        let snap = sampler.sample();
        assert!(snap.actions.forward);
        assert!(snap.actions.run);
        assert!(!snap.actions.backward);
        assert!(snap.actions.any_movement());
    }

    #[test]
    fn test_alias_keys_share_action() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::A, true);
        sampler.handle_key(KeyCode::ArrowLeft, true);
        sampler.handle_key(KeyCode::A, false);

        // ArrowLeft still holds the action
        assert!(sampler.sample().actions.left);
    }

    #[test]
    fn test_drag_sampled_only_while_pressed() {
        let mut sampler = InputSampler::new();
        sampler.pointer_mut().set_position(150.0, 25.0, 200, 100);
        assert_eq!(sampler.sample().drag, Vec2::ZERO);

        sampler.pointer_mut().press();
        let snap = sampler.sample();
        assert!(snap.dragging);
        assert_eq!(snap.drag, Vec2::new(0.5, 0.5));

        sampler.pointer_mut().release();
        let snap = sampler.sample();
        assert!(!snap.dragging);
        assert_eq!(snap.drag, Vec2::ZERO);
    }

    #[test]
    fn test_reset_clears_keys_and_drag() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::E, true);
        sampler.pointer_mut().press();
        sampler.reset();

        let snap = sampler.sample();
        assert!(!snap.actions.interact);
        assert!(!snap.dragging);
    }
}
