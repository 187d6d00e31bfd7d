//! Interactables
//!
//! World objects the player can walk up to. Each carries its own proximity
//! detector and a floating prompt sign above it.

use glam::Vec3;

use crate::world::ProximityDetector;

/// Prompt sign offset from the object origin
pub const PROMPT_OFFSET: Vec3 = Vec3::new(-0.05, 1.0, 0.3);

/// Which prompt, if any, floats above an interactable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSign {
    /// Interaction in progress, or the object is inactive
    Hidden,
    /// In range and free to interact
    Interact,
    /// Out of range, drawing the player over
    Attention,
}

/// A named object with a proximity trigger.
#[derive(Debug, Clone)]
pub struct Interactable {
    pub name: String,
    pub detector: ProximityDetector,
    /// Inactive objects are skipped by the frame controller
    pub active: bool,
}

impl Interactable {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            detector: ProximityDetector::new(position),
            active: true,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.detector.threshold = threshold;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.detector.position
    }

    /// Measure against the player; `None` when skipped this frame.
    pub fn update(&mut self, player_position: Option<Vec3>) -> Option<bool> {
        if !self.active {
            return None;
        }
        self.detector.update(player_position)
    }

    pub fn in_range(&self) -> bool {
        self.active && self.detector.in_range()
    }

    pub fn prompt(&self, interacting: bool) -> PromptSign {
        if !self.active {
            return PromptSign::Hidden;
        }
        match (self.detector.in_range(), interacting) {
            (_, true) => PromptSign::Hidden,
            (true, false) => PromptSign::Interact,
            (false, false) => PromptSign::Attention,
        }
    }

    /// World position of the prompt sign.
    pub fn prompt_position(&self) -> Vec3 {
        self.position() + PROMPT_OFFSET
    }
}

/// Run every active detector and OR the results. `None` when no detector
/// produced a result (no player this frame, or nothing active).
pub fn any_in_range(
    interactables: &mut [Interactable],
    player_position: Option<Vec3>,
) -> Option<bool> {
    let mut result = None;
    for interactable in interactables.iter_mut() {
        if let Some(in_range) = interactable.update(player_position) {
            result = Some(result.unwrap_or(false) || in_range);
        }
    }
    result
}
