//! Proximity Detection
//!
//! Each interactable owns a detector that compares its own position with the
//! player's every frame. The frame controller combines all detectors into
//! the shared `able_to_interact` flag.

use glam::Vec3;

/// Player must be strictly closer than this to interact
pub const PROXIMITY_THRESHOLD: f32 = 1.0;

/// Distance check between one world object and the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityDetector {
    pub position: Vec3,
    pub threshold: f32,
    /// Result of the last check
    in_range: bool,
    /// Distance measured by the last check
    last_distance: Option<f32>,
}

impl ProximityDetector {
    pub fn new(position: Vec3) -> Self {
        Self::with_threshold(position, PROXIMITY_THRESHOLD)
    }

    pub fn with_threshold(position: Vec3, threshold: f32) -> Self {
        Self {
            position,
            threshold,
            in_range: false,
            last_distance: None,
        }
    }

    /// Measure against the player. Returns `None` and keeps the previous
    /// result when the player is not available this frame.
    pub fn update(&mut self, player_position: Option<Vec3>) -> Option<bool> {
        let player = player_position?;
        let distance = self.position.distance(player);
        self.last_distance = Some(distance);
        self.in_range = distance < self.threshold;
        Some(self.in_range)
    }

    pub fn in_range(&self) -> bool {
        self.in_range
    }

    pub fn last_distance(&self) -> Option<f32> {
        self.last_distance
    }
}
