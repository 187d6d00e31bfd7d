//! Chase Camera Rig
//!
//! Two anchors trail their live targets with a fixed per-frame blend: one
//! for where the camera sits, one for where it looks. Both follow every
//! frame, interacting or not, so the view keeps tracking the avatar's pose
//! even while body steering is frozen.

use glam::Vec3;

use super::viewport::ViewportCamera;

/// Per-frame blend factor for both anchors
pub const CAMERA_SMOOTHING: f32 = 0.1;

/// Smoothed camera position and look-at point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnchors {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraAnchors {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, -3.0),
            look_at: Vec3::ZERO,
        }
    }
}

/// Third-person follow rig.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    anchors: CameraAnchors,
    factor: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraAnchors::default())
    }
}

impl CameraRig {
    pub fn new(anchors: CameraAnchors) -> Self {
        Self {
            anchors,
            factor: CAMERA_SMOOTHING,
        }
    }

    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    pub fn anchors(&self) -> &CameraAnchors {
        &self.anchors
    }

    /// Put both anchors exactly on their targets (spawn, teleport).
    pub fn snap(&mut self, position_target: Vec3, look_target: Vec3, camera: &mut ViewportCamera) {
        self.anchors.position = position_target;
        self.anchors.look_at = look_target;
        camera.position = position_target;
        camera.look_at(look_target);
    }

    /// Advance both anchors one frame and apply them to `camera`.
    ///
    /// A missing target skips its half of the update for this frame.
    /// Returns `true` if the camera was touched.
    pub fn update(
        &mut self,
        position_target: Option<Vec3>,
        look_target: Option<Vec3>,
        camera: &mut ViewportCamera,
    ) -> bool {
        let mut applied = false;

        if let Some(target) = position_target {
            self.anchors.position = self.anchors.position.lerp(target, self.factor);
            camera.position = self.anchors.position;
            applied = true;
        }

        if let Some(target) = look_target {
            self.anchors.look_at = self.anchors.look_at.lerp(target, self.factor);
            camera.look_at(self.anchors.look_at);
            applied = true;
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_moves_tenth_of_the_way() {
        let mut rig = CameraRig::new(CameraAnchors {
            position: Vec3::ZERO,
            look_at: Vec3::ZERO,
        });
        let mut camera = ViewportCamera::new();

        rig.update(Some(Vec3::new(10.0, 0.0, 0.0)), Some(Vec3::new(0.0, 0.0, 10.0)), &mut camera);

        assert!((camera.position - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((camera.look_target - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_converges_on_static_targets() {
        let mut rig = CameraRig::default();
        let mut camera = ViewportCamera::new();
        let position = Vec3::new(4.0, 2.0, -1.0);
        let look = Vec3::new(4.0, 0.0, 4.0);

        for _ in 0..200 {
            rig.update(Some(position), Some(look), &mut camera);
        }
        assert!((camera.position - position).length() < 1e-4);
        assert!((camera.look_target - look).length() < 1e-4);
    }

    #[test]
    fn test_missing_targets_skip() {
        let mut rig = CameraRig::default();
        let mut camera = ViewportCamera::with_position(Vec3::new(9.0, 9.0, 9.0));

        assert!(!rig.update(None, None, &mut camera));
        assert_eq!(camera.position, Vec3::new(9.0, 9.0, 9.0));

        // Position half alone still applies
        assert!(rig.update(Some(Vec3::ZERO), None, &mut camera));
        assert_eq!(rig.anchors().look_at, Vec3::ZERO);
    }

    #[test]
    fn test_snap() {
        let mut rig = CameraRig::default();
        let mut camera = ViewportCamera::new();
        rig.snap(Vec3::ONE, Vec3::X, &mut camera);

        assert_eq!(camera.position, Vec3::ONE);
        assert_eq!(camera.look_target, Vec3::X);
        assert_eq!(rig.anchors().position, Vec3::ONE);
    }
}
