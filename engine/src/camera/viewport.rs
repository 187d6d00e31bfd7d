//! Viewport Camera
//!
//! The camera the renderer draws from. It is positioned and aimed by the
//! chase rig each frame and only exposes the matrices a renderer needs.

use glam::{Mat4, Vec3};

/// Perspective camera defined by an eye position and a look-at point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportCamera {
    pub position: Vec3,
    pub look_target: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, -3.0),
            look_target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 200.0,
        }
    }
}

impl ViewportCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Aim the camera at a world point.
    pub fn look_at(&mut self, target: Vec3) {
        self.look_target = target;
    }

    /// Unit view direction. Falls back to -Z when the target sits on the eye.
    pub fn forward(&self) -> Vec3 {
        (self.look_target - self.position).normalize_or(Vec3::NEG_Z)
    }

    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn get_projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }
}
