//! Physics Body
//!
//! The controller talks to the rigid-body solver through [`PhysicsBody`]:
//! it reads the linear velocity, writes a new one, and reads the body's
//! translation to place the avatar. Angular velocity is never set; the body
//! is rotation-locked and yaw lives on the visual transforms instead.
//!
//! [`KinematicBody`] is a minimal stand-in solver: gravity along -Y, a flat
//! ground plane with friction, and a sleep flag cleared by waking writes.

use glam::Vec3;

/// Gravity acceleration in units per second squared
pub const GRAVITY: f32 = 9.81;

/// Largest step the kinematic body integrates at once
const MAX_STEP: f32 = 0.1;

/// Exponential decay rate of horizontal velocity while grounded, per second
pub const GROUND_DAMPING: f32 = 25.0;

/// Speed below which a grounded body falls asleep
const SLEEP_SPEED: f32 = 1e-3;

/// Contract the frame controller needs from a physics body.
pub trait PhysicsBody {
    /// Current linear velocity in world space.
    fn linear_velocity(&self) -> Vec3;

    /// Replace the linear velocity. `wake` wakes a sleeping body.
    fn set_linear_velocity(&mut self, velocity: Vec3, wake: bool);

    /// Current world-space position of the body origin.
    fn translation(&self) -> Vec3;
}

/// Rotation-locked point body with gravity and a ground plane.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec3,
    velocity: Vec3,
    /// Y of the ground plane the body rests on
    ground_height: f32,
    gravity: f32,
    /// See [`GROUND_DAMPING`]
    ground_damping: f32,
    sleeping: bool,
    grounded: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl KinematicBody {
    /// Create a body at rest at `position`, with ground at y = 0.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            ground_height: 0.0,
            gravity: GRAVITY,
            ground_damping: GROUND_DAMPING,
            sleeping: false,
            grounded: position.y <= 0.0,
        }
    }

    pub fn with_ground_height(mut self, ground_height: f32) -> Self {
        self.ground_height = ground_height;
        self.grounded = self.position.y <= ground_height;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_ground_damping(mut self, ground_damping: f32) -> Self {
        self.ground_damping = ground_damping.max(0.0);
        self
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn set_translation(&mut self, position: Vec3) {
        self.position = position;
        self.sleeping = false;
    }

    /// Integrate one step.
    pub fn step(&mut self, delta_time: f32) {
        if self.sleeping {
            return;
        }

        // Clamp delta time to prevent tunnelling after a long stall
        let dt = delta_time.clamp(0.0, MAX_STEP);

        if !self.grounded {
            self.velocity.y -= self.gravity * dt;
        }
        self.position += self.velocity * dt;

        if self.position.y <= self.ground_height {
            self.position.y = self.ground_height;
            self.velocity.y = self.velocity.y.max(0.0);
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        // Friction acts after integration: a velocity written this frame
        // moves the body its full distance once
        if self.grounded {
            let keep = (-self.ground_damping * dt).exp();
            self.velocity.x *= keep;
            self.velocity.z *= keep;
        }

        if self.grounded && self.velocity.length_squared() < SLEEP_SPEED * SLEEP_SPEED {
            self.velocity = Vec3::ZERO;
            self.sleeping = true;
        }
    }
}

impl PhysicsBody for KinematicBody {
    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3, wake: bool) {
        self.velocity = velocity;
        if wake {
            self.sleeping = false;
        }
    }

    fn translation(&self) -> Vec3 {
        self.position
    }
}
