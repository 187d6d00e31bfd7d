//! Frame Controller
//!
//! Runs one frame of avatar control over an explicit [`PlayerContext`]:
//!
//! 1. Clear an expired interaction cooldown
//! 2. Proximity checks against every interactable
//! 3. Interaction toggle (a successful entry requests the wave clip)
//! 4. Debug experience grant
//! 5. Movement resolution and locomotion clip
//! 6. Heading smoothing
//! 7. Velocity write-back, skipped while interacting
//! 8. Chase camera
//! 9. HUD
//!
//! Steps 2, 3 and 5 to 7 need the physics body and are skipped for the
//! frame until one is attached. The camera skips while the rig has no targets mounted.

use std::time::Instant;

use glam::Vec3;
use log::debug;

use crate::camera::{CameraRig, ViewportCamera};
use crate::game::animation::{AnimationDriver, AnimationLabel, AnimationPlayer};
use crate::game::config::ControllerConfig;
use crate::game::hud::Hud;
use crate::game::interactables::{Interactable, any_in_range};
use crate::game::progression::DEBUG_XP_GRANT;
use crate::game::state::PlayerContext;
use crate::input::InputSnapshot;
use crate::physics::PhysicsBody;
use crate::player::{
    HeadingSmoother, InteractionGate, MovementOutput, MovementResolver, ToggleOutcome,
};
use crate::world::AvatarRig;

/// Collaborators the controller reads and drives each frame.
pub struct FrameWorld<'a, B: PhysicsBody, A: AnimationPlayer> {
    /// `None` until the body has been created
    pub body: Option<&'a mut B>,
    pub rig: &'a mut AvatarRig,
    pub interactables: &'a mut [Interactable],
    pub animator: &'a mut A,
    pub camera: &'a mut ViewportCamera,
}

/// What one frame did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// Gate result; `None` when the gate did not run
    pub toggle: Option<ToggleOutcome>,
    pub movement: Option<MovementOutput>,
    /// Velocity written to the body this frame
    pub velocity_written: Option<Vec3>,
    /// Clip newly requested this frame
    pub animation: Option<AnimationLabel>,
    pub leveled_up: bool,
    pub camera_updated: bool,
    pub hud_changed: bool,
}

/// Per-frame avatar controller.
#[derive(Debug, Clone)]
pub struct FrameController {
    gate: InteractionGate,
    resolver: MovementResolver,
    smoother: HeadingSmoother,
    camera_rig: CameraRig,
    animation: AnimationDriver,
    hud: Hud,
}

impl Default for FrameController {
    fn default() -> Self {
        Self::new(&ControllerConfig::default())
    }
}

impl FrameController {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            gate: InteractionGate::new(),
            resolver: MovementResolver::new(config.tuning, config.drag_controls),
            smoother: HeadingSmoother::new(),
            camera_rig: CameraRig::default(),
            animation: AnimationDriver::new(),
            hud: Hud::new(),
        }
    }

    pub fn gate(&self) -> &InteractionGate {
        &self.gate
    }

    pub fn resolver(&self) -> &MovementResolver {
        &self.resolver
    }

    pub fn camera_rig(&self) -> &CameraRig {
        &self.camera_rig
    }

    pub fn camera_rig_mut(&mut self) -> &mut CameraRig {
        &mut self.camera_rig
    }

    pub fn animation(&self) -> &AnimationDriver {
        &self.animation
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Run one frame against the wall clock.
    pub fn update<B: PhysicsBody, A: AnimationPlayer>(
        &mut self,
        delta_time: f32,
        input: &InputSnapshot,
        ctx: &mut PlayerContext,
        world: &mut FrameWorld<'_, B, A>,
    ) -> FrameReport {
        self.update_at(delta_time, Instant::now(), input, ctx, world)
    }

    /// Run one frame at an explicit time.
    pub fn update_at<B: PhysicsBody, A: AnimationPlayer>(
        &mut self,
        delta_time: f32,
        now: Instant,
        input: &InputSnapshot,
        ctx: &mut PlayerContext,
        world: &mut FrameWorld<'_, B, A>,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        self.gate.poll(now);

        if let Some(body) = world.body.as_deref() {
            let player_position = Some(body.translation());
            if let Some(in_range) = any_in_range(world.interactables, player_position) {
                ctx.interaction.able_to_interact = in_range;
            }

            let outcome = self.gate.try_toggle(input, &mut ctx.interaction, now);
            if outcome == ToggleOutcome::Entered
                && self.animation.request(AnimationLabel::Wave, &mut *world.animator)
            {
                report.animation = Some(AnimationLabel::Wave);
            }
            report.toggle = Some(outcome);
        }

        if input.actions.get_exp {
            report.leveled_up = ctx.xp.add_xp(DEBUG_XP_GRANT).leveled_up;
        }

        if let Some(body) = world.body.as_deref_mut() {
            let interacting = ctx.interaction.interacting;
            let movement = self.resolver.resolve(input, &mut ctx.heading);

            // Interaction keeps its entry clip until it ends
            if !interacting {
                let label = AnimationLabel::from(movement.locomotion);
                if self.animation.request(label, &mut *world.animator) {
                    report.animation = Some(label);
                }
            }

            self.smoother.update(&mut ctx.heading, interacting);

            if !interacting {
                let vertical = body.linear_velocity().y;
                let velocity = Vec3::new(movement.velocity.x, vertical, movement.velocity.z);
                body.set_linear_velocity(velocity, true);
                report.velocity_written = Some(velocity);
            }

            world.rig.sync(body.translation(), &ctx.heading);
            report.movement = Some(movement);
        } else {
            debug!("physics body not ready, skipping movement");
        }

        world.animator.advance(delta_time);

        report.camera_updated = self.camera_rig.update(
            world.rig.camera_position_target(),
            world.rig.camera_look_target(),
            world.camera,
        );

        report.hud_changed = self.hud.observe(&ctx.interaction, &ctx.xp);

        report
    }
}
