//! Meadow Walk - third-person avatar demo
//!
//! Opens a window and drives the avatar controller from its keyboard, mouse
//! and touch events. Nothing is drawn; avatar, camera and HUD state go to
//! the log once per second (`RUST_LOG=debug` for per-event traces).
//!
//! Usage: `meadow_walk [config.json]`

use std::path::PathBuf;
use std::time::Instant;

use glam::Vec3;
use log::{error, info};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use meadow_engine::camera::ViewportCamera;
use meadow_engine::game::{
    ControllerConfig, CrossFadeMixer, FrameController, FrameWorld, Interactable, PlayerContext,
};
use meadow_engine::input::{InputSampler, KeyCode};
use meadow_engine::physics::{KinematicBody, PhysicsBody};
use meadow_engine::world::AvatarRig;

#[derive(Debug, Error)]
enum DemoError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

fn map_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::ShiftLeft => KeyCode::ShiftLeft,
        WinitKey::ShiftRight => KeyCode::ShiftRight,
        WinitKey::KeyE => KeyCode::E,
        WinitKey::KeyF => KeyCode::F,
        WinitKey::KeyX => KeyCode::X,
        WinitKey::Space => KeyCode::Space,
        WinitKey::Enter => KeyCode::Enter,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

struct MeadowApp {
    window: Option<Window>,
    viewport: PhysicalSize<u32>,

    sampler: InputSampler,
    controller: FrameController,
    ctx: PlayerContext,

    body: KinematicBody,
    rig: AvatarRig,
    interactables: Vec<Interactable>,
    animator: CrossFadeMixer,
    camera: ViewportCamera,

    last_frame: Instant,
    last_report: Instant,
}

impl MeadowApp {
    fn new(config: ControllerConfig) -> Self {
        let now = Instant::now();
        let mut app = Self {
            window: None,
            viewport: PhysicalSize::new(1280, 720),
            sampler: InputSampler::with_bindings(config.bindings.clone()),
            controller: FrameController::new(&config),
            ctx: PlayerContext::new(),
            body: KinematicBody::new(Vec3::ZERO),
            rig: AvatarRig::new(),
            interactables: vec![
                Interactable::new("signpost", Vec3::new(2.0, 0.0, 2.0)),
                Interactable::new("well", Vec3::new(-3.0, 0.0, 5.0)),
            ],
            animator: CrossFadeMixer::new(),
            camera: ViewportCamera::new(),
            last_frame: now,
            last_report: now,
        };

        app.rig.sync(app.body.translation(), &app.ctx.heading);
        if let (Some(position), Some(look)) =
            (app.rig.camera_position_target(), app.rig.camera_look_target())
        {
            app.controller
                .camera_rig_mut()
                .snap(position, look, &mut app.camera);
        }
        app
    }

    fn update(&mut self, delta_time: f32) {
        let input = self.sampler.sample();
        let mut world = FrameWorld {
            body: Some(&mut self.body),
            rig: &mut self.rig,
            interactables: &mut self.interactables,
            animator: &mut self.animator,
            camera: &mut self.camera,
        };
        let report = self
            .controller
            .update(delta_time, &input, &mut self.ctx, &mut world);
        self.body.step(delta_time);

        if report.leveled_up {
            info!("level up! now level {}", self.ctx.xp.level());
        }

        let now = Instant::now();
        if now.duration_since(self.last_report).as_secs_f32() >= 1.0 {
            self.last_report = now;
            self.log_state();
        }
    }

    fn log_state(&self) {
        let hud = self.controller.hud();
        let prompts: Vec<String> = self
            .interactables
            .iter()
            .map(|object| {
                let sign = object.prompt(self.ctx.is_interacting());
                format!("{}={:?}", object.name, sign)
            })
            .collect();
        info!(
            "player {:.2?} yaw {:.2} | camera {:.2?} | {} {} | menu {} | {}",
            self.body.translation(),
            self.ctx.heading.world_character_yaw(),
            self.camera.position,
            hud.progress.level_label(),
            hud.progress.xp_label(),
            hud.interaction_menu_visible,
            prompts.join(" "),
        );
    }
}

impl ApplicationHandler for MeadowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("Meadow Walk")
            .with_inner_size(self.viewport);
        match event_loop.create_window(attrs) {
            Ok(window) => {
                self.viewport = window.inner_size();
                self.window = Some(window);
                self.last_frame = Instant::now();
                info!("window ready, WASD/arrows to move, Shift to run, E to interact");
            }
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == WinitKey::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.sampler
                        .handle_key(map_key(key), event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let pointer = self.sampler.pointer_mut();
                match state {
                    ElementState::Pressed => pointer.press(),
                    ElementState::Released => pointer.release(),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.sampler.pointer_mut().set_position(
                    position.x,
                    position.y,
                    self.viewport.width,
                    self.viewport.height,
                );
            }
            WindowEvent::CursorEntered { .. } => self.sampler.pointer_mut().enter_window(),
            WindowEvent::CursorLeft { .. } => self.sampler.pointer_mut().leave_window(),
            WindowEvent::Touch(touch) => {
                let (width, height) = (self.viewport.width, self.viewport.height);
                let pointer = self.sampler.pointer_mut();
                pointer.set_position(touch.location.x, touch.location.y, width, height);
                match touch.phase {
                    TouchPhase::Started => pointer.press(),
                    TouchPhase::Moved => {}
                    TouchPhase::Ended | TouchPhase::Cancelled => pointer.release(),
                }
            }
            WindowEvent::Focused(false) => self.sampler.reset(),
            WindowEvent::Resized(new_size) => {
                self.viewport = new_size;
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;
                self.update(delta_time);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run() -> Result<(), DemoError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ControllerConfig::load_or_default(config_path.as_deref());
    info!(
        "walk {:.2} run {:.2} rotation {:.4} rad | drag controls {}",
        config.tuning.walk_speed,
        config.tuning.run_speed,
        config.tuning.rotation_speed,
        if config.drag_controls { "on" } else { "off" }
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = MeadowApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}
