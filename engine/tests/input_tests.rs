//! Input Tests - Raw Events to Snapshots
//!
//! Tests for the sampler: key aliases, configured bindings and pointer drag
//! coming in as raw window events.

use glam::Vec2;
use meadow_engine::game::ControllerConfig;
use meadow_engine::input::{InputAction, InputSampler, KeyBindings, KeyCode};

// ============================================================================
// Keyboard Tests
// ============================================================================

#[test]
fn test_arrow_aliases_match_letters() {
    let mut letters = InputSampler::new();
    let mut arrows = InputSampler::new();

    for (letter, arrow) in [
        (KeyCode::W, KeyCode::ArrowUp),
        (KeyCode::A, KeyCode::ArrowLeft),
    ] {
        letters.handle_key(letter, true);
        arrows.handle_key(arrow, true);
    }

    assert_eq!(letters.sample(), arrows.sample());
    assert!(letters.sample().actions.forward);
    assert!(letters.sample().actions.left);
}

#[test]
fn test_release_clears_flag() {
    let mut sampler = InputSampler::new();
    sampler.handle_key(KeyCode::ShiftLeft, true);
    assert!(sampler.sample().actions.run);

    sampler.handle_key(KeyCode::ShiftLeft, false);
    assert!(!sampler.sample().actions.run);
}

#[test]
fn test_unbound_key_is_reported() {
    let mut sampler = InputSampler::new();
    assert!(!sampler.handle_key(KeyCode::Space, true));
    assert!(sampler.handle_key(KeyCode::E, true));
    assert!(sampler.sample().actions.interact);
}

#[test]
fn test_bindings_from_config() {
    let config = ControllerConfig::from_json_str(
        r#"{ "bindings": [ { "key": "Space", "action": "Interact" } ] }"#,
    )
    .unwrap();
    let mut sampler = InputSampler::with_bindings(config.bindings);

    sampler.handle_key(KeyCode::E, true);
    assert!(!sampler.sample().actions.interact);

    sampler.handle_key(KeyCode::Space, true);
    assert!(sampler.sample().actions.interact);
}

#[test]
fn test_custom_binding_adds_alias() {
    let mut bindings = KeyBindings::new();
    bindings.bind(KeyCode::F, InputAction::GrantXp);
    let mut sampler = InputSampler::with_bindings(bindings);

    sampler.handle_key(KeyCode::F, true);
    assert!(sampler.sample().actions.get_exp);
}

// ============================================================================
// Pointer Drag Tests
// ============================================================================

#[test]
fn test_drag_in_device_coordinates() {
    let mut sampler = InputSampler::new();
    sampler.pointer_mut().set_position(600.0, 150.0, 800, 600);
    sampler.pointer_mut().press();

    let input = sampler.sample();
    assert!(input.dragging);
    assert!((input.drag - Vec2::new(0.5, 0.5)).length() < 1e-6);
}

#[test]
fn test_no_drag_without_press() {
    let mut sampler = InputSampler::new();
    sampler.pointer_mut().set_position(0.0, 0.0, 800, 600);

    let input = sampler.sample();
    assert!(!input.dragging);
    assert_eq!(input.drag, Vec2::ZERO);
}

#[test]
fn test_release_between_frames_ends_drag() {
    let mut sampler = InputSampler::new();
    sampler.pointer_mut().set_position(400.0, 300.0, 800, 600);
    sampler.pointer_mut().press();
    sampler.pointer_mut().release();

    assert!(!sampler.sample().dragging);
}

#[test]
fn test_focus_loss_resets() {
    let mut sampler = InputSampler::new();
    sampler.handle_key(KeyCode::W, true);
    sampler.pointer_mut().press();
    sampler.reset();

    let input = sampler.sample();
    assert!(!input.actions.any_movement());
    assert!(!input.dragging);
}
