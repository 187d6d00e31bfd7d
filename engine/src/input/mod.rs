//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and pointer drag.
//! This module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use meadow_engine::input::{InputSampler, KeyCode};
//!
//! let mut sampler = InputSampler::new();
//!
//! // Forward raw events as they arrive
//! sampler.handle_key(KeyCode::W, true);
//! sampler.pointer_mut().set_position(400.0, 300.0, 800, 600);
//! sampler.pointer_mut().press();
//!
//! // Once per frame
//! let input = sampler.sample();
//! if input.actions.forward {
//!     // Move forward
//! }
//! ```

pub mod bindings;
pub mod keyboard;
pub mod pointer;
pub mod sampler;

// Re-export commonly used types at module level
pub use bindings::{Binding, InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState};
pub use pointer::PointerState;
pub use sampler::{ActionFlags, InputSampler, InputSnapshot};
