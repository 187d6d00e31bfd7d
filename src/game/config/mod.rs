//! Config Module
//!
//! Session configuration for the avatar controller.

pub mod controller_config;

pub use controller_config::{ConfigError, ControllerConfig};
