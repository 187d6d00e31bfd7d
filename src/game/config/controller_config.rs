//! Controller Configuration
//!
//! Everything a session can tune, read from a JSON file. Missing fields take
//! their defaults, so `{}` is a valid file.
//!
//! ```json
//! {
//!   "tuning": { "walk_speed": 0.7, "run_speed": 1.3, "rotation_speed": 0.0524 },
//!   "drag_controls": true,
//!   "bindings": [ { "key": "W", "action": "MoveForward" } ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::KeyBindings;
use crate::player::ControlTuning;

/// Failure to read a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Session configuration for the frame controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub tuning: ControlTuning,
    /// Whether pointer drag steers the avatar
    pub drag_controls: bool,
    pub bindings: KeyBindings,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tuning: ControlTuning::default(),
            drag_controls: true,
            bindings: KeyBindings::new(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a config file. Values are returned as written; see
    /// [`ControllerConfig::sanitized`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load `path` if given, falling back to defaults on any failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                info!("loaded controller config from {}", path.display());
                config.sanitized()
            }
            Err(err) => {
                warn!("{err}; using default controller config");
                Self::default()
            }
        }
    }

    /// Copy with tuning clamped into its designer ranges.
    pub fn sanitized(&self) -> Self {
        let tuning = self.tuning.clamped();
        if tuning != self.tuning {
            warn!("control tuning {:?} out of range, clamped to {:?}", self.tuning, tuning);
        }
        Self {
            tuning,
            ..self.clone()
        }
    }
}
