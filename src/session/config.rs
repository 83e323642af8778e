//! Session configuration.
//!
//! Defaults reproduce the classic workbench; every field may be overridden
//! from a JSON file, e.g.
//!
//! ```json
//! { "spray_points": 20000, "initial_level": 5, "rng_seed": 42 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IfsError, Result};

/// Edit granularity of the clone controls
pub const DEFAULT_STEP: f64 = 0.01;

/// Points plotted per spray
pub const DEFAULT_SPRAY_POINTS: usize = 2000;

/// Fractalization level at startup
pub const DEFAULT_LEVEL: u32 = 8;

/// Square canvas edge in pixels
pub const DEFAULT_CANVAS_SIZE: f64 = 512.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Translation per nudge; scaling uses `1 ± 2*step`, rotation `200*step` degrees
    pub edit_step: f64,
    pub spray_points: usize,
    pub initial_level: u32,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Fixed seed for the session RNG; `None` draws from OS entropy
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            edit_step: DEFAULT_STEP,
            spray_points: DEFAULT_SPRAY_POINTS,
            initial_level: DEFAULT_LEVEL,
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SessionConfig =
            serde_json::from_str(json).map_err(|e| IfsError::ConfigParse {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| IfsError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.edit_step.is_finite() && self.edit_step > 0.0 && self.edit_step < 0.5) {
            return Err(IfsError::ConfigParse {
                reason: format!("edit_step must be in (0, 0.5), got {}", self.edit_step),
            });
        }
        if self.initial_level < 1 {
            return Err(IfsError::ConfigParse {
                reason: "initial_level must be at least 1".to_string(),
            });
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(IfsError::ConfigParse {
                reason: "canvas dimensions must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn canvas(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }
}
