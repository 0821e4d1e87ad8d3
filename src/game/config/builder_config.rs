//! Builder Configuration
//!
//! Grid and collision constants for the placement engine. `Default` matches
//! the tool's shipped values; a JSON file may override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Vertical distance between floors. Slightly above the 2m module height
    /// so stacked pieces never share a face.
    pub floor_height: f32,
    /// Fine grid used by corner pieces (world units)
    pub corner_grid_step: f32,
    /// Shrink applied to a candidate's half extents before the overlap test
    pub overlap_margin: f32,
    /// Stand-in footprint for an axis whose rotated size is ~zero
    pub degenerate_axis_size: f32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            floor_height: 2.0001,
            corner_grid_step: 0.1,
            overlap_margin: 0.02,
            degenerate_axis_size: 1.0,
        }
    }
}

impl BuilderConfig {
    /// World height of a floor index
    pub fn floor_y(&self, floor: u32) -> f32 {
        floor as f32 * self.floor_height
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("[Config] Loaded builder config from {}", path.display());
        Ok(config)
    }
}
