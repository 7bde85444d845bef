//! Game settings
//!
//! Loaded from an optional JSON file; every field has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{PLANE_HEIGHT, PLANE_WIDTH};
use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::projection::Surface;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tier the first session starts in
    pub difficulty: Difficulty,
    /// Drawing surface width in pixels
    pub surface_width: f64,
    /// Drawing surface height in pixels
    pub surface_height: f64,
    /// Fixed RNG seed for reproducible targets (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            surface_width: PLANE_WIDTH,
            surface_height: PLANE_HEIGHT,
            seed: None,
        }
    }
}

impl Settings {
    pub fn surface(&self) -> Surface {
        Surface {
            width: self.surface_width,
            height: self.surface_height,
        }
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| GameError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::Settings(format!("{}: {}", path.display(), e)))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        let positive = self.surface_width > 0.0 && self.surface_height > 0.0;
        if !positive {
            return Err(GameError::Settings(format!(
                "surface must be positive, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        Ok(())
    }
}
