//! Difficulty tiers
//!
//! Each tier fixes the ranges the target circle is drawn from and the
//! visible extent of the plane.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::projection::WorldBounds;

/// Difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every tier, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Generation ranges and world bounds for this tier
    pub fn settings(&self) -> &'static DifficultySetting {
        settings_for(*self)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Inclusive integer ranges for the circle's h, k and r
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRange {
    pub h_min: i32,
    pub h_max: i32,
    pub k_min: i32,
    pub k_max: i32,
    /// Always at least 1 so the radius is a positive whole number
    pub r_min: i32,
    pub r_max: i32,
}

/// Static description of one tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultySetting {
    pub range: GenerationRange,
    pub world_bounds: WorldBounds,
    pub description: &'static str,
}

static EASY: DifficultySetting = DifficultySetting {
    range: GenerationRange {
        h_min: -5,
        h_max: 5,
        k_min: -5,
        k_max: 5,
        r_min: 2,
        r_max: 5,
    },
    world_bounds: WorldBounds::square(10.0),
    description: "Near center, small radius",
};

static MEDIUM: DifficultySetting = DifficultySetting {
    range: GenerationRange {
        h_min: -10,
        h_max: 10,
        k_min: -10,
        k_max: 10,
        r_min: 3,
        r_max: 8,
    },
    world_bounds: WorldBounds::square(15.0),
    description: "Moderate range",
};

static HARD: DifficultySetting = DifficultySetting {
    range: GenerationRange {
        h_min: -15,
        h_max: 15,
        k_min: -15,
        k_max: 15,
        r_min: 5,
        r_max: 10,
    },
    world_bounds: WorldBounds::square(25.0),
    description: "Far center, large radius",
};

/// Look up the catalog entry for a tier
pub fn settings_for(difficulty: Difficulty) -> &'static DifficultySetting {
    match difficulty {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    }
}
