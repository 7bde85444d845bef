//! Target circle and player guess

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point on the world plane
pub type Coordinates = DVec2;

/// The hidden target of a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coordinates,
    pub radius: f64,
    /// Hint points on the circumference. Never populated now that the center
    /// is drawn on the plane.
    #[serde(default)]
    pub reference_points: Vec<Coordinates>,
}

impl Circle {
    pub fn new(center: Coordinates, radius: f64) -> Self {
        Self {
            center,
            radius,
            reference_points: Vec::new(),
        }
    }
}

/// A parsed, accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub center: Coordinates,
    pub radius: f64,
}

impl Guess {
    pub fn new(center: Coordinates, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl From<&Circle> for Guess {
    fn from(circle: &Circle) -> Self {
        Self::new(circle.center, circle.radius)
    }
}
