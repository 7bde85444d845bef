//! Circle Guess - read a circle off the coordinate plane
//!
//! Core modules:
//! - `difficulty`: Tier catalog (generation ranges, plane bounds)
//! - `game`: Generation, scoring and the round state machine
//! - `projection`: World to display coordinate mapping
//! - `settings`: Configuration loaded from JSON

pub mod difficulty;
pub mod error;
pub mod game;
pub mod projection;
pub mod settings;

pub use difficulty::{Difficulty, DifficultySetting, GenerationRange, settings_for};
pub use error::GameError;
pub use game::{Circle, Game, GameEvent, GamePhase, GameSession, Guess, GuessField};
pub use projection::{Projector, Surface, WorldBounds};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default drawing surface
    pub const PLANE_WIDTH: f64 = 600.0;
    pub const PLANE_HEIGHT: f64 = 500.0;
    /// Every 5th grid line is major and labelled
    pub const MAJOR_GRID_STEP: i32 = 5;

    /// Scoring weights
    pub const MAX_SCORE: u8 = 100;
    pub const CENTER_POINTS: f64 = 70.0;
    pub const RADIUS_POINTS: f64 = 30.0;
    pub const CENTER_PENALTY_PER_UNIT: f64 = 10.0;
    pub const RADIUS_PENALTY_PER_UNIT: f64 = 5.0;
    /// Guesses closer than this on both center and radius score a flat 100
    pub const PERFECT_TOLERANCE: f64 = 0.1;
}
