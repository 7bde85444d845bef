//! Error types shared across the game core

use crate::game::session::{GameEvent, GamePhase, GuessField};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("unknown difficulty: {0}")]
    InvalidDifficulty(String),
    #[error("incomplete input: enter an integer value for {0}")]
    IncompleteInput(GuessField),
    #[error("invalid radius {0}: the radius must be a positive number")]
    InvalidRadius(i64),
    #[error("degenerate world bounds: x [{min_x}, {max_x}], y [{min_y}, {max_y}]")]
    DegenerateWorldBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
    #[error("cannot apply {event} while in the {phase} phase")]
    InvalidTransition { event: GameEvent, phase: GamePhase },
    #[error("settings: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
