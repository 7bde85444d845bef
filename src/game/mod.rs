//! Game core
//!
//! Everything that decides what happens in a round lives here:
//! - `generator`: random target circles from an injectable source
//! - `scoring`: guess vs. target
//! - `session`: the ready/result state machine
//! - `driver`: a session bound to its seeded RNG
//!
//! No rendering, I/O or global state.

pub mod circle;
pub mod driver;
pub mod generator;
pub mod scoring;
pub mod session;

pub use circle::{Circle, Coordinates, Guess};
pub use driver::Game;
pub use generator::{CircleSource, generate};
pub use scoring::{ScoreBreakdown, is_perfect, score};
pub use session::{GameEvent, GamePhase, GameSession, GuessField, GuessInput};
