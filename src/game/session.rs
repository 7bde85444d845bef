//! Session state machine
//!
//! A session is a plain value. [`GameSession::apply`] never mutates it in
//! place: it returns the next session or an error, so a rejected event leaves
//! the caller's session exactly as it was.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::circle::{Circle, Guess};
use super::generator::CircleSource;
use super::scoring::score;
use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::projection::WorldBounds;

/// Where the round is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Waiting for the player's guess
    Ready,
    /// Guess scored, waiting for the next round
    Result,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Ready => f.write_str("ready"),
            GamePhase::Result => f.write_str("result"),
        }
    }
}

/// One of the three text boxes of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessField {
    /// Center x
    H,
    /// Center y
    K,
    /// Radius
    R,
}

impl GuessField {
    pub const ALL: [GuessField; 3] = [GuessField::H, GuessField::K, GuessField::R];
}

impl fmt::Display for GuessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessField::H => f.write_str("h"),
            GuessField::K => f.write_str("k"),
            GuessField::R => f.write_str("r"),
        }
    }
}

/// Raw, unvalidated guess text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessInput {
    pub h: String,
    pub k: String,
    pub r: String,
}

impl GuessInput {
    pub fn get(&self, field: GuessField) -> &str {
        match field {
            GuessField::H => &self.h,
            GuessField::K => &self.k,
            GuessField::R => &self.r,
        }
    }

    pub fn set(&mut self, field: GuessField, text: String) {
        match field {
            GuessField::H => self.h = text,
            GuessField::K => self.k = text,
            GuessField::R => self.r = text,
        }
    }

    fn parse_field(&self, field: GuessField) -> Result<i64> {
        self.get(field)
            .trim()
            .parse::<i64>()
            .map_err(|_| GameError::IncompleteInput(field))
    }

    /// Validate the three fields into a guess
    pub fn parse(&self) -> Result<Guess> {
        let h = self.parse_field(GuessField::H)?;
        let k = self.parse_field(GuessField::K)?;
        let r = self.parse_field(GuessField::R)?;
        if r <= 0 {
            return Err(GameError::InvalidRadius(r));
        }
        Ok(Guess::new(DVec2::new(h as f64, k as f64), r as f64))
    }
}

/// Player actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SetDifficulty(Difficulty),
    UpdateField(GuessField, String),
    Check,
    Next,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::SetDifficulty(d) => write!(f, "set difficulty ({d})"),
            GameEvent::UpdateField(field, _) => write!(f, "update {field}"),
            GameEvent::Check => f.write_str("check"),
            GameEvent::Next => f.write_str("next round"),
        }
    }
}

/// Complete game state between two player actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    difficulty: Difficulty,
    phase: GamePhase,
    circle: Circle,
    guess: Option<Guess>,
    input: GuessInput,
    /// Score of the current round (0 until checked)
    score: u8,
    total_score: u32,
    /// 1-based
    round: u32,
}

impl GameSession {
    /// Fresh session at round 1 with its first target already drawn
    pub fn new<S: CircleSource + ?Sized>(difficulty: Difficulty, source: &mut S) -> Self {
        Self {
            difficulty,
            phase: GamePhase::Ready,
            circle: source.next_circle(difficulty),
            guess: None,
            input: GuessInput::default(),
            score: 0,
            total_score: 0,
            round: 1,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Only present in the result phase
    pub fn guess(&self) -> Option<&Guess> {
        self.guess.as_ref()
    }

    pub fn input(&self) -> &GuessInput {
        &self.input
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn world_bounds(&self) -> WorldBounds {
        self.difficulty.settings().world_bounds
    }

    /// Compute the session that follows `event`
    pub fn apply<S: CircleSource + ?Sized>(
        &self,
        event: GameEvent,
        source: &mut S,
    ) -> Result<GameSession> {
        match event {
            GameEvent::SetDifficulty(difficulty) => Ok(Self::new(difficulty, source)),
            GameEvent::UpdateField(field, text) => {
                self.expect_phase(GamePhase::Ready, || GameEvent::UpdateField(field, text.clone()))?;
                let mut next = self.clone();
                next.input.set(field, text);
                Ok(next)
            }
            GameEvent::Check => {
                self.expect_phase(GamePhase::Ready, || GameEvent::Check)?;
                let guess = self.input.parse()?;
                let round_score = score(&self.circle, &guess);
                Ok(Self {
                    phase: GamePhase::Result,
                    guess: Some(guess),
                    score: round_score,
                    total_score: self.total_score + u32::from(round_score),
                    ..self.clone()
                })
            }
            GameEvent::Next => {
                self.expect_phase(GamePhase::Result, || GameEvent::Next)?;
                Ok(Self {
                    difficulty: self.difficulty,
                    phase: GamePhase::Ready,
                    circle: source.next_circle(self.difficulty),
                    guess: None,
                    input: GuessInput::default(),
                    score: 0,
                    total_score: self.total_score,
                    round: self.round + 1,
                })
            }
        }
    }

    fn expect_phase(&self, phase: GamePhase, event: impl FnOnce() -> GameEvent) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                event: event(),
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Hands out the same circles in order, wrapping around
    struct Scripted {
        circles: Vec<Circle>,
        next: usize,
        requested: Vec<Difficulty>,
    }

    impl Scripted {
        fn new(circles: Vec<Circle>) -> Self {
            Self {
                circles,
                next: 0,
                requested: Vec::new(),
            }
        }
    }

    impl CircleSource for Scripted {
        fn next_circle(&mut self, difficulty: Difficulty) -> Circle {
            self.requested.push(difficulty);
            let circle = self.circles[self.next % self.circles.len()].clone();
            self.next += 1;
            circle
        }
    }

    fn target(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(DVec2::new(x, y), r)
    }

    fn fill(
        session: &GameSession,
        source: &mut Scripted,
        h: &str,
        k: &str,
        r: &str,
    ) -> GameSession {
        let mut s = session.clone();
        for (field, text) in GuessField::ALL.into_iter().zip([h, k, r]) {
            s = s
                .apply(GameEvent::UpdateField(field, text.to_string()), source)
                .unwrap();
        }
        s
    }

    #[test]
    fn test_new_session() {
        let mut source = Scripted::new(vec![target(2.0, 3.0, 4.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        assert_eq!(session.phase(), GamePhase::Ready);
        assert_eq!(session.round(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_score(), 0);
        assert!(session.guess().is_none());
        assert_eq!(session.circle(), &target(2.0, 3.0, 4.0));
        assert_eq!(session.world_bounds().max_x(), 10.0);
    }

    #[test]
    fn test_perfect_round() {
        let mut source = Scripted::new(vec![target(2.0, 3.0, 4.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        let filled = fill(&session, &mut source, "2", "3", "4");
        let checked = filled.apply(GameEvent::Check, &mut source).unwrap();

        assert_eq!(checked.phase(), GamePhase::Result);
        assert_eq!(checked.score(), 100);
        assert_eq!(checked.total_score(), 100);
        assert_eq!(checked.guess(), Some(&Guess::new(DVec2::new(2.0, 3.0), 4.0)));
        // The original is untouched
        assert_eq!(filled.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_empty_field_is_incomplete() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        let filled = fill(&session, &mut source, "", "0", "5");

        let err = filled.apply(GameEvent::Check, &mut source).unwrap_err();
        assert_eq!(err, GameError::IncompleteInput(GuessField::H));
        assert_eq!(filled.phase(), GamePhase::Ready);
        assert_eq!(filled.score(), 0);
    }

    #[test]
    fn test_first_bad_field_is_reported() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        let filled = fill(&session, &mut source, "1", "abc", "");
        assert_eq!(
            filled.apply(GameEvent::Check, &mut source),
            Err(GameError::IncompleteInput(GuessField::K))
        );
        let blank = fill(&session, &mut source, "1", "2", "   ");
        assert_eq!(
            blank.apply(GameEvent::Check, &mut source),
            Err(GameError::IncompleteInput(GuessField::R))
        );
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        for (text, value) in [("0", 0), ("-3", -3)] {
            let filled = fill(&session, &mut source, "1", "1", text);
            assert_eq!(
                filled.apply(GameEvent::Check, &mut source),
                Err(GameError::InvalidRadius(value))
            );
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        let filled = fill(&session, &mut source, " 1 ", "0", "5\n");
        let checked = filled.apply(GameEvent::Check, &mut source).unwrap();
        assert_eq!(checked.score(), 90);
    }

    #[test]
    fn test_next_round() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0), target(-4.0, 1.0, 3.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        let checked = fill(&session, &mut source, "1", "0", "5")
            .apply(GameEvent::Check, &mut source)
            .unwrap();
        assert_eq!(checked.score(), 90);

        let next = checked.apply(GameEvent::Next, &mut source).unwrap();
        assert_eq!(next.phase(), GamePhase::Ready);
        assert_eq!(next.round(), 2);
        assert_eq!(next.score(), 0);
        assert_eq!(next.total_score(), 90);
        assert!(next.guess().is_none());
        assert_eq!(next.input(), &GuessInput::default());
        assert_eq!(next.circle(), &target(-4.0, 1.0, 3.0));
    }

    #[test]
    fn test_total_accumulates_across_rounds() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0)]);
        let mut session = GameSession::new(Difficulty::Easy, &mut source);
        for _ in 0..3 {
            session = fill(&session, &mut source, "1", "0", "5")
                .apply(GameEvent::Check, &mut source)
                .unwrap()
                .apply(GameEvent::Next, &mut source)
                .unwrap();
        }
        assert_eq!(session.total_score(), 270);
        assert_eq!(session.round(), 4);
    }

    #[test]
    fn test_out_of_phase_events_rejected() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);

        assert_eq!(
            session.apply(GameEvent::Next, &mut source),
            Err(GameError::InvalidTransition {
                event: GameEvent::Next,
                phase: GamePhase::Ready,
            })
        );

        let checked = fill(&session, &mut source, "0", "0", "5")
            .apply(GameEvent::Check, &mut source)
            .unwrap();
        let snapshot = checked.clone();
        assert!(matches!(
            checked.apply(GameEvent::Check, &mut source),
            Err(GameError::InvalidTransition { phase: GamePhase::Result, .. })
        ));
        assert!(
            checked
                .apply(GameEvent::UpdateField(GuessField::H, "3".into()), &mut source)
                .is_err()
        );
        assert_eq!(checked, snapshot);
    }

    #[test]
    fn test_set_difficulty_resets() {
        let mut source = Scripted::new(vec![target(0.0, 0.0, 5.0), target(12.0, -9.0, 7.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        let checked = fill(&session, &mut source, "1", "0", "5")
            .apply(GameEvent::Check, &mut source)
            .unwrap();

        let hard = checked
            .apply(GameEvent::SetDifficulty(Difficulty::Hard), &mut source)
            .unwrap();
        assert_eq!(hard.difficulty(), Difficulty::Hard);
        assert_eq!(hard.phase(), GamePhase::Ready);
        assert_eq!(hard.round(), 1);
        assert_eq!(hard.total_score(), 0);
        assert_eq!(hard.score(), 0);
        assert!(hard.guess().is_none());
        assert_eq!(hard.circle(), &target(12.0, -9.0, 7.0));
        assert_eq!(hard.world_bounds().max_x(), 25.0);
        assert_eq!(source.requested, vec![Difficulty::Easy, Difficulty::Hard]);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = Pcg32::seed_from_u64(2024);
        let mut b = Pcg32::seed_from_u64(2024);
        let sa = GameSession::new(Difficulty::Medium, &mut a);
        let sb = GameSession::new(Difficulty::Medium, &mut b);
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_session_json_snapshot() {
        let mut source = Scripted::new(vec![target(1.0, -2.0, 3.0)]);
        let session = GameSession::new(Difficulty::Easy, &mut source);
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["phase"], "ready");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["round"], 1);
        let back: GameSession = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }
}
