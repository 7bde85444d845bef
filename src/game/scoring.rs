//! Guess scoring
//!
//! Center accuracy is worth 70 points and radius accuracy 30. Each world unit
//! of center error costs 10 points, each unit of radius error 5.

use serde::Serialize;

use super::circle::{Circle, Guess};
use crate::consts::{
    CENTER_PENALTY_PER_UNIT, CENTER_POINTS, MAX_SCORE, PERFECT_TOLERANCE, RADIUS_PENALTY_PER_UNIT,
    RADIUS_POINTS,
};

/// Intermediate values of a score computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub center_distance: f64,
    pub radius_difference: f64,
    pub center_score: f64,
    pub radius_score: f64,
    pub total: u8,
}

impl ScoreBreakdown {
    pub fn compute(target: &Circle, guess: &Guess) -> Self {
        let center_distance = target.center.distance(guess.center);
        let radius_difference = (target.radius - guess.radius).abs();

        let center_score = (CENTER_POINTS - center_distance * CENTER_PENALTY_PER_UNIT).max(0.0);
        let radius_score = (RADIUS_POINTS - radius_difference * RADIUS_PENALTY_PER_UNIT).max(0.0);

        // Near-exact guesses would otherwise round to 99
        let total = if center_distance < PERFECT_TOLERANCE && radius_difference < PERFECT_TOLERANCE
        {
            MAX_SCORE
        } else {
            (center_score + radius_score).round() as u8
        };

        Self {
            center_distance,
            radius_difference,
            center_score,
            radius_score,
            total,
        }
    }
}

/// Score a guess against the target, 0..=100
pub fn score(target: &Circle, guess: &Guess) -> u8 {
    ScoreBreakdown::compute(target, guess).total
}

/// Whether a score is the maximum
pub fn is_perfect(score: u8) -> bool {
    score == MAX_SCORE
}
