//! Random target generation

use glam::DVec2;
use rand::Rng;

use super::circle::Circle;
use crate::difficulty::{Difficulty, settings_for};

/// Anything that can hand out target circles.
///
/// Every [`Rng`] is a source through [`generate`]; tests plug in scripted
/// sources to get fixed targets.
pub trait CircleSource {
    fn next_circle(&mut self, difficulty: Difficulty) -> Circle;
}

impl<R: Rng> CircleSource for R {
    fn next_circle(&mut self, difficulty: Difficulty) -> Circle {
        generate(difficulty, self)
    }
}

/// Draw a circle with integer h, k and r, each uniform over the tier's
/// inclusive range
pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Circle {
    let range = settings_for(difficulty).range;
    let h = random_int(rng, range.h_min, range.h_max);
    let k = random_int(rng, range.k_min, range.k_max);
    let r = random_int(rng, range.r_min, range.r_max);

    Circle::new(DVec2::new(h as f64, k as f64), r as f64)
}

fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}
