//! Owns a session and its random source and feeds it player events

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::scoring::is_perfect;
use super::session::{GameEvent, GameSession};
use crate::error::Result;
use crate::projection::Projector;
use crate::settings::Settings;

/// A running game: the current session plus the RNG that draws its circles
#[derive(Debug, Clone)]
pub struct Game {
    session: GameSession,
    rng: Pcg32,
    settings: Settings,
}

impl Game {
    /// Start a game; seeds from settings when given, otherwise from entropy
    pub fn new(settings: Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        let session = GameSession::new(settings.difficulty, &mut rng);
        log::info!(
            "New game ({}, seed {:?})",
            settings.difficulty,
            settings.seed
        );
        Self {
            session,
            rng,
            settings,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Projector for the current tier's bounds on the configured surface
    pub fn projector(&self) -> Projector {
        Projector::new(self.session.world_bounds(), self.settings.surface())
    }

    /// Apply one event. On error the session is left as it was.
    pub fn dispatch(&mut self, event: GameEvent) -> Result<&GameSession> {
        let label = event.to_string();
        let next = match self.session.apply(event, &mut self.rng) {
            Ok(next) => next,
            Err(err) => {
                log::warn!("Rejected {}: {}", label, err);
                return Err(err);
            }
        };

        if next.difficulty() != self.session.difficulty() {
            log::info!("Difficulty set to {}", next.difficulty());
        }
        if next.phase() != self.session.phase() || next.round() != self.session.round() {
            if next.guess().is_some() {
                log::info!(
                    "Round {} scored {}{} (total {})",
                    next.round(),
                    next.score(),
                    if is_perfect(next.score()) { ", perfect" } else { "" },
                    next.total_score()
                );
            } else {
                log::debug!("Round {} ready", next.round());
            }
        } else {
            log::debug!("Applied {}", label);
        }

        self.session = next;
        Ok(&self.session)
    }
}
