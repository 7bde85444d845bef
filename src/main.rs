//! Circle Guess entry point
//!
//! Line-oriented terminal host: reads commands from stdin and prints what a
//! plane renderer would show after each one.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};

    use circle_guess::game::{GameEvent, GamePhase, GameSession, GuessField, ScoreBreakdown};
    use circle_guess::{Difficulty, Game, GameError, Settings};

    const HELP: &str = "\
commands:
  easy | medium | hard   change difficulty (resets score)
  h <n> | k <n> | r <n>  enter a guess field
  check                  score the guess
  next                   start the next round
  state                  print the session as JSON
  help                   show this text
  quit                   exit";

    enum Command {
        Event(GameEvent),
        State,
        Help,
        Quit,
    }

    fn parse_command(line: &str) -> Result<Command, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err("empty command".to_string());
        };
        let rest = parts.collect::<Vec<_>>().join(" ");

        let field = match word {
            "h" => Some(GuessField::H),
            "k" => Some(GuessField::K),
            "r" => Some(GuessField::R),
            _ => None,
        };
        if let Some(field) = field {
            return Ok(Command::Event(GameEvent::UpdateField(field, rest)));
        }

        match word {
            "check" => Ok(Command::Event(GameEvent::Check)),
            "next" => Ok(Command::Event(GameEvent::Next)),
            "state" => Ok(Command::State),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => other
                .parse::<Difficulty>()
                .map(|d| Command::Event(GameEvent::SetDifficulty(d)))
                .map_err(|e| format!("{e} (type `help`)")),
        }
    }

    fn describe(session: &GameSession) {
        let setting = session.difficulty().settings();
        let bounds = session.world_bounds();
        let circle = session.circle();
        println!(
            "[{} - {}] round {} | round score {} | total {}",
            session.difficulty(),
            setting.description,
            session.round(),
            session.score(),
            session.total_score()
        );
        println!(
            "plane x [{}, {}] y [{}, {}]",
            bounds.min_x(),
            bounds.max_x(),
            bounds.min_y(),
            bounds.max_y()
        );
        println!(
            "circle center ({}, {}) radius {}",
            circle.center.x, circle.center.y, circle.radius
        );

        if session.phase() == GamePhase::Result {
            if let Some(guess) = session.guess() {
                let breakdown = ScoreBreakdown::compute(circle, guess);
                println!(
                    "your guess ({}, {}) r {} -> {} points (center off by {:.2}, radius off by {:.2})",
                    guess.center.x,
                    guess.center.y,
                    guess.radius,
                    breakdown.total,
                    breakdown.center_distance,
                    breakdown.radius_difference
                );
                if circle_guess::game::is_perfect(breakdown.total) {
                    println!("Perfect!");
                }
            }
            println!("type `next` for another round");
        }
    }

    fn load_settings() -> Result<Settings, GameError> {
        match std::env::args().nth(1) {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }

    pub fn run() -> io::Result<()> {
        let settings = match load_settings() {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}, using defaults");
                Settings::default()
            }
        };

        let mut game = Game::new(settings);
        println!("Circle Guess: find h, k and r of the circle. Type `help` for commands.");
        describe(game.session());

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Event(event)) => {
                    let announce = !matches!(event, GameEvent::UpdateField(..));
                    match game.dispatch(event) {
                        Ok(session) if announce => describe(session),
                        Ok(_) => {}
                        Err(err) => println!("error: {err}"),
                    }
                }
                Ok(Command::State) => match serde_json::to_string_pretty(game.session()) {
                    Ok(json) => println!("{json}"),
                    Err(err) => log::error!("Failed to serialize session: {err}"),
                },
                Ok(Command::Help) => println!("{HELP}"),
                Ok(Command::Quit) => break,
                Err(msg) => println!("error: {msg}"),
            }
            stdout.flush()?;
        }

        log::info!(
            "Exiting after {} round(s), total score {}",
            game.session().round(),
            game.session().total_score()
        );
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Circle Guess (native) starting...");

    if let Err(err) = terminal::run() {
        log::error!("Terminal I/O failed: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; a host drives `Game` directly
}
