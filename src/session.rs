use std::io::Write;
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, TidepoolError};
use crate::input::LineInput;
use crate::random::RandomSource;

/// How a game paces its turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Show this prompt, then block on one line of input
    Prompted(&'static str),
    /// Block on a fixed real-time delay instead of input
    Timed(Duration),
}

/// The unit of input handed to a game each turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    /// One line typed by the player, without the trailing newline
    Line(String),
    /// The delay of a timed game elapsed; no input was read
    Tick,
}

/// Whether the session keeps running after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The termination predicate has not fired
    Running,
    /// The termination predicate fired; the session is over
    Finished {
        /// The concluding message selected by the game's outcome predicate
        message: String,
    },
}

/// Result of a single transition
#[derive(Debug, Clone)]
pub struct Turn {
    /// Narration lines to print for this turn, in order
    pub narration: Vec<String>,
    /// Whether the session continues
    pub status: Status,
}

impl Turn {
    /// A turn after which the session keeps running
    pub fn running(narration: Vec<String>) -> Self {
        Self {
            narration,
            status: Status::Running,
        }
    }

    /// A terminal turn with its concluding message
    pub fn finished(narration: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            narration,
            status: Status::Finished {
                message: message.into(),
            },
        }
    }
}

/// Trait for games the session loop can drive.
///
/// A game owns its session state and mutates it in [`Game::step`]; the loop
/// never inspects that state, only the returned [`Turn`].
pub trait Game: Send {
    /// One-line banner shown when the session starts
    fn banner(&self) -> Option<&str> {
        None
    }

    /// Lines shown after the banner, before the first turn
    fn opening(&self) -> Vec<String> {
        Vec::new()
    }

    /// How the next turn is paced
    fn pacing(&self) -> Pacing;

    /// Apply one transition to the session state
    fn step(&mut self, input: &TurnInput, rng: &dyn RandomSource) -> Turn;
}

/// Result of a completed session
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Number of turns the session took
    pub turns: u32,
    /// The concluding message
    pub message: String,
}

/// Session loop driver: one game, from its banner to a concluding message
pub struct SessionLoop<G, R, I, W> {
    game: G,
    rng: R,
    input: I,
    out: W,
}

impl<G, R, I, W> SessionLoop<G, R, I, W>
where
    G: Game,
    R: RandomSource,
    I: LineInput,
    W: Write + Send,
{
    /// Create a new SessionLoop
    pub fn new(game: G, rng: R, input: I, out: W) -> Self {
        Self {
            game,
            rng,
            input,
            out,
        }
    }

    /// Run the session until the game's termination predicate fires.
    ///
    /// Narration streams to the output sink as it happens; the concluding
    /// message is returned to the caller rather than printed here. Once a
    /// turn comes back [`Status::Finished`] no further input is read.
    pub async fn run(&mut self) -> Result<SessionReport> {
        if let Some(banner) = self.game.banner() {
            let banner = banner.to_string();
            self.write_line(&banner)?;
        }
        for line in self.game.opening() {
            self.write_line(&line)?;
        }

        let mut turns = 0u32;
        loop {
            let input = match self.game.pacing() {
                Pacing::Prompted(prompt) => {
                    write!(self.out, "{}", prompt).map_err(TidepoolError::OutputError)?;
                    self.out.flush().map_err(TidepoolError::OutputError)?;
                    match self.input.read_line().await? {
                        Some(line) => TurnInput::Line(line),
                        None => return Err(TidepoolError::InputClosed),
                    }
                }
                Pacing::Timed(delay) => {
                    tokio::time::sleep(delay).await;
                    TurnInput::Tick
                }
            };

            turns += 1;
            debug!("Starting turn {}", turns);

            let turn = self.game.step(&input, &self.rng);
            for line in &turn.narration {
                self.write_line(line)?;
            }

            if let Status::Finished { message } = turn.status {
                debug!("Session finished after {} turn(s)", turns);
                return Ok(SessionReport { turns, message });
            }
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).map_err(TidepoolError::OutputError)
    }
}
