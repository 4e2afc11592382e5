//! Two turtles race to the seaweed; nobody steers.

use std::time::Duration;

use crate::config::TurtleRaceConfig;
use crate::random::RandomSource;
use crate::session::{Game, Pacing, Turn, TurnInput};

const BANNER: &str = "Welcome to Turtle Race! First to the seaweed wins";
const TURTLE_ONE_MARKER: &str = "XXX";
const TURTLE_TWO_MARKER: &str = ">>>";

/// Final standings once a turtle is at or past the seaweed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceOutcome {
    TurtleOneWins,
    TurtleTwoWins,
    Tie,
}

/// Judge the race. Call only when at least one turtle reached the line.
pub fn judge(turtle_one: i32, turtle_two: i32, finish_line: i32) -> RaceOutcome {
    if turtle_one >= finish_line && turtle_two >= finish_line {
        RaceOutcome::Tie
    } else if turtle_one >= finish_line {
        RaceOutcome::TurtleOneWins
    } else {
        RaceOutcome::TurtleTwoWins
    }
}

/// Session state: both turtles' positions and the course parameters
#[derive(Debug, Clone)]
pub struct TurtleRace {
    turtle_one: i32,
    turtle_two: i32,
    finish_line: i32,
    min_stride: i32,
    max_stride: i32,
    tick: Duration,
}

impl TurtleRace {
    /// Line both turtles up at the start of the given course
    pub fn new(config: &TurtleRaceConfig) -> Self {
        Self {
            turtle_one: 0,
            turtle_two: 0,
            finish_line: config.finish_line,
            min_stride: config.min_stride,
            max_stride: config.max_stride,
            tick: Duration::from_millis(config.tick_ms),
        }
    }

    /// Current positions as (turtle one, turtle two)
    pub fn positions(&self) -> (i32, i32) {
        (self.turtle_one, self.turtle_two)
    }

    fn track_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Turtle 1: {}",
                TURTLE_ONE_MARKER.repeat(self.turtle_one as usize)
            ),
            format!(
                "Turtle 2: {}",
                TURTLE_TWO_MARKER.repeat(self.turtle_two as usize)
            ),
            "-".repeat(30),
        ]
    }
}

impl Game for TurtleRace {
    fn banner(&self) -> Option<&str> {
        Some(BANNER)
    }

    fn opening(&self) -> Vec<String> {
        vec![String::new()]
    }

    fn pacing(&self) -> Pacing {
        Pacing::Timed(self.tick)
    }

    fn step(&mut self, _input: &TurnInput, rng: &dyn RandomSource) -> Turn {
        self.turtle_one += rng.random_range(self.min_stride, self.max_stride);
        self.turtle_two += rng.random_range(self.min_stride, self.max_stride);

        let narration = self.track_lines();

        if self.turtle_one >= self.finish_line || self.turtle_two >= self.finish_line {
            let message = match judge(self.turtle_one, self.turtle_two, self.finish_line) {
                RaceOutcome::Tie => "It's a tie!",
                RaceOutcome::TurtleOneWins => "Turtle 1 wins!",
                RaceOutcome::TurtleTwoWins => "Turtle 2 wins!",
            };
            Turn::finished(narration, message)
        } else {
            Turn::running(narration)
        }
    }
}
