//! The wetness oracle: name an object, learn whether it is wet.

use crate::config::WetnessConfig;
use crate::random::RandomSource;
use crate::session::{Game, Pacing, Turn, TurnInput};

const PROMPT: &str = "Enter an object to check if it's wet (or type 'exit'): ";
const EXIT_SENTINEL: &str = "exit";

/// Session state: the oracle's response set and its parting words
#[derive(Debug, Clone)]
pub struct WetnessQuiz {
    responses: Vec<String>,
    farewell: String,
}

/// Whether the normalized input ends the session.
///
/// Checked before any response is drawn, so quitting never consumes a draw.
pub fn is_exit(item: &str) -> bool {
    item == EXIT_SENTINEL
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl WetnessQuiz {
    /// Create an oracle from the given settings
    pub fn new(config: &WetnessConfig) -> Self {
        Self {
            responses: config.responses.clone(),
            farewell: config.farewell.clone(),
        }
    }
}

impl Game for WetnessQuiz {
    fn pacing(&self) -> Pacing {
        Pacing::Prompted(PROMPT)
    }

    fn step(&mut self, input: &TurnInput, rng: &dyn RandomSource) -> Turn {
        let item = match input {
            TurnInput::Line(line) => line.trim().to_lowercase(),
            TurnInput::Tick => String::new(),
        };

        if is_exit(&item) {
            return Turn::finished(Vec::new(), self.farewell.clone());
        }

        let response = &self.responses[rng.pick_index(self.responses.len())];
        Turn::running(vec![
            format!("{} → {}", capitalize(&item), response),
            String::new(),
        ])
    }
}
