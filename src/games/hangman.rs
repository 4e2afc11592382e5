//! Ocean hangman: guess the word before the coral bleaches.

use crate::config::HangmanConfig;
use crate::random::RandomSource;
use crate::session::{Game, Pacing, Turn, TurnInput};

const BANNER: &str = "Welcome to Ocean Hangman";
const PROMPT: &str = "Guess a letter: ";

/// Session state: the secret word, its reveal mask and the lives counter
#[derive(Debug, Clone)]
pub struct Hangman {
    word: String,
    letters: Vec<char>,
    revealed: Vec<bool>,
    lives: u32,
}

/// Normalize a typed guess down to a single letter.
///
/// Anything that is not exactly one character after trimming and lowercasing
/// (empty lines included) yields `None` and counts as a miss.
pub fn parse_guess(line: &str) -> Option<char> {
    let normalized = line.trim().to_lowercase();
    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Reveal every position of `guess` in the word. Returns whether any matched.
pub fn apply_guess(letters: &[char], revealed: &mut [bool], guess: char) -> bool {
    let mut hit = false;
    for (i, letter) in letters.iter().enumerate() {
        if *letter == guess {
            revealed[i] = true;
            hit = true;
        }
    }
    hit
}

fn masked(letters: &[char], revealed: &[bool]) -> String {
    let shown: Vec<String> = letters
        .iter()
        .zip(revealed)
        .map(|(letter, shown)| {
            if *shown {
                letter.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect();
    shown.join(" ")
}

impl Hangman {
    /// Create a new round, drawing the secret uniformly from the word list.
    ///
    /// The word list must be non-empty; `GamesConfig::validate` guarantees
    /// that for configs loaded through the normal path.
    pub fn new(config: &HangmanConfig, rng: &dyn RandomSource) -> Self {
        let word = config.words[rng.pick_index(config.words.len())].clone();
        let letters: Vec<char> = word.chars().collect();
        let revealed = vec![false; letters.len()];
        Self {
            word,
            letters,
            revealed,
            lives: config.lives,
        }
    }

    /// The masked word as shown to the player
    pub fn revealed_word(&self) -> String {
        masked(&self.letters, &self.revealed)
    }

    /// Remaining lives
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Whether every position is revealed
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    fn word_line(&self) -> Vec<String> {
        vec![String::new(), format!("Word: {}", self.revealed_word())]
    }
}

impl Game for Hangman {
    fn banner(&self) -> Option<&str> {
        Some(BANNER)
    }

    fn opening(&self) -> Vec<String> {
        self.word_line()
    }

    fn pacing(&self) -> Pacing {
        Pacing::Prompted(PROMPT)
    }

    fn step(&mut self, input: &TurnInput, _rng: &dyn RandomSource) -> Turn {
        let guess = match input {
            TurnInput::Line(line) => parse_guess(line),
            TurnInput::Tick => None,
        };

        let hit = match guess {
            Some(c) => apply_guess(&self.letters, &mut self.revealed, c),
            None => false,
        };

        let feedback = if hit {
            "Correct!".to_string()
        } else {
            self.lives = self.lives.saturating_sub(1);
            format!(
                "Wrong! Coral stress level rising... {} lives left",
                self.lives
            )
        };

        if self.is_solved() {
            return Turn::finished(
                vec![feedback],
                format!("You saved the reef! Word was: {}", self.word),
            );
        }
        if self.lives == 0 {
            return Turn::finished(
                vec![feedback],
                format!("Coral bleaching complete. Word was: {}", self.word),
            );
        }

        let mut narration = vec![feedback];
        narration.extend(self.word_line());
        Turn::running(narration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;
    use crate::session::Status;

    fn round_with_word(word: &str, lives: u32) -> Hangman {
        let config = HangmanConfig {
            words: vec![word.to_string()],
            lives,
        };
        Hangman::new(&config, &FixedRandom::constant(0))
    }

    fn guess(letter: &str) -> TurnInput {
        TurnInput::Line(letter.to_string())
    }

    #[test]
    fn test_parse_guess_normalizes_case_and_whitespace() {
        assert_eq!(parse_guess("K"), Some('k'));
        assert_eq!(parse_guess("  r  "), Some('r'));
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("rk"), None);
    }

    #[test]
    fn test_secret_is_drawn_from_the_word_list() {
        let config = HangmanConfig {
            words: vec!["coral".to_string(), "kelp".to_string()],
            lives: 6,
        };
        let round = Hangman::new(&config, &FixedRandom::constant(1));
        assert_eq!(round.revealed_word(), "_ _ _ _");
    }

    #[test]
    fn test_hit_reveals_every_matching_position() {
        let mut round = round_with_word("seahorse", 6);
        let rng = FixedRandom::constant(0);

        let turn = round.step(&guess("s"), &rng);
        assert_eq!(round.revealed_word(), "s _ _ _ _ _ s _");
        assert_eq!(round.lives(), 6);
        assert_eq!(turn.narration[0], "Correct!");
    }

    #[test]
    fn test_miss_costs_one_life_and_reveals_nothing() {
        let mut round = round_with_word("kelp", 6);
        let rng = FixedRandom::constant(0);

        let turn = round.step(&guess("z"), &rng);
        assert_eq!(round.revealed_word(), "_ _ _ _");
        assert_eq!(round.lives(), 5);
        assert_eq!(
            turn.narration[0],
            "Wrong! Coral stress level rising... 5 lives left"
        );
    }

    #[test]
    fn test_empty_and_multichar_input_are_just_misses() {
        let mut round = round_with_word("kelp", 6);
        let rng = FixedRandom::constant(0);

        round.step(&guess(""), &rng);
        round.step(&guess("elp"), &rng);
        assert_eq!(round.lives(), 4);
        assert_eq!(round.revealed_word(), "_ _ _ _");
    }

    #[test]
    fn test_reveal_is_monotonic_under_repeated_guesses() {
        let mut round = round_with_word("kelp", 6);
        let rng = FixedRandom::constant(0);

        round.step(&guess("k"), &rng);
        let after_first = round.revealed_word();
        round.step(&guess("k"), &rng);
        assert_eq!(round.revealed_word(), after_first);
        assert_eq!(round.lives(), 6);
    }

    #[test]
    fn test_solving_the_word_wins_and_discloses_it() {
        let mut round = round_with_word("kelp", 6);
        let rng = FixedRandom::constant(0);

        round.step(&guess("k"), &rng);
        round.step(&guess("e"), &rng);
        round.step(&guess("l"), &rng);
        let turn = round.step(&guess("p"), &rng);

        assert!(round.is_solved());
        assert_eq!(turn.narration, vec!["Correct!".to_string()]);
        assert_eq!(
            turn.status,
            Status::Finished {
                message: "You saved the reef! Word was: kelp".to_string()
            }
        );
    }

    #[test]
    fn test_running_out_of_lives_loses_and_discloses_the_word() {
        let mut round = round_with_word("kelp", 2);
        let rng = FixedRandom::constant(0);

        let turn = round.step(&guess("z"), &rng);
        assert_eq!(turn.status, Status::Running);
        let turn = round.step(&guess("q"), &rng);
        assert_eq!(
            turn.status,
            Status::Finished {
                message: "Coral bleaching complete. Word was: kelp".to_string()
            }
        );
    }

    #[test]
    fn test_running_turns_end_with_the_word_display() {
        let mut round = round_with_word("kelp", 6);
        let rng = FixedRandom::constant(0);

        let turn = round.step(&guess("k"), &rng);
        assert_eq!(
            turn.narration,
            vec![
                "Correct!".to_string(),
                String::new(),
                "Word: k _ _ _".to_string(),
            ]
        );
    }
}
