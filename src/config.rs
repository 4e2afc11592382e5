use serde::{Deserialize, Serialize};

use crate::error::{Result, TidepoolError};

/// Bubble wrap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleWrapConfig {
    /// Number of bubbles on the sheet
    #[serde(default = "default_bubbles")]
    pub bubbles: usize,
}

fn default_bubbles() -> usize {
    20
}

impl Default for BubbleWrapConfig {
    fn default() -> Self {
        Self {
            bubbles: default_bubbles(),
        }
    }
}

/// Wetness oracle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WetnessConfig {
    /// Responses the oracle draws from
    #[serde(default = "default_responses")]
    pub responses: Vec<String>,
    /// Farewell printed when the player types the exit sentinel
    #[serde(default = "default_farewell")]
    pub farewell: String,
}

fn default_responses() -> Vec<String> {
    [
        "WET.",
        "Dry as the Sahara.",
        "Dripping.",
        "Depends... is it emotionally available?",
        "That’s a puddle in disguise.",
        "Moist? Ew. But yes.",
        "Ocean-certified.",
        "Water-resistant, but not emotionally.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_farewell() -> String {
    "Stay dry out there.".to_string()
}

impl Default for WetnessConfig {
    fn default() -> Self {
        Self {
            responses: default_responses(),
            farewell: default_farewell(),
        }
    }
}

/// Kraken dice battle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceBattleConfig {
    /// Health both sides start with
    #[serde(default = "default_starting_health")]
    pub starting_health: i32,
    /// Health lost by whoever rolls lower
    #[serde(default = "default_damage")]
    pub damage: i32,
    /// Number of sides on each die
    #[serde(default = "default_die_sides")]
    pub die_sides: i32,
}

fn default_starting_health() -> i32 {
    10
}

fn default_damage() -> i32 {
    2
}

fn default_die_sides() -> i32 {
    6
}

impl Default for DiceBattleConfig {
    fn default() -> Self {
        Self {
            starting_health: default_starting_health(),
            damage: default_damage(),
            die_sides: default_die_sides(),
        }
    }
}

/// Hangman settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Words the secret is drawn from
    #[serde(default = "default_words")]
    pub words: Vec<String>,
    /// Wrong guesses allowed before the reef bleaches
    #[serde(default = "default_lives")]
    pub lives: u32,
}

fn default_words() -> Vec<String> {
    ["coral", "plankton", "kraken", "jellyfish", "kelp", "seahorse"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_lives() -> u32 {
    6
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            words: default_words(),
            lives: default_lives(),
        }
    }
}

/// Turtle race settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurtleRaceConfig {
    /// Position at which a turtle has reached the seaweed
    #[serde(default = "default_finish_line")]
    pub finish_line: i32,
    /// Smallest stride a turtle can make per lap
    #[serde(default = "default_min_stride")]
    pub min_stride: i32,
    /// Largest stride a turtle can make per lap
    #[serde(default = "default_max_stride")]
    pub max_stride: i32,
    /// Real-time delay between laps, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_finish_line() -> i32 {
    20
}

fn default_min_stride() -> i32 {
    1
}

fn default_max_stride() -> i32 {
    3
}

fn default_tick_ms() -> u64 {
    500
}

impl Default for TurtleRaceConfig {
    fn default() -> Self {
        Self {
            finish_line: default_finish_line(),
            min_stride: default_min_stride(),
            max_stride: default_max_stride(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Main configuration for the tidepool games
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Bubble wrap settings
    #[serde(default)]
    pub bubble_wrap: BubbleWrapConfig,
    /// Wetness oracle settings
    #[serde(default)]
    pub wetness: WetnessConfig,
    /// Kraken dice battle settings
    #[serde(default)]
    pub dice_battle: DiceBattleConfig,
    /// Hangman settings
    #[serde(default)]
    pub hangman: HangmanConfig,
    /// Turtle race settings
    #[serde(default)]
    pub turtle_race: TurtleRaceConfig,
}

impl GamesConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TidepoolError::ConfigError(e.to_string()))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| TidepoolError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that every game has a playable setup
    pub fn validate(&self) -> Result<()> {
        if self.bubble_wrap.bubbles == 0 {
            return Err(TidepoolError::ConfigError(
                "bubble_wrap.bubbles must be at least 1".to_string(),
            ));
        }
        if self.wetness.responses.is_empty() {
            return Err(TidepoolError::ConfigError(
                "wetness.responses must not be empty".to_string(),
            ));
        }
        if self.dice_battle.starting_health < 1 {
            return Err(TidepoolError::ConfigError(
                "dice_battle.starting_health must be at least 1".to_string(),
            ));
        }
        if self.dice_battle.damage < 1 {
            return Err(TidepoolError::ConfigError(
                "dice_battle.damage must be at least 1".to_string(),
            ));
        }
        if self.dice_battle.die_sides < 1 {
            return Err(TidepoolError::ConfigError(
                "dice_battle.die_sides must be at least 1".to_string(),
            ));
        }
        if self.hangman.words.is_empty() || self.hangman.words.iter().any(|w| w.is_empty()) {
            return Err(TidepoolError::ConfigError(
                "hangman.words must be a non-empty list of non-empty words".to_string(),
            ));
        }
        if self.hangman.lives == 0 {
            return Err(TidepoolError::ConfigError(
                "hangman.lives must be at least 1".to_string(),
            ));
        }
        if self.turtle_race.finish_line < 1 {
            return Err(TidepoolError::ConfigError(
                "turtle_race.finish_line must be at least 1".to_string(),
            ));
        }
        if self.turtle_race.min_stride < 1
            || self.turtle_race.max_stride < self.turtle_race.min_stride
        {
            return Err(TidepoolError::ConfigError(
                "turtle_race strides must satisfy 1 <= min_stride <= max_stride".to_string(),
            ));
        }
        Ok(())
    }
}
