//! Dice battle against the Kraken: highest roll draws blood.

use crate::config::DiceBattleConfig;
use crate::random::RandomSource;
use crate::session::{Game, Pacing, Turn, TurnInput};

const BANNER: &str = "Welcome to Kraken Dice Battle";
const PROMPT: &str = "Press Enter to roll your dice!";
const WIN: &str = "You defeated the Kraken!";
const LOSS: &str = "The Kraken drags you into the abyss.";

/// Outcome of comparing the two rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    PlayerHits,
    KrakenHits,
    Stalemate,
}

/// Compare two rolls; only a strict inequality scores a hit.
pub fn resolve_round(player_roll: i32, kraken_roll: i32) -> RoundResult {
    match player_roll.cmp(&kraken_roll) {
        std::cmp::Ordering::Greater => RoundResult::PlayerHits,
        std::cmp::Ordering::Less => RoundResult::KrakenHits,
        std::cmp::Ordering::Equal => RoundResult::Stalemate,
    }
}

/// Session state: both combatants' health and the table rules
#[derive(Debug, Clone)]
pub struct DiceBattle {
    player_health: i32,
    kraken_health: i32,
    damage: i32,
    die_sides: i32,
}

impl DiceBattle {
    /// Create a fresh battle from the given settings
    pub fn new(config: &DiceBattleConfig) -> Self {
        Self {
            player_health: config.starting_health,
            kraken_health: config.starting_health,
            damage: config.damage,
            die_sides: config.die_sides,
        }
    }

    /// Current health totals as (player, kraken)
    pub fn health(&self) -> (i32, i32) {
        (self.player_health, self.kraken_health)
    }

    fn is_over(&self) -> bool {
        self.player_health <= 0 || self.kraken_health <= 0
    }
}

impl Game for DiceBattle {
    fn banner(&self) -> Option<&str> {
        Some(BANNER)
    }

    fn pacing(&self) -> Pacing {
        Pacing::Prompted(PROMPT)
    }

    fn step(&mut self, _input: &TurnInput, rng: &dyn RandomSource) -> Turn {
        let player_roll = rng.random_range(1, self.die_sides);
        let kraken_roll = rng.random_range(1, self.die_sides);

        let blow = match resolve_round(player_roll, kraken_roll) {
            RoundResult::PlayerHits => {
                self.kraken_health -= self.damage;
                "You slashed the Kraken!"
            }
            RoundResult::KrakenHits => {
                self.player_health -= self.damage;
                "Kraken strikes back!"
            }
            RoundResult::Stalemate => "Stalemate.",
        };

        let narration = vec![
            format!("You rolled {} | Kraken rolled {}", player_roll, kraken_roll),
            blow.to_string(),
            format!("You: {} | Kraken: {}", self.player_health, self.kraken_health),
            String::new(),
        ];

        if self.is_over() {
            let message = if self.player_health > 0 { WIN } else { LOSS };
            Turn::finished(narration, message)
        } else {
            Turn::running(narration)
        }
    }
}
