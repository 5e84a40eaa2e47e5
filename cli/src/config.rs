use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::{Difficulty, Mark};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.yaml";
const MAX_ARENA_ROUNDS: u32 = 1_000_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CliConfig {
    pub play: PlayConfig,
    pub arena: ArenaConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PlayConfig {
    pub difficulty: Difficulty,
    pub player_mark: Mark,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Expert,
            player_mark: Mark::X,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    pub rounds: u32,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            x_difficulty: Difficulty::Expert,
            o_difficulty: Difficulty::Hard,
            rounds: 100,
            seed: None,
        }
    }
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 || self.rounds > MAX_ARENA_ROUNDS {
            return Err(format!(
                "arena.rounds must be between 1 and {}, got {}",
                MAX_ARENA_ROUNDS, self.rounds
            ));
        }
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        self.arena.validate()
    }
}
