use serde::{Deserialize, Serialize};

use super::board::DEFAULT_BOARD_SIZE;
use super::evaluator::DEFAULT_TARGET_VALUE;
use super::spawner::{DEFAULT_FOUR_PROBABILITY, Spawner};
use crate::config::Validate;

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 10;
pub const MIN_TARGET_VALUE: u32 = 8;
pub const DEFAULT_BEST_SCORE_FILE: &str = "puzzle2048_best_score.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub target_value: u32,
    pub four_probability: f64,
    pub best_score_file: String,
}

impl GameConfig {
    pub fn spawner(&self) -> Spawner {
        Spawner::new(self.four_probability)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        if self.target_value < MIN_TARGET_VALUE {
            return Err(format!(
                "Target value must be at least {}, got {}",
                MIN_TARGET_VALUE, self.target_value
            ));
        }
        if !self.target_value.is_power_of_two() {
            return Err(format!(
                "Target value must be a power of 2, got {}",
                self.target_value
            ));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(format!(
                "Four probability must be between 0 and 1, got {}",
                self.four_probability
            ));
        }
        if self.best_score_file.is_empty() {
            return Err("Best score file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            target_value: DEFAULT_TARGET_VALUE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            best_score_file: DEFAULT_BEST_SCORE_FILE.to_string(),
        }
    }
}
