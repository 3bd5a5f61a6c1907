//! Tunable game configuration, loadable from JSON.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{GameError, Result};

/// Closed integer interval `[min, max]` bounding how many objects of a
/// category are spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Zero-width range that always yields `count`.
    pub fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(GameError::InvalidCountRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Draw a count uniformly from the inclusive range.
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Everything a session needs to lay out boards and pace turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width; playable cells are `0..columns`
    pub columns: i32,
    /// Board height; playable cells are `0..rows`
    pub rows: i32,
    pub wall_count: CountRange,
    pub food_count: CountRange,

    /// Food the controlled entity starts the first level with
    pub starting_food: i32,
    /// Food spent per accepted controlled move
    pub food_per_move: i32,
    /// Damage dealt to a breakable wall per chop
    pub wall_damage: i32,

    /// Seconds the level overlay stays up before the first turn
    pub level_start_delay: f32,
    /// Seconds before autonomous entities start moving each round
    pub turn_delay: f32,
    /// Seconds between reaching the exit and loading the next level
    pub restart_level_delay: f32,
    pub player_move_time: f32,
    pub enemy_move_time: f32,
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns < BOARD_MIN_SIZE || self.rows < BOARD_MIN_SIZE {
            return Err(GameError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }
        self.wall_count.validate()?;
        self.food_count.validate()?;

        for (field, value) in [
            ("player_move_time", self.player_move_time),
            ("enemy_move_time", self.enemy_move_time),
        ] {
            if !(value > 0.0) {
                return Err(GameError::InvalidTiming { field, value });
            }
        }
        for (field, value) in [
            ("level_start_delay", self.level_start_delay),
            ("turn_delay", self.turn_delay),
            ("restart_level_delay", self.restart_level_delay),
        ] {
            if !(value >= 0.0) {
                return Err(GameError::InvalidTiming { field, value });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: BOARD_DEFAULT_COLUMNS,
            rows: BOARD_DEFAULT_ROWS,
            wall_count: CountRange {
                min: WALL_COUNT_MIN,
                max: WALL_COUNT_MAX,
            },
            food_count: CountRange {
                min: FOOD_COUNT_MIN,
                max: FOOD_COUNT_MAX,
            },
            starting_food: PLAYER_STARTING_FOOD,
            food_per_move: FOOD_PER_MOVE,
            wall_damage: PLAYER_WALL_DAMAGE,
            level_start_delay: LEVEL_START_DELAY,
            turn_delay: TURN_DELAY,
            restart_level_delay: RESTART_LEVEL_DELAY,
            player_move_time: PLAYER_MOVE_TIME,
            enemy_move_time: ENEMY_MOVE_TIME,
        }
    }
}
