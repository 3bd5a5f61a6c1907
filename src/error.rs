//! Error type shared by level generation, movement, and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::spawning::ObjectCategory;

/// Failures that abort an operation without touching game state.
///
/// Blocked moves are not errors: an obstruction without an interactable
/// capability is reported through [`crate::systems::motion::MoveOutcome`].
#[derive(Debug, Error)]
pub enum GameError {
    /// More cells were requested from the position pool than it holds.
    #[error("position pool exhausted: requested {requested} cells but only {available} remain")]
    PoolExhausted { requested: usize, available: usize },

    /// A move request that is not a unit step along exactly one axis.
    #[error("invalid move direction ({dx}, {dy}): exactly one axis must be +/-1")]
    InvalidDirection { dx: i32, dy: i32 },

    /// A count range whose minimum exceeds its maximum.
    #[error("count range [{min}, {max}] is inverted")]
    InvalidCountRange { min: u32, max: u32 },

    /// Board too small to have an interior.
    #[error("board must be at least 3x3, got {columns}x{rows}")]
    BoardTooSmall { columns: i32, rows: i32 },

    /// Move times must be positive; delays must not be negative.
    #[error("invalid {field}: {value}")]
    InvalidTiming { field: &'static str, value: f32 },

    /// A placeable category was configured without any variants.
    #[error("no variants configured for {0}")]
    EmptyCategory(ObjectCategory),

    /// The entity is gone or lacks a `Position`/`Mover`.
    #[error("entity {0:?} cannot move")]
    NotAMover(hecs::Entity),

    /// Levels are numbered from 1.
    #[error("level numbers start at 1")]
    InvalidLevel,

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
