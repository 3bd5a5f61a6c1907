//! Board layout constants.

/// Default number of board columns
pub const BOARD_DEFAULT_COLUMNS: i32 = 8;
/// Default number of board rows
pub const BOARD_DEFAULT_ROWS: i32 = 8;
/// Smallest board that still has an interior ring for the position pool
pub const BOARD_MIN_SIZE: i32 = 3;

/// Lower bound for inner walls per level
pub const WALL_COUNT_MIN: u32 = 5;
/// Upper bound for inner walls per level
pub const WALL_COUNT_MAX: u32 = 9;
/// Lower bound for food pickups per level
pub const FOOD_COUNT_MIN: u32 = 1;
/// Upper bound for food pickups per level
pub const FOOD_COUNT_MAX: u32 = 5;

/// Cell the controlled entity spawns on at the start of every level
pub const PLAYER_START: (i32, i32) = (0, 0);
