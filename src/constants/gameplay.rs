//! Core gameplay constants (food economy, damage).

/// Food the controlled entity starts a fresh game with
pub const PLAYER_STARTING_FOOD: i32 = 100;
/// Food spent on every accepted controlled move
pub const FOOD_PER_MOVE: i32 = 1;
/// Damage the controlled entity deals to a wall per chop
pub const PLAYER_WALL_DAMAGE: i32 = 1;
/// Hit points of an inner wall
pub const WALL_HP: i32 = 3;

/// Food restored by a food pickup
pub const POINTS_PER_FOOD: i32 = 10;
/// Food restored by a soda pickup
pub const POINTS_PER_SODA: i32 = 20;

/// Food taken by the weaker enemy variant
pub const ENEMY_WEAK_DAMAGE: i32 = 10;
/// Food taken by the stronger enemy variant
pub const ENEMY_STRONG_DAMAGE: i32 = 20;
