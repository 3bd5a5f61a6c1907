//! Turn pacing constants (seconds of simulated time).

/// How long the "Day N" overlay blocks input before the first turn
pub const LEVEL_START_DELAY: f32 = 2.0;
/// Pause before autonomous entities start moving each round
pub const TURN_DELAY: f32 = 0.1;
/// Pause between reaching the exit and generating the next level
pub const RESTART_LEVEL_DELAY: f32 = 1.0;
/// Time the controlled entity takes to cross one cell
pub const PLAYER_MOVE_TIME: f32 = 0.1;
/// Time an autonomous entity takes to cross one cell
pub const ENEMY_MOVE_TIME: f32 = 0.1;
/// Squared distance below which an interpolation snaps to its target
pub const ARRIVAL_EPSILON_SQ: f32 = f32::EPSILON;
