//! Game systems organized by domain.
//!
//! - `motion`: the shared one-cell move with collision detection
//! - `animation`: interpolation of visual positions toward logical cells
//! - `player`: controlled-entity turns (food cost, pickups, exit)
//! - `ai`: autonomous-entity turns

pub mod ai;
pub mod animation;
pub mod motion;
pub mod player;

pub use animation::advance_motions;
pub use motion::{attempt_move, MoveOutcome};
pub use player::{player_move, PlayerTurn};
