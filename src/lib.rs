//! Turn-based grid crawler core.
//!
//! A controlled entity and a set of autonomous entities take turns moving
//! one cell at a time on a bounded grid. Motion is validated by a linecast
//! against blocking colliders and then interpolated over a fixed duration.
//! Levels are generated procedurally from a pool of free interior cells.
//!
//! Hosts drive everything through [`GameEngine`]: forward move requests with
//! [`GameEngine::attempt_player_move`] and elapsed time with
//! [`GameEngine::tick`], and receive sounds and overlays through a
//! [`Presentation`] implementation.

pub mod board_gen;
pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod grid;
pub mod linecast;
pub mod position_pool;
pub mod presentation;
pub mod spawning;
pub mod systems;
pub mod tile;
pub mod turn_scheduler;

pub use config::{CountRange, GameConfig};
pub use engine::{GameEngine, GameState, TurnResult};
pub use error::{GameError, Result};
pub use events::{GameEvent, SoundClip};
pub use presentation::{NullPresentation, Presentation};
pub use turn_scheduler::{TurnPhase, TurnState};
