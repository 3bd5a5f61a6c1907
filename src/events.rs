//! Game event system for decoupled communication with the presentation layer.
//!
//! The core pushes events while it mutates the board; the engine drains them
//! once per call and hands them to whatever [`crate::presentation::Presentation`]
//! the host installed.

use hecs::Entity;

use crate::components::Position;

/// Sound effects the core may ask the host to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundClip {
    Footstep1,
    Footstep2,
    Chop1,
    Chop2,
    EnemyAttack1,
    EnemyAttack2,
    Eat1,
    Eat2,
    Drink1,
    Drink2,
    GameOver,
}

/// Game events emitted by the core
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A level was generated and its overlay should go up
    LevelStarted { level: u32 },
    /// The overlay delay elapsed; the controlled entity may act
    SetupFinished { level: u32 },
    /// An entity accepted a one-cell move and began interpolating
    MoveStarted {
        entity: Entity,
        from: Position,
        to: Position,
        by_player: bool,
    },
    /// An interpolation snapped onto its target cell
    MoveFinished { entity: Entity, at: Position },
    /// The controlled entity chopped a wall that is still standing
    WallChopped { wall: Entity, hp_left: i32 },
    /// A wall ran out of hit points and was removed
    WallDestroyed { wall: Entity, at: Position },
    /// An autonomous entity bit the controlled entity
    PlayerBitten {
        enemy: Entity,
        damage: i32,
        food_left: i32,
    },
    /// The controlled entity picked up food
    FoodCollected {
        amount: i32,
        food_left: i32,
        sounds: (SoundClip, SoundClip),
    },
    /// The controlled entity stepped onto the exit
    ExitReached { level: u32 },
    /// Autonomous entities are about to move
    RoundStarted { autonomous: usize },
    /// Every autonomous entity has had its move
    RoundFinished,
    /// The controlled entity's food reached zero
    GameOver { level: u32 },
}

/// Events raised during one engine call, in the order they happened.
///
/// Systems only push; `GameEngine` drains the queue into the presentation
/// at the end of every `tick` and `attempt_player_move`.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Hand over everything raised so far, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.pending.drain(..)
    }

    /// Look at pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter()
    }
}
