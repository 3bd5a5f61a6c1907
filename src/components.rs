use glam::Vec2;

use crate::error::{GameError, Result};
use crate::events::SoundClip;

/// Position component - logical cell the entity occupies (and collides on)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Where the entity is drawn; trails `Position` while a move interpolates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualPosition {
    pub pos: Vec2,
}

impl VisualPosition {
    pub fn from_position(pos: &Position) -> Self {
        Self { pos: pos.as_vec2() }
    }
}

/// A one-cell step along a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Validate a raw `(dx, dy)` request. Diagonals, zero vectors and
    /// multi-cell steps are rejected.
    pub fn from_delta(dx: i32, dy: i32) -> Result<Self> {
        match (dx, dy) {
            (0, 1) => Ok(Direction::Up),
            (0, -1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection { dx, dy }),
        }
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// The controlled entity's resource; the game ends when it reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodPoints {
    pub current: i32,
}

impl FoodPoints {
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

/// Capability: autonomous entities that bump into this bite it
#[derive(Debug, Clone, Copy)]
pub struct Attackable;

/// Capability: the controlled entity chops this down when it bumps into it
#[derive(Debug, Clone, Copy)]
pub struct Breakable {
    pub hp: i32,
}

impl Breakable {
    pub fn new(hp: i32) -> Self {
        Self { hp }
    }

    /// Apply damage, returning true once the wall is gone.
    pub fn damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        self.hp <= 0
    }
}

/// Food lying on the board, collected by stepping onto it
#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    pub food: i32,
    pub sounds: (SoundClip, SoundClip),
}

/// Marks the exit cell; stepping onto it ends the level
#[derive(Debug, Clone, Copy)]
pub struct Exit;

/// Collision layers an entity can live on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// Walls, outer walls, and every actor
    Blocking,
    /// Pickups and the exit; never obstruct a move
    Items,
}

impl CollisionLayer {
    fn bit(self) -> u32 {
        match self {
            CollisionLayer::Blocking => 1 << 0,
            CollisionLayer::Items => 1 << 1,
        }
    }
}

/// Set of collision layers a mover's sweep tests against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(u32);

impl LayerMask {
    pub const BLOCKING: LayerMask = LayerMask(1 << 0);

    pub fn contains(&self, layer: CollisionLayer) -> bool {
        self.0 & layer.bit() != 0
    }
}

/// Collision volume occupying the entity's cell
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub layer: CollisionLayer,
    pub enabled: bool,
}

impl Collider {
    pub fn new(layer: CollisionLayer) -> Self {
        Self {
            layer,
            enabled: true,
        }
    }
}

/// Collision-response policy, chosen when the entity is spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverKind {
    /// Player-driven; chops `Breakable` obstructions
    Controlled { wall_damage: i32 },
    /// Turn-driven; bites `Attackable` obstructions
    Autonomous { food_damage: i32 },
}

/// Anything that moves one cell at a time
#[derive(Debug, Clone, Copy)]
pub struct Mover {
    pub move_time: f32,
    pub inverse_move_time: f32,
    pub blocking_mask: LayerMask,
    pub kind: MoverKind,
}

impl Mover {
    pub fn new(move_time: f32, blocking_mask: LayerMask, kind: MoverKind) -> Self {
        Self {
            move_time,
            inverse_move_time: 1.0 / move_time,
            blocking_mask,
            kind,
        }
    }
}

/// In-flight interpolation toward a cell centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub target: Vec2,
}

/// Autonomous entity state
#[derive(Debug, Clone, Copy, Default)]
pub struct Autonomous {
    /// Set after a move; the entity sits out its next turn
    pub skip_move: bool,
}
