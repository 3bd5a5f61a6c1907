//! Data-driven object spawning.
//!
//! Every placeable category has a set of interchangeable variants; level
//! generation picks one uniformly per placement and spawns it here.

use std::fmt;

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{
    Attackable, Autonomous, Breakable, Collider, CollisionLayer, Exit, FoodPoints, LayerMask,
    Mover, MoverKind, Pickup, Player, Position, VisualPosition,
};
use crate::error::{GameError, Result};
use crate::events::SoundClip;

/// Categories the level generator places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectCategory {
    Wall,
    Food,
    Enemy,
    Exit,
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectCategory::Wall => "walls",
            ObjectCategory::Food => "food",
            ObjectCategory::Enemy => "enemies",
            ObjectCategory::Exit => "exit",
        };
        f.write_str(name)
    }
}

/// Which variant an entity was spawned from (for the renderer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefab {
    pub category: ObjectCategory,
    pub name: &'static str,
}

/// Definition of an inner wall variant
#[derive(Debug, Clone, Copy)]
pub struct WallDef {
    pub name: &'static str,
    pub hp: i32,
}

impl WallDef {
    pub fn spawn(&self, world: &mut World, pos: Position) -> Entity {
        world.spawn((
            pos,
            VisualPosition::from_position(&pos),
            Collider::new(CollisionLayer::Blocking),
            Breakable::new(self.hp),
            Prefab {
                category: ObjectCategory::Wall,
                name: self.name,
            },
        ))
    }
}

/// Definition of a food pickup variant
#[derive(Debug, Clone, Copy)]
pub struct FoodDef {
    pub name: &'static str,
    pub points: i32,
    pub sounds: (SoundClip, SoundClip),
}

impl FoodDef {
    pub fn spawn(&self, world: &mut World, pos: Position) -> Entity {
        world.spawn((
            pos,
            VisualPosition::from_position(&pos),
            Collider::new(CollisionLayer::Items),
            Pickup {
                food: self.points,
                sounds: self.sounds,
            },
            Prefab {
                category: ObjectCategory::Food,
                name: self.name,
            },
        ))
    }
}

/// Definition of an enemy type - all the data needed to spawn one
#[derive(Debug, Clone, Copy)]
pub struct EnemyDef {
    pub name: &'static str,
    /// Food taken from the controlled entity per bite
    pub food_damage: i32,
}

impl EnemyDef {
    pub fn spawn(&self, world: &mut World, pos: Position, move_time: f32) -> Entity {
        world.spawn((
            pos,
            VisualPosition::from_position(&pos),
            Collider::new(CollisionLayer::Blocking),
            Mover::new(
                move_time,
                LayerMask::BLOCKING,
                MoverKind::Autonomous {
                    food_damage: self.food_damage,
                },
            ),
            Autonomous::default(),
            Prefab {
                category: ObjectCategory::Enemy,
                name: self.name,
            },
        ))
    }
}

pub fn spawn_exit(world: &mut World, pos: Position) -> Entity {
    world.spawn((
        pos,
        VisualPosition::from_position(&pos),
        Collider::new(CollisionLayer::Items),
        Exit,
        Prefab {
            category: ObjectCategory::Exit,
            name: "Exit",
        },
    ))
}

pub fn spawn_player(
    world: &mut World,
    pos: Position,
    food: i32,
    move_time: f32,
    wall_damage: i32,
) -> Entity {
    world.spawn((
        Player,
        pos,
        VisualPosition::from_position(&pos),
        Collider::new(CollisionLayer::Blocking),
        Mover::new(
            move_time,
            LayerMask::BLOCKING,
            MoverKind::Controlled { wall_damage },
        ),
        FoodPoints::new(food),
        Attackable,
    ))
}

/// Predefined wall variants
pub mod walls {
    use super::WallDef;
    use crate::constants::WALL_HP;

    pub const CRATES: WallDef = WallDef {
        name: "Crates",
        hp: WALL_HP,
    };
    pub const RUBBLE: WallDef = WallDef {
        name: "Rubble",
        hp: WALL_HP,
    };
    pub const BARREL: WallDef = WallDef {
        name: "Barrel",
        hp: WALL_HP,
    };
    pub const CACTUS: WallDef = WallDef {
        name: "Cactus",
        hp: WALL_HP,
    };
}

/// Predefined food variants
pub mod foods {
    use super::FoodDef;
    use crate::constants::{POINTS_PER_FOOD, POINTS_PER_SODA};
    use crate::events::SoundClip;

    pub const FOOD: FoodDef = FoodDef {
        name: "Food",
        points: POINTS_PER_FOOD,
        sounds: (SoundClip::Eat1, SoundClip::Eat2),
    };
    pub const SODA: FoodDef = FoodDef {
        name: "Soda",
        points: POINTS_PER_SODA,
        sounds: (SoundClip::Drink1, SoundClip::Drink2),
    };
}

/// Predefined enemy types
pub mod enemies {
    use super::EnemyDef;
    use crate::constants::{ENEMY_STRONG_DAMAGE, ENEMY_WEAK_DAMAGE};

    pub const ZOMBIE: EnemyDef = EnemyDef {
        name: "Zombie",
        food_damage: ENEMY_WEAK_DAMAGE,
    };
    pub const VAMPIRE: EnemyDef = EnemyDef {
        name: "Vampire",
        food_damage: ENEMY_STRONG_DAMAGE,
    };
}

/// The variant sets level generation draws from
#[derive(Debug, Clone)]
pub struct Palette {
    pub walls: Vec<WallDef>,
    pub foods: Vec<FoodDef>,
    pub enemies: Vec<EnemyDef>,
}

impl Palette {
    pub fn choose_wall(&self, rng: &mut impl Rng) -> Result<WallDef> {
        choose(&self.walls, ObjectCategory::Wall, rng)
    }

    pub fn choose_food(&self, rng: &mut impl Rng) -> Result<FoodDef> {
        choose(&self.foods, ObjectCategory::Food, rng)
    }

    pub fn choose_enemy(&self, rng: &mut impl Rng) -> Result<EnemyDef> {
        choose(&self.enemies, ObjectCategory::Enemy, rng)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            walls: vec![walls::CRATES, walls::RUBBLE, walls::BARREL, walls::CACTUS],
            foods: vec![foods::FOOD, foods::SODA],
            enemies: vec![enemies::ZOMBIE, enemies::VAMPIRE],
        }
    }
}

fn choose<T: Copy>(variants: &[T], category: ObjectCategory, rng: &mut impl Rng) -> Result<T> {
    variants
        .choose(rng)
        .copied()
        .ok_or(GameError::EmptyCategory(category))
}
