//! One-cell moves with collision detection.
//!
//! Every mover goes through [`attempt_move`]: sweep from the current cell to
//! the neighbouring one, and either start interpolating toward it or hand the
//! obstruction to the mover's collision-response policy.

use hecs::{Entity, World};
use log::debug;

use crate::components::{
    Attackable, Breakable, Collider, Direction, FoodPoints, Motion, Mover, MoverKind, Position,
    VisualPosition,
};
use crate::error::{GameError, Result};
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::linecast::{linecast, Obstruction};
use crate::systems::animation;

/// The result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Path was clear; the entity now occupies `to` and is interpolating there
    Moved { from: Position, to: Position },
    /// Blocked by something the mover's policy reacts to; the reaction ran
    Interacted { with: Entity },
    /// Blocked by something without an interactable capability; nothing happened
    Blocked(Obstruction),
}

impl MoverKind {
    /// Does `obstruction` expose the capability this kind reacts to?
    pub fn can_interact(&self, world: &World, obstruction: Entity) -> bool {
        match self {
            MoverKind::Controlled { .. } => world.get::<&Breakable>(obstruction).is_ok(),
            MoverKind::Autonomous { .. } => {
                world.get::<&Attackable>(obstruction).is_ok()
                    && world.get::<&FoodPoints>(obstruction).is_ok()
            }
        }
    }

    /// React to being blocked by `obstruction`. Callers check
    /// [`MoverKind::can_interact`] first.
    pub fn on_cant_move(
        &self,
        world: &mut World,
        mover: Entity,
        obstruction: Entity,
        events: &mut EventQueue,
    ) {
        match *self {
            MoverKind::Controlled { wall_damage } => chop_wall(world, obstruction, wall_damage, events),
            MoverKind::Autonomous { food_damage } => {
                let Ok(mut food) = world.get::<&mut FoodPoints>(obstruction) else {
                    return;
                };
                food.current -= food_damage;
                debug!("{mover:?} bit {obstruction:?} for {food_damage}, {} food left", food.current);
                events.push(GameEvent::PlayerBitten {
                    enemy: mover,
                    damage: food_damage,
                    food_left: food.current,
                });
            }
        }
    }
}

fn chop_wall(world: &mut World, wall: Entity, damage: i32, events: &mut EventQueue) {
    let (destroyed, hp_left) = match world.get::<&mut Breakable>(wall) {
        Ok(mut breakable) => (breakable.damage(damage), breakable.hp),
        Err(_) => return,
    };
    if destroyed {
        let at = world.get::<&Position>(wall).map(|p| *p).ok();
        let _ = world.despawn(wall);
        debug!("wall {wall:?} destroyed");
        if let Some(at) = at {
            events.push(GameEvent::WallDestroyed { wall, at });
        }
    } else {
        events.push(GameEvent::WallChopped { wall, hp_left });
    }
}

/// Try to move `entity` one cell in `direction`.
///
/// The mover's own collider is switched off for the sweep and restored
/// afterwards. On success the logical `Position` changes immediately (so later
/// sweeps see the cell as taken) and a [`Motion`] is attached for the
/// interpolation.
pub fn attempt_move(
    world: &mut World,
    grid: &Grid,
    entity: Entity,
    direction: Direction,
    events: &mut EventQueue,
) -> Result<MoveOutcome> {
    let (start, mover) = {
        let pos = world
            .get::<&Position>(entity)
            .map_err(|_| GameError::NotAMover(entity))?;
        let mover = world
            .get::<&Mover>(entity)
            .map_err(|_| GameError::NotAMover(entity))?;
        (*pos, *mover)
    };
    let end = start.offset(direction);

    let was_enabled = set_collider_enabled(world, entity, false);
    let hit = linecast(world, grid, start, end, mover.blocking_mask);
    if let Some(enabled) = was_enabled {
        let _ = set_collider_enabled(world, entity, enabled);
    }

    match hit {
        None => {
            // A previous interpolation still in flight lands exactly first.
            animation::snap_to_target(world, entity, events);
            if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                *pos = end;
            }
            let _ = world.insert_one(
                entity,
                Motion {
                    target: end.as_vec2(),
                },
            );
            if world.get::<&VisualPosition>(entity).is_err() {
                let _ = world.insert_one(entity, VisualPosition::from_position(&start));
            }
            events.push(GameEvent::MoveStarted {
                entity,
                from: start,
                to: end,
                by_player: matches!(mover.kind, MoverKind::Controlled { .. }),
            });
            Ok(MoveOutcome::Moved {
                from: start,
                to: end,
            })
        }
        Some(Obstruction::Entity(other)) if mover.kind.can_interact(world, other) => {
            mover.kind.on_cant_move(world, entity, other, events);
            Ok(MoveOutcome::Interacted { with: other })
        }
        Some(obstruction) => Ok(MoveOutcome::Blocked(obstruction)),
    }
}

/// Returns the previous state, or `None` if the entity has no collider.
fn set_collider_enabled(world: &mut World, entity: Entity, enabled: bool) -> Option<bool> {
    let mut collider = world.get::<&mut Collider>(entity).ok()?;
    let previous = collider.enabled;
    collider.enabled = enabled;
    Some(previous)
}
