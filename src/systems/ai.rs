//! Autonomous-entity decisions: close in on the target one axis at a time.

use hecs::{Entity, World};
use log::debug;

use crate::components::{Autonomous, Direction, Position};
use crate::error::Result;
use crate::events::EventQueue;
use crate::grid::Grid;
use crate::systems::motion::{self, MoveOutcome};

/// Direct single-axis approach: sharing the target's column means step
/// along y, otherwise step along x. `None` once on the target's cell.
pub fn approach_direction(from: Position, target: Position) -> Option<Direction> {
    if from == target {
        return None;
    }
    let direction = if from.x == target.x {
        if target.y > from.y {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if target.x > from.x {
        Direction::Right
    } else {
        Direction::Left
    };
    Some(direction)
}

/// Give `entity` its turn against `target`.
///
/// Autonomous entities act every other turn: a turn after a move is skipped
/// and returns `Ok(None)`.
pub fn take_turn(
    world: &mut World,
    grid: &Grid,
    entity: Entity,
    target: Entity,
    events: &mut EventQueue,
) -> Result<Option<MoveOutcome>> {
    let skip = match world.get::<&mut Autonomous>(entity) {
        Ok(mut state) => std::mem::replace(&mut state.skip_move, false),
        Err(_) => return Ok(None),
    };
    if skip {
        debug!("{entity:?} skips this turn");
        return Ok(None);
    }

    let from = world.get::<&Position>(entity).map(|p| *p).ok();
    let to = world.get::<&Position>(target).map(|p| *p).ok();
    let (Some(from), Some(to)) = (from, to) else {
        return Ok(None);
    };
    let Some(direction) = approach_direction(from, to) else {
        return Ok(None);
    };

    let outcome = motion::attempt_move(world, grid, entity, direction, events)?;
    if let Ok(mut state) = world.get::<&mut Autonomous>(entity) {
        state.skip_move = true;
    }
    debug!("{entity:?} {direction:?} -> {outcome:?}");
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FoodPoints;
    use crate::spawning::{self, enemies};
    use crate::tile::{Tile, TileType};

    fn open_grid(columns: i32, rows: i32) -> Grid {
        Grid::build(columns, rows, |x, y| {
            if x == -1 || x == columns || y == -1 || y == rows {
                Tile::new(TileType::OuterWall, 0)
            } else {
                Tile::new(TileType::Floor, 0)
            }
        })
    }

    #[test]
    fn test_approach_prefers_x_unless_same_column() {
        let target = Position::new(5, 5);
        assert_eq!(approach_direction(Position::new(2, 1), target), Some(Direction::Right));
        assert_eq!(approach_direction(Position::new(7, 5), target), Some(Direction::Left));
        assert_eq!(approach_direction(Position::new(5, 1), target), Some(Direction::Up));
        assert_eq!(approach_direction(Position::new(5, 8), target), Some(Direction::Down));
        assert_eq!(approach_direction(target, target), None);
    }

    #[test]
    fn test_enemy_moves_every_other_turn() {
        let grid = open_grid(8, 8);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(0, 0), 100, 0.1, 1);
        let enemy = enemies::ZOMBIE.spawn(&mut world, Position::new(5, 0), 0.1);

        let first = take_turn(&mut world, &grid, enemy, player, &mut events).unwrap();
        assert!(matches!(first, Some(MoveOutcome::Moved { .. })));
        assert_eq!(*world.get::<&Position>(enemy).unwrap(), Position::new(4, 0));

        let second = take_turn(&mut world, &grid, enemy, player, &mut events).unwrap();
        assert_eq!(second, None);
        assert_eq!(*world.get::<&Position>(enemy).unwrap(), Position::new(4, 0));

        let third = take_turn(&mut world, &grid, enemy, player, &mut events).unwrap();
        assert!(matches!(third, Some(MoveOutcome::Moved { .. })));
        assert_eq!(*world.get::<&Position>(enemy).unwrap(), Position::new(3, 0));
    }

    #[test]
    fn test_adjacent_enemy_bites() {
        let grid = open_grid(8, 8);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(2, 2), 100, 0.1, 1);
        let enemy = enemies::VAMPIRE.spawn(&mut world, Position::new(2, 3), 0.1);

        let outcome = take_turn(&mut world, &grid, enemy, player, &mut events).unwrap();
        assert_eq!(outcome, Some(MoveOutcome::Interacted { with: player }));
        assert_eq!(world.get::<&FoodPoints>(player).unwrap().current, 80);
    }
}
