//! Controlled-entity turn: move, pay food, collect what is underfoot.

use hecs::{Entity, World};
use log::debug;

use crate::components::{Direction, Exit, FoodPoints, Pickup, Position};
use crate::error::Result;
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::linecast::Obstruction;
use crate::systems::motion::{self, MoveOutcome};

/// Result of a controlled move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTurn {
    /// The move was accepted and the turn passes on
    Accepted {
        outcome: MoveOutcome,
        food_left: i32,
        /// The move cost alone used up the last food; nothing was collected
        starved: bool,
        reached_exit: bool,
    },
    /// Bumped into something with no interactable capability; the turn stays
    NotAccepted(Obstruction),
}

/// Run one controlled move.
///
/// Accepted moves (a step or a resolved interaction) cost `food_per_move`.
/// If that cost empties the food supply the move is reported as starved and
/// nothing on the destination cell counts. Otherwise pickups there are
/// collected immediately, and the exit is detected on arrival.
pub fn player_move(
    world: &mut World,
    grid: &Grid,
    player: Entity,
    direction: Direction,
    food_per_move: i32,
    events: &mut EventQueue,
) -> Result<PlayerTurn> {
    let outcome = motion::attempt_move(world, grid, player, direction, events)?;
    if let MoveOutcome::Blocked(obstruction) = outcome {
        debug!("player blocked by {obstruction:?}");
        return Ok(PlayerTurn::NotAccepted(obstruction));
    }

    adjust_food(world, player, -food_per_move);
    let starved = food_of(world, player) <= 0;

    let mut reached_exit = false;
    match outcome {
        MoveOutcome::Moved { to, .. } if !starved => {
            collect_pickups(world, player, to, events);
            reached_exit = exit_at(world, to);
        }
        _ => {}
    }

    Ok(PlayerTurn::Accepted {
        outcome,
        food_left: food_of(world, player),
        starved,
        reached_exit,
    })
}

/// Current food of `entity`, or zero if it has none.
pub fn food_of(world: &World, entity: Entity) -> i32 {
    world
        .get::<&FoodPoints>(entity)
        .map(|f| f.current)
        .unwrap_or(0)
}

fn adjust_food(world: &mut World, entity: Entity, amount: i32) {
    if let Ok(mut food) = world.get::<&mut FoodPoints>(entity) {
        food.current += amount;
    }
}

fn collect_pickups(world: &mut World, player: Entity, at: Position, events: &mut EventQueue) {
    let found: Vec<(Entity, Pickup)> = world
        .query::<(&Position, &Pickup)>()
        .iter()
        .filter(|(_, (pos, _))| **pos == at)
        .map(|(id, (_, pickup))| (id, *pickup))
        .collect();

    for (id, pickup) in found {
        let _ = world.despawn(id);
        adjust_food(world, player, pickup.food);
        let food_left = food_of(world, player);
        debug!("picked up {} food at {at:?}, now {food_left}", pickup.food);
        events.push(GameEvent::FoodCollected {
            amount: pickup.food,
            food_left,
            sounds: pickup.sounds,
        });
    }
}

fn exit_at(world: &World, at: Position) -> bool {
    world
        .query::<(&Position, &Exit)>()
        .iter()
        .any(|(_, (pos, _))| *pos == at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawning::{self, foods, walls};
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
    fn test_step_costs_food() {
        let grid = open_grid(4, 4);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(0, 0), 20, 0.1, 1);

        let turn = player_move(&mut world, &grid, player, Direction::Up, 1, &mut events).unwrap();
        assert!(matches!(turn, PlayerTurn::Accepted { food_left: 19, reached_exit: false, .. }));
    }

    #[test]
    fn test_bumping_outer_wall_is_free() {
        let grid = open_grid(4, 4);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(0, 0), 20, 0.1, 1);

        let turn = player_move(&mut world, &grid, player, Direction::Down, 1, &mut events).unwrap();
        assert!(matches!(turn, PlayerTurn::NotAccepted(Obstruction::Terrain(_))));
        assert_eq!(food_of(&world, player), 20);
    }

    #[test]
    fn test_chopping_counts_as_a_move() {
        let grid = open_grid(4, 4);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(0, 0), 20, 0.1, 1);
        let wall = walls::BARREL.spawn(&mut world, Position::new(1, 0));

        let turn = player_move(&mut world, &grid, player, Direction::Right, 1, &mut events).unwrap();
        assert_eq!(
            turn,
            PlayerTurn::Accepted {
                outcome: MoveOutcome::Interacted { with: wall },
                food_left: 19,
                starved: false,
                reached_exit: false,
            }
        );
    }

    #[test]
    fn test_food_collected_on_entry() {
        let grid = open_grid(4, 4);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(0, 0), 20, 0.1, 1);
        let soda = foods::SODA.spawn(&mut world, Position::new(0, 1));

        let turn = player_move(&mut world, &grid, player, Direction::Up, 1, &mut events).unwrap();
        assert!(matches!(turn, PlayerTurn::Accepted { food_left: 39, .. }));
        assert!(!world.contains(soda));
        assert!(events.iter().any(|e| matches!(e, GameEvent::FoodCollected { amount: 20, .. })));
    }

    #[test]
    fn test_exit_detected() {
        let grid = open_grid(4, 4);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(3, 2), 20, 0.1, 1);
        spawning::spawn_exit(&mut world, Position::new(3, 3));

        let turn = player_move(&mut world, &grid, player, Direction::Up, 1, &mut events).unwrap();
        assert!(matches!(turn, PlayerTurn::Accepted { reached_exit: true, .. }));
    }

    #[test]
    fn test_last_food_spent_before_pickup() {
        let grid = open_grid(4, 4);
        let mut world = World::new();
        let mut events = EventQueue::new();
        let player = spawning::spawn_player(&mut world, Position::new(0, 0), 1, 0.1, 1);
        let food = foods::FOOD.spawn(&mut world, Position::new(0, 1));

        let turn = player_move(&mut world, &grid, player, Direction::Up, 1, &mut events).unwrap();
        assert!(matches!(
            turn,
            PlayerTurn::Accepted {
                food_left: 0,
                starved: true,
                reached_exit: false,
                ..
            }
        ));
        assert!(world.contains(food));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::FoodCollected { .. })));
    }
}
