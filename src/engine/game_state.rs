//! Core game state - owns the simulation data for the current level.

use hecs::{Entity, World};
use rand::Rng;

use crate::board_gen::{self, PlacementCounts};
use crate::components::{Autonomous, FoodPoints, Mover, Position};
use crate::config::GameConfig;
use crate::constants::PLAYER_START;
use crate::error::Result;
use crate::grid::Grid;
use crate::position_pool::PositionPool;
use crate::spawning::{self, Palette};
use crate::systems::player;

/// Core game state - one level's world plus the controlled entity.
pub struct GameState {
    /// The ECS world
    pub world: World,

    /// Current level grid (floor plus outer walls)
    pub grid: Grid,

    /// Controlled entity handle
    pub player: Entity,

    /// Current level number, starting at 1
    pub level: u32,

    pub exit: Entity,

    /// Autonomous entities in the order they were placed
    pub enemies: Vec<Entity>,

    /// Interior cells left free after placement
    pub pool: PositionPool,

    pub placed: PlacementCounts,
}

impl GameState {
    /// Lay out `level` and put the controlled entity at the start cell with
    /// `food` carried over. Nothing is built if generation fails.
    pub fn generate(
        config: &GameConfig,
        palette: &Palette,
        level: u32,
        food: i32,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let mut layout = board_gen::generate(config, palette, level, rng)?;
        let (x, y) = PLAYER_START;
        let player = spawning::spawn_player(
            &mut layout.world,
            Position::new(x, y),
            food,
            config.player_move_time,
            config.wall_damage,
        );

        Ok(Self {
            world: layout.world,
            grid: layout.grid,
            player,
            level: layout.number,
            exit: layout.exit,
            enemies: layout.enemies,
            pool: layout.pool,
            placed: layout.placed,
        })
    }

    pub fn food(&self) -> i32 {
        player::food_of(&self.world, self.player)
    }

    /// The controlled entity has run out of food (or lost its food entirely).
    pub fn is_starving(&self) -> bool {
        self.world
            .get::<&FoodPoints>(self.player)
            .map_or(true, |food| food.is_depleted())
    }

    pub fn player_position(&self) -> Option<Position> {
        self.world.get::<&Position>(self.player).map(|p| *p).ok()
    }

    /// Live autonomous entities with their move times, in placement order.
    pub fn autonomous_entities(&self) -> Vec<(Entity, f32)> {
        self.enemies
            .iter()
            .filter_map(|&id| {
                let mut query = self.world.query_one::<(&Autonomous, &Mover)>(id).ok()?;
                let (_, mover) = query.get()?;
                Some((id, mover.move_time))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Player, Position};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_player_spawned_at_start_with_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let state =
            GameState::generate(&GameConfig::default(), &Palette::default(), 1, 42, &mut rng)
                .unwrap();
        assert!(state.world.get::<&Player>(state.player).is_ok());
        assert_eq!(state.player_position(), Some(Position::new(0, 0)));
        assert_eq!(state.food(), 42);
        assert_eq!(state.level, 1);
        assert!(!state.is_starving());
    }

    #[test]
    fn test_starving_at_zero_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state =
            GameState::generate(&GameConfig::default(), &Palette::default(), 1, 1, &mut rng)
                .unwrap();
        state.world.get::<&mut FoodPoints>(state.player).unwrap().current = 0;
        assert!(state.is_starving());
    }

    #[test]
    fn test_autonomous_entities_match_level() {
        let mut rng = StdRng::seed_from_u64(5);
        let state =
            GameState::generate(&GameConfig::default(), &Palette::default(), 8, 100, &mut rng)
                .unwrap();
        assert_eq!(state.autonomous_entities().len(), 3);
        assert_eq!(state.placed.enemies, 3);
    }
}
