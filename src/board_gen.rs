//! Level layout generation.
//!
//! Builds the terrain ring, then scatters walls, food, and enemies over
//! distinct interior cells drawn from a [`PositionPool`], and finally drops
//! the exit in the top-right corner.

use hecs::{Entity, World};
use log::{info, warn};
use rand::Rng;

use crate::components::Position;
use crate::config::{CountRange, GameConfig};
use crate::error::{GameError, Result};
use crate::grid::Grid;
use crate::position_pool::PositionPool;
use crate::spawning::{self, Palette};
use crate::tile::{Tile, TileType};

/// How many objects of each category a level received
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementCounts {
    pub walls: usize,
    pub food: usize,
    pub enemies: usize,
}

/// A freshly generated level, not yet populated with the player.
pub struct Level {
    pub number: u32,
    pub grid: Grid,
    pub world: World,
    /// Interior cells left over after placement
    pub pool: PositionPool,
    /// Autonomous entities in creation order
    pub enemies: Vec<Entity>,
    pub exit: Entity,
    pub placed: PlacementCounts,
}

/// Enemies on `level`: floor(log2(level)), so none on level 1.
pub fn enemy_count(level: u32) -> u32 {
    level.checked_ilog2().unwrap_or(0)
}

/// Cell the exit always occupies.
pub fn exit_position(columns: i32, rows: i32) -> Position {
    Position::new(columns - 1, rows - 1)
}

/// Generate the layout for `level`.
///
/// Generation is all-or-nothing: on error nothing is returned and no
/// existing level is touched.
pub fn generate(
    config: &GameConfig,
    palette: &Palette,
    level: u32,
    rng: &mut impl Rng,
) -> Result<Level> {
    puffin::profile_function!();

    if level == 0 {
        return Err(GameError::InvalidLevel);
    }
    config.validate()?;

    let grid = build_perimeter(config.columns, config.rows, rng);
    let mut pool = PositionPool::new();
    pool.reset(config.columns, config.rows);
    let mut world = World::new();

    let (walls, food, enemies) =
        match populate(config, palette, level, &mut world, &mut pool, rng) {
            Ok(placed) => placed,
            Err(err) => {
                warn!("level {level} generation aborted: {err}");
                return Err(err);
            }
        };

    let exit = spawning::spawn_exit(&mut world, exit_position(config.columns, config.rows));

    let placed = PlacementCounts {
        walls: walls.len(),
        food: food.len(),
        enemies: enemies.len(),
    };
    info!(
        "level {level}: {} walls, {} food, {} enemies, {} free cells",
        placed.walls,
        placed.food,
        placed.enemies,
        pool.len()
    );

    Ok(Level {
        number: level,
        grid,
        world,
        pool,
        enemies,
        exit,
        placed,
    })
}

/// Walls, then food, then enemies, each on cells taken from `pool`.
fn populate<R: Rng>(
    config: &GameConfig,
    palette: &Palette,
    level: u32,
    world: &mut World,
    pool: &mut PositionPool,
    rng: &mut R,
) -> Result<(Vec<Entity>, Vec<Entity>, Vec<Entity>)> {
    let walls = layout_at_random(
        world,
        pool,
        config.wall_count,
        rng,
        |rng| palette.choose_wall(rng),
        |def, world, pos| def.spawn(world, pos),
    )?;
    let food = layout_at_random(
        world,
        pool,
        config.food_count,
        rng,
        |rng| palette.choose_food(rng),
        |def, world, pos| def.spawn(world, pos),
    )?;
    // Zero-width range: exactly enemy_count(level) enemies.
    let enemies = layout_at_random(
        world,
        pool,
        CountRange::exactly(enemy_count(level)),
        rng,
        |rng| palette.choose_enemy(rng),
        |def, world, pos| def.spawn(world, pos, config.enemy_move_time),
    )?;
    Ok((walls, food, enemies))
}

/// Floor everywhere inside, outer wall on every cell of the -1/columns/rows
/// ring. Both axes are scanned over the full range so corners are covered.
fn build_perimeter(columns: i32, rows: i32, rng: &mut impl Rng) -> Grid {
    Grid::build(columns, rows, |x, y| {
        let tile_type = if x == -1 || x == columns || y == -1 || y == rows {
            TileType::OuterWall
        } else {
            TileType::Floor
        };
        Tile::new(tile_type, rng.gen_range(0..tile_type.variant_count()))
    })
}

/// Spawn a random number (drawn from `range`) of objects on distinct pool
/// cells. Variants are chosen before any cell is taken so a failure leaves
/// the pool untouched.
fn layout_at_random<R, D>(
    world: &mut World,
    pool: &mut PositionPool,
    range: CountRange,
    rng: &mut R,
    choose: impl Fn(&mut R) -> Result<D>,
    spawn: impl Fn(&D, &mut World, Position) -> Entity,
) -> Result<Vec<Entity>>
where
    R: Rng,
{
    let count = range.sample(rng) as usize;
    let defs = (0..count)
        .map(|_| choose(rng))
        .collect::<Result<Vec<D>>>()?;
    let cells = pool.take_many(count, rng)?;

    Ok(defs
        .iter()
        .zip(cells)
        .map(|(def, pos)| spawn(def, world, pos))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Breakable, Exit, Pickup};
    use crate::spawning::Prefab;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn positions_of<Q: hecs::Component>(world: &World) -> Vec<Position> {
        world
            .query::<(&Position, &Q)>()
            .iter()
            .map(|(_, (pos, _))| *pos)
            .collect()
    }

    #[test]
    fn test_enemy_count_is_floor_log2() {
        let expected = [(1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (7, 2), (8, 3), (15, 3), (16, 4)];
        for (level, count) in expected {
            assert_eq!(enemy_count(level), count, "level {level}");
        }
    }

    #[test]
    fn test_level_one_scenario() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let level = generate(&config, &Palette::default(), 1, &mut rng).unwrap();

        assert_eq!(level.placed.enemies, 0);
        assert!(level.enemies.is_empty());
        assert!(config.wall_count.contains(level.placed.walls as u32));
        assert!(config.food_count.contains(level.placed.food as u32));
        assert_eq!(level.pool.len(), 36 - level.placed.walls - level.placed.food);

        let exits = positions_of::<Exit>(&level.world);
        assert_eq!(exits, vec![Position::new(7, 7)]);
    }

    #[test]
    fn test_placements_never_share_a_cell() {
        let config = GameConfig::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let level = generate(&config, &Palette::default(), 8, &mut rng).unwrap();
            let cells: Vec<Position> = level
                .world
                .query::<(&Position, &Prefab)>()
                .iter()
                .map(|(_, (pos, _))| *pos)
                .collect();
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len());
            assert_eq!(level.placed.enemies, 3);
            for pos in cells.iter().filter(|p| **p != Position::new(7, 7)) {
                assert!(!level.pool.contains(*pos));
                assert!((1..=6).contains(&pos.x) && (1..=6).contains(&pos.y));
            }
        }
    }

    #[test]
    fn test_counts_stay_in_configured_ranges() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        for level_number in 1..=10 {
            let level = generate(&config, &Palette::default(), level_number, &mut rng).unwrap();
            assert_eq!(positions_of::<Breakable>(&level.world).len(), level.placed.walls);
            assert_eq!(positions_of::<Pickup>(&level.world).len(), level.placed.food);
            assert!(config.wall_count.contains(level.placed.walls as u32));
            assert!(config.food_count.contains(level.placed.food as u32));
            assert_eq!(level.placed.enemies as u32, enemy_count(level_number));
        }
    }

    #[test]
    fn test_perimeter_ring_and_floor() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let level = generate(&config, &Palette::default(), 1, &mut rng).unwrap();
        let grid = &level.grid;
        assert_eq!(grid.count(TileType::OuterWall), 4 * 8 + 4);
        assert_eq!(grid.count(TileType::Floor), 64);
        for corner in [(-1, -1), (-1, 8), (8, -1), (8, 8)] {
            assert_eq!(grid.get(corner.0, corner.1).unwrap().tile_type, TileType::OuterWall);
        }
        assert!(grid
            .tiles
            .iter()
            .all(|t| t.variant < t.tile_type.variant_count()));
    }

    #[test]
    fn test_overfull_board_is_pool_exhausted() {
        let config = GameConfig {
            columns: 4,
            rows: 4,
            wall_count: CountRange::exactly(3),
            food_count: CountRange::exactly(2),
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&config, &Palette::default(), 1, &mut rng).err();
        assert!(matches!(
            err,
            Some(GameError::PoolExhausted {
                requested: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn test_level_zero_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&GameConfig::default(), &Palette::default(), 0, &mut rng),
            Err(GameError::InvalidLevel)
        ));
    }
}
