//! Line sweeps against terrain and entity colliders.

use hecs::{Entity, World};

use crate::components::{Collider, LayerMask, Position};
use crate::grid::Grid;

/// What stopped a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstruction {
    /// Static terrain (or the void past the outer ring)
    Terrain(Position),
    Entity(Entity),
}

/// Iterator over the cells on a Bresenham line, both endpoints included.
pub struct LineCells {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LineCells {
    pub fn new(start: Position, end: Position) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = -(end.y - start.y).abs();
        Self {
            x: start.x,
            y: start.y,
            end_x: end.x,
            end_y: end.y,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LineCells {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done {
            return None;
        }
        let current = Position::new(self.x, self.y);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Sweep from `start` to `end` and report the first thing on a layer in
/// `mask`. Disabled colliders are invisible to the sweep.
pub fn linecast(
    world: &World,
    grid: &Grid,
    start: Position,
    end: Position,
    mask: LayerMask,
) -> Option<Obstruction> {
    for cell in LineCells::new(start, end) {
        let terrain_blocks = match grid.get(cell.x, cell.y) {
            Some(tile) => tile
                .tile_type
                .collision_layer()
                .map_or(false, |layer| mask.contains(layer)),
            None => true,
        };
        if terrain_blocks {
            return Some(Obstruction::Terrain(cell));
        }

        let hit = world
            .query::<(&Position, &Collider)>()
            .iter()
            .find(|(_, (pos, collider))| {
                **pos == cell && collider.enabled && mask.contains(collider.layer)
            })
            .map(|(id, _)| id);
        if let Some(entity) = hit {
            return Some(Obstruction::Entity(entity));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CollisionLayer;
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
    fn test_line_cells_single_step() {
        let cells: Vec<_> = LineCells::new(Position::new(2, 2), Position::new(2, 3)).collect();
        assert_eq!(cells, vec![Position::new(2, 2), Position::new(2, 3)]);
    }

    #[test]
    fn test_line_cells_long_horizontal() {
        let cells: Vec<_> = LineCells::new(Position::new(4, 1), Position::new(0, 1)).collect();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells.last(), Some(&Position::new(0, 1)));
    }

    #[test]
    fn test_linecast_hits_outer_wall() {
        let grid = open_grid(4, 4);
        let world = World::new();
        let hit = linecast(&world, &grid, Position::new(0, 0), Position::new(-1, 0), LayerMask::BLOCKING);
        assert_eq!(hit, Some(Obstruction::Terrain(Position::new(-1, 0))));
    }

    #[test]
    fn test_linecast_respects_layers_and_enabled_flag() {
        let grid = open_grid(4, 4);
        let mut world = World::new();
        let _item = world.spawn((Position::new(1, 0), Collider::new(CollisionLayer::Items)));
        let start = Position::new(0, 0);
        let end = Position::new(1, 0);
        assert_eq!(linecast(&world, &grid, start, end, LayerMask::BLOCKING), None);

        let blocker = world.spawn((Position::new(1, 0), Collider::new(CollisionLayer::Blocking)));
        assert_eq!(
            linecast(&world, &grid, start, end, LayerMask::BLOCKING),
            Some(Obstruction::Entity(blocker))
        );

        world.get::<&mut Collider>(blocker).unwrap().enabled = false;
        assert_eq!(linecast(&world, &grid, start, end, LayerMask::BLOCKING), None);
    }
}
