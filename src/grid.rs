use crate::tile::{Tile, TileType};

/// Static terrain of one level: playable cells `0..columns` x `0..rows`
/// surrounded by a one-cell outer wall ring at -1 and `columns`/`rows`.
#[derive(Debug, Clone)]
pub struct Grid {
    pub columns: i32,
    pub rows: i32,
    pub tiles: Vec<Tile>,
}

impl Grid {
    /// Build the terrain, asking `tile_at` for every cell including the ring.
    pub fn build(columns: i32, rows: i32, mut tile_at: impl FnMut(i32, i32) -> Tile) -> Self {
        let width = (columns + 2) as usize;
        let height = (rows + 2) as usize;
        let mut tiles = Vec::with_capacity(width * height);
        for y in -1..=rows {
            for x in -1..=columns {
                tiles.push(tile_at(x, y));
            }
        }
        Self {
            columns,
            rows,
            tiles,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < -1 || y < -1 || x > self.columns || y > self.rows {
            return None;
        }
        let width = (self.columns + 2) as usize;
        Some((y + 1) as usize * width + (x + 1) as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    pub fn count(&self, tile_type: TileType) -> usize {
        self.tiles.iter().filter(|t| t.tile_type == tile_type).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CollisionLayer;

    fn ring_grid(columns: i32, rows: i32) -> Grid {
        Grid::build(columns, rows, |x, y| {
            if x == -1 || x == columns || y == -1 || y == rows {
                Tile::new(TileType::OuterWall, 0)
            } else {
                Tile::new(TileType::Floor, 0)
            }
        })
    }

    #[test]
    fn test_grid_covers_ring() {
        let grid = ring_grid(8, 6);
        assert_eq!(grid.tiles.len(), 10 * 8);
        assert_eq!(grid.get(-1, -1).unwrap().tile_type, TileType::OuterWall);
        assert_eq!(grid.get(8, 6).unwrap().tile_type, TileType::OuterWall);
        assert_eq!(grid.get(7, 5).unwrap().tile_type, TileType::Floor);
        assert!(grid.get(9, 0).is_none());
        assert!(grid.get(0, -2).is_none());
    }

    #[test]
    fn test_only_the_ring_collides() {
        let grid = ring_grid(4, 4);
        let layer = |x, y| grid.get(x, y).and_then(|t| t.tile_type.collision_layer());
        assert_eq!(layer(0, 0), None);
        assert_eq!(layer(3, 3), None);
        assert_eq!(layer(-1, 0), Some(CollisionLayer::Blocking));
        assert_eq!(layer(4, 2), Some(CollisionLayer::Blocking));
        assert_eq!(grid.count(TileType::OuterWall), 20);
    }
}
