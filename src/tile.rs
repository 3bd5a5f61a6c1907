use crate::components::CollisionLayer;

/// Number of interchangeable floor sprites
pub const FLOOR_VARIANTS: u8 = 8;
/// Number of interchangeable outer wall sprites
pub const OUTER_WALL_VARIANTS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Floor,
    /// The ring just outside the playable area
    OuterWall,
}

impl TileType {
    /// Collision layer the tile occupies, if it has a collider at all.
    pub fn collision_layer(&self) -> Option<CollisionLayer> {
        match self {
            TileType::Floor => None,
            TileType::OuterWall => Some(CollisionLayer::Blocking),
        }
    }

    pub fn variant_count(&self) -> u8 {
        match self {
            TileType::Floor => FLOOR_VARIANTS,
            TileType::OuterWall => OUTER_WALL_VARIANTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub tile_type: TileType,
    /// Which of the interchangeable sprites the renderer should use
    pub variant: u8,
}

impl Tile {
    pub fn new(tile_type: TileType, variant: u8) -> Self {
        Self { tile_type, variant }
    }
}
