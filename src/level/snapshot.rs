//! Materialized level snapshots and the diffs sent to clients

use crate::level::blocks::{BlockKind, STAMP, TileBlock, locate_block, stamp_origin};
use crate::spatial::extension::BoundingBox;
use crate::spatial::tiles::{TileCoord, TileType};
use ndarray::Array2;
use std::collections::BTreeMap;

/// Tiles that are new or changed relative to an earlier snapshot
pub type LevelDiff = BTreeMap<TileCoord, TileBlock>;

/// Materialized level: every resolved tile with its block stamp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Level {
    tiles: BTreeMap<TileCoord, TileBlock>,
}

impl Level {
    /// Create an empty level
    pub const fn new() -> Self {
        Self {
            tiles: BTreeMap::new(),
        }
    }

    /// Materialize a resolved tile, replacing any previous block at `position`
    pub fn insert(&mut self, position: TileCoord, tile: TileType) {
        self.tiles.insert(position, TileBlock::new(tile));
    }

    /// Materialized block at a tile position
    pub fn get(&self, position: TileCoord) -> Option<&TileBlock> {
        self.tiles.get(&position)
    }

    /// Resolved tile at a tile position
    pub fn tile(&self, position: TileCoord) -> Option<TileType> {
        self.tiles.get(&position).map(TileBlock::tile)
    }

    /// Number of materialized tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been materialized
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in coordinate order
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, &TileBlock)> + '_ {
        self.tiles.iter().map(|(&position, block)| (position, block))
    }

    /// Entries of `self` that are absent from or different in `previous`
    pub fn diff_from(&self, previous: &Self) -> LevelDiff {
        self.tiles
            .iter()
            .filter(|&(position, block)| previous.tiles.get(position) != Some(block))
            .map(|(&position, &block)| (position, block))
            .collect()
    }

    /// Apply a diff on top of this level
    pub fn merge(&mut self, diff: &LevelDiff) {
        self.tiles
            .extend(diff.iter().map(|(&position, &block)| (position, block)));
    }

    /// Block at a world block coordinate, if its tile has been generated
    pub fn block_at(&self, block: [i32; 2]) -> Option<BlockKind> {
        let (position, local) = locate_block(block);
        self.tiles.get(&position)?.local(local)
    }

    /// Whether a world position collides with the level
    ///
    /// Walls, void and ungenerated space are all solid.
    pub fn is_solid(&self, position: [f64; 2]) -> bool {
        if !position.iter().all(|value| value.is_finite()) {
            return true;
        }
        // `as` saturates far positions onto the plane edge, which stays ungenerated
        let block = [position[0].round() as i32, position[1].round() as i32];
        self.block_at(block).is_none_or(BlockKind::is_solid)
    }

    /// Tile-space bounds of the materialized tiles
    pub fn tile_bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.tiles.keys().copied())
    }

    /// Render every block into a dense `[row, col]` array
    ///
    /// Returns the array with the world block coordinate of its `[0, 0]`
    /// element, or `None` for an empty level. Cells between generated tiles
    /// are [`BlockKind::Void`].
    pub fn rasterize(&self) -> Option<(Array2<BlockKind>, [i32; 2])> {
        let bounds = self.tile_bounds()?;
        let origin = stamp_origin(bounds.min);
        let mut blocks =
            Array2::from_elem((bounds.height() * STAMP, bounds.width() * STAMP), BlockKind::Void);

        for (position, block) in self.iter() {
            for (world, kind) in block.world_blocks(position) {
                let row = (world[1] - origin[1]) as usize;
                let col = (world[0] - origin[0]) as usize;
                if let Some(cell) = blocks.get_mut([row, col]) {
                    *cell = kind;
                }
            }
        }

        Some((blocks, origin))
    }
}

impl FromIterator<(TileCoord, TileType)> for Level {
    fn from_iter<I: IntoIterator<Item = (TileCoord, TileType)>>(iter: I) -> Self {
        let mut level = Self::new();
        for (position, tile) in iter {
            level.insert(position, tile);
        }
        level
    }
}
