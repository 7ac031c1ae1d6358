//! Block stamps: the concrete world cells a resolved tile turns into
//!
//! Every tile covers a square of `STAMP_SIZE` blocks centred on the tile's
//! world position, so tile `t` spans blocks `t * STAMP_SIZE - STAMP_HALF`
//! through `t * STAMP_SIZE + STAMP_HALF` on each axis.

use crate::io::configuration::STAMP_SIZE;
use crate::spatial::tiles::{TileCoord, TileType};

/// Edge length of a stamp as an array dimension
pub const STAMP: usize = STAMP_SIZE as usize;

/// Distance from a stamp's centre block to its edge
pub const STAMP_HALF: i32 = STAMP_SIZE / 2;

/// Concrete world cell kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockKind {
    /// Impassable corridor wall
    Wall,
    /// Walkable floor
    Floor,
    /// Outside the arena
    #[default]
    Void,
}

impl BlockKind {
    /// Whether entities collide with this block
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::Floor)
    }

    /// Single-character rendering
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Void => ' ',
        }
    }
}

/// Stamp rows, top to bottom
pub type Stamp = [[BlockKind; STAMP]; STAMP];

const W: BlockKind = BlockKind::Wall;
const F: BlockKind = BlockKind::Floor;
const V: BlockKind = BlockKind::Void;

const OPEN_ROW: [BlockKind; STAMP] = [F, F, F, F, F];
const WALL_ROW: [BlockKind; STAMP] = [W, W, W, W, W];
const DOOR_ROW: [BlockKind; STAMP] = [W, F, F, F, W];
const VOID_ROW: [BlockKind; STAMP] = [V, V, V, V, V];

/// Blocks covered by a tile
pub const fn stamp(tile: TileType) -> Stamp {
    match tile {
        TileType::Cross => [DOOR_ROW, OPEN_ROW, OPEN_ROW, OPEN_ROW, DOOR_ROW],
        TileType::TeeUp => [DOOR_ROW, OPEN_ROW, OPEN_ROW, OPEN_ROW, WALL_ROW],
        TileType::TeeDown => [WALL_ROW, OPEN_ROW, OPEN_ROW, OPEN_ROW, DOOR_ROW],
        TileType::TeeRight => {
            let side = [W, F, F, F, F];
            [DOOR_ROW, side, side, side, DOOR_ROW]
        }
        TileType::TeeLeft => {
            let side = [F, F, F, F, W];
            [DOOR_ROW, side, side, side, DOOR_ROW]
        }
        TileType::Horizontal => [WALL_ROW, OPEN_ROW, OPEN_ROW, OPEN_ROW, WALL_ROW],
        TileType::Vertical => [DOOR_ROW; STAMP],
        TileType::Void => [VOID_ROW; STAMP],
    }
}

/// A resolved tile together with its materialized stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileBlock {
    tile: TileType,
    blocks: Stamp,
}

impl TileBlock {
    /// Materialize a tile
    pub const fn new(tile: TileType) -> Self {
        Self {
            tile,
            blocks: stamp(tile),
        }
    }

    /// Tile this block was materialized from
    pub const fn tile(&self) -> TileType {
        self.tile
    }

    /// Stamp rows, top to bottom
    pub const fn blocks(&self) -> &Stamp {
        &self.blocks
    }

    /// Block at a stamp-local `[col, row]`
    pub fn local(&self, local: [usize; 2]) -> Option<BlockKind> {
        self.blocks
            .get(local[1])
            .and_then(|row| row.get(local[0]))
            .copied()
    }

    /// Every block with its world block coordinate for a tile at `position`
    pub fn world_blocks(
        &self,
        position: TileCoord,
    ) -> impl Iterator<Item = ([i32; 2], BlockKind)> + '_ {
        let origin = stamp_origin(position);
        self.blocks.iter().enumerate().flat_map(move |(row, kinds)| {
            kinds.iter().enumerate().map(move |(col, &kind)| {
                ([origin[0] + col as i32, origin[1] + row as i32], kind)
            })
        })
    }
}

/// World block coordinate of a tile's top-left stamp block
pub const fn stamp_origin(position: TileCoord) -> [i32; 2] {
    [
        position[0] * STAMP_SIZE - STAMP_HALF,
        position[1] * STAMP_SIZE - STAMP_HALF,
    ]
}

/// Tile owning a world block, and the block's stamp-local `[col, row]`
///
/// Blocks at the very edge of the `i32` plane saturate into the outermost
/// tile, which no generator ever materializes.
pub const fn locate_block(block: [i32; 2]) -> (TileCoord, [usize; 2]) {
    let x = block[0].saturating_add(STAMP_HALF);
    let y = block[1].saturating_add(STAMP_HALF);
    (
        [x.div_euclid(STAMP_SIZE), y.div_euclid(STAMP_SIZE)],
        [
            x.rem_euclid(STAMP_SIZE) as usize,
            y.rem_euclid(STAMP_SIZE) as usize,
        ],
    )
}
