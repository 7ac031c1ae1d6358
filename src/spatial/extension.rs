//! Interest windows: from player world positions to the tile cells that must
//! be generated around them
//!
//! World positions are measured in blocks. A tile covers a square stamp of
//! blocks, so the owning tile is found by dividing by the stamp size and
//! rounding to the nearest tile.

use crate::algorithm::cache::WindowCache;
use crate::io::configuration::MAX_INTEREST_RADIUS;
use crate::spatial::tiles::TileCoord;
use num_traits::Float;
use std::collections::BTreeSet;

/// Axis-aligned bounding box over tile or block coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for no points
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [i32; 2]>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for point in points {
            bounds.min = [bounds.min[0].min(point[0]), bounds.min[1].min(point[1])];
            bounds.max = [bounds.max[0].max(point[0]), bounds.max[1].max(point[1])];
        }
        Some(bounds)
    }

    /// Check if a point is within the bounds
    pub const fn contains(&self, point: [i32; 2]) -> bool {
        point[0] >= self.min[0]
            && point[0] <= self.max[0]
            && point[1] >= self.min[1]
            && point[1] <= self.max[1]
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        (self.max[0] - self.min[0] + 1) as usize
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        (self.max[1] - self.min[1] + 1) as usize
    }
}

/// Tile containing a world position
///
/// Returns `None` for non-finite positions, a non-positive stamp size, or
/// tiles too far out for their interest window and block stamps to fit in
/// `i32`.
pub fn world_to_tile<F: Float>(position: [F; 2], stamp_size: i32) -> Option<TileCoord> {
    if stamp_size <= 0 {
        return None;
    }
    let limit = i32::MAX / stamp_size - MAX_INTEREST_RADIUS - 1;
    let size = F::from(stamp_size)?;
    let x = (position[0] / size).round().to_i32()?;
    let y = (position[1] / size).round().to_i32()?;
    let inside = |coord: i32| coord.checked_abs().is_some_and(|magnitude| magnitude <= limit);
    (inside(x) && inside(y)).then_some([x, y])
}

/// Offsets of the square window of the given radius, row by row
///
/// Negative radii yield an empty window.
pub fn square_offsets(radius: i32) -> Vec<TileCoord> {
    if radius < 0 {
        return Vec::new();
    }
    let side = (2 * radius + 1) as usize;
    let mut offsets = Vec::with_capacity(side * side);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            offsets.push([dx, dy]);
        }
    }
    offsets
}

/// Translate window offsets to be centred on `center`
///
/// Saturates at the edge of the `i32` plane.
pub fn window_around(center: TileCoord, offsets: &[TileCoord]) -> impl Iterator<Item = TileCoord> + '_ {
    offsets.iter().map(move |offset| {
        [
            center[0].saturating_add(offset[0]),
            center[1].saturating_add(offset[1]),
        ]
    })
}

/// Union of the interest windows around every world position, sorted and deduplicated
///
/// Positions that cannot be mapped to a tile are skipped with a warning.
pub fn interest_tiles<F: Float>(
    positions: &[[F; 2]],
    radius: i32,
    stamp_size: i32,
    cache: &mut WindowCache,
) -> Vec<TileCoord> {
    let offsets = cache.offsets(radius);
    let mut tiles = BTreeSet::new();

    for position in positions {
        let Some(center) = world_to_tile(*position, stamp_size) else {
            log::warn!(
                "Skipping interest position ({:?}, {:?}) outside the tile plane",
                position[0].to_f64(),
                position[1].to_f64()
            );
            continue;
        };
        tiles.extend(window_around(center, offsets));
    }

    tiles.into_iter().collect()
}
