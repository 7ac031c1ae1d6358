use crate::spatial::extension::square_offsets;
use crate::spatial::tiles::TileCoord;
use std::collections::HashMap;

/// Memoization cache for interest-window offsets
///
/// A window is a pure function of its radius, and the generator asks for the
/// same radius every tick, so the offsets are computed once per radius.
#[derive(Default, Debug)]
pub struct WindowCache {
    /// Radius to window offsets mapping
    windows: HashMap<i32, Vec<TileCoord>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl WindowCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets of the square window with the given radius
    ///
    /// Negative radii yield an empty window.
    pub fn offsets(&mut self, radius: i32) -> &[TileCoord] {
        use std::collections::hash_map::Entry;

        match self.windows.entry(radius) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(square_offsets(radius))
            }
        }
    }

    /// Number of distinct radii cached
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
