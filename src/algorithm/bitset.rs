use crate::spatial::tiles::TileType;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over [`TileType`] used as a cell's possible-set
///
/// Indexed by tile ordinal. Union, intersection and cardinality are the
/// innermost operations of propagation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileBitset {
    bits: BitVec,
}

impl Default for TileBitset {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; TileType::COUNT],
        }
    }

    /// Create a bitset containing every tile kind, the fallback marker included
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; TileType::COUNT],
        }
    }

    /// Create a bitset holding exactly one tile
    pub fn single(tile: TileType) -> Self {
        let mut bitset = Self::new();
        bitset.insert(tile);
        bitset
    }

    /// Insert a tile
    pub fn insert(&mut self, tile: TileType) {
        self.bits.set(tile.index(), true);
    }

    /// Remove a tile
    pub fn remove(&mut self, tile: TileType) {
        self.bits.set(tile.index(), false);
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileType) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Union this bitset with another in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Whether every tile of `self` is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|tile| other.contains(tile))
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate tiles in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = TileType> + '_ {
        self.bits.iter_ones().filter_map(TileType::from_index)
    }

    /// Extract all tiles as a vector in ordinal order
    pub fn to_vec(&self) -> Vec<TileType> {
        self.iter().collect()
    }
}

impl FromIterator<TileType> for TileBitset {
    fn from_iter<I: IntoIterator<Item = TileType>>(iter: I) -> Self {
        let mut bitset = Self::new();
        for tile in iter {
            bitset.insert(tile);
        }
        bitset
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, tile) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tile}")?;
        }
        f.write_str("}")
    }
}
