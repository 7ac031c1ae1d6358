use crate::{
    algorithm::bitset::TileBitset,
    spatial::tiles::{TileCoord, TileType},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly pick an index below `len`, or `None` when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly pick one of the candidate cells
    pub fn choose_cell(&mut self, candidates: &[TileCoord]) -> Option<TileCoord> {
        let index = self.index(candidates.len())?;
        candidates.get(index).copied()
    }

    /// Uniformly pick a tile from a possible-set
    ///
    /// The fallback tile is only chosen when nothing else is possible, and an
    /// exhausted set yields the fallback tile.
    pub fn choose_tile(&mut self, possible: &TileBitset) -> TileType {
        let candidates: Vec<TileType> = possible.iter().filter(|tile| !tile.is_fallback()).collect();
        self.index(candidates.len())
            .and_then(|index| candidates.get(index).copied())
            .unwrap_or(TileType::Void)
    }
}
