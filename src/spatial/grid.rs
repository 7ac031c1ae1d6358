//! Sparse constraint grid over an unbounded tile plane
//!
//! Two kinds of cells are known to the grid. Level cells are part of the
//! generated level and are scheduled for collapse. Frontier cells surround the
//! level by one step; they only carry a possible-set so propagation has
//! something to push against, and they become level cells when an extension
//! reaches them. Known cells are never forgotten and possible-sets only shrink.

use crate::algorithm::bitset::TileBitset;
use crate::spatial::tiles::{Direction, TileCoord, TileType};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Possible-sets, resolved tiles and scheduling state for the level grid
#[derive(Debug, Clone)]
pub struct ConstraintGrid {
    /// Possible tiles for every known cell, level and frontier alike
    constraints: HashMap<TileCoord, TileBitset>,

    /// Level cells with their resolved tile (`None` while unresolved)
    tiles: HashMap<TileCoord, Option<TileType>>,

    /// Level cells still awaiting collapse, ordered for deterministic scans
    unresolved: BTreeSet<TileCoord>,

    /// Possible-set given to cells when they first become known
    palette: TileBitset,

    /// Cells whose status changed during extension and need a settle pass
    settle_seeds: Vec<TileCoord>,

    /// Cells resolved since the last drain, in resolution order
    newly_resolved: Vec<(TileCoord, TileType)>,
}

impl ConstraintGrid {
    /// Create an empty grid whose fresh cells start with `palette`
    pub fn new(palette: TileBitset) -> Self {
        Self {
            constraints: HashMap::new(),
            tiles: HashMap::new(),
            unresolved: BTreeSet::new(),
            palette,
            settle_seeds: Vec::new(),
            newly_resolved: Vec::new(),
        }
    }

    /// Possible-set assigned to freshly known cells
    pub const fn palette(&self) -> &TileBitset {
        &self.palette
    }

    /// Add level cells, plus a one-step frontier around each of them
    ///
    /// Positions that already are level cells are skipped. A frontier cell that
    /// becomes a level cell keeps its narrowed possible-set. Returns whether any
    /// level cell was added.
    pub fn extend<I>(&mut self, positions: I) -> bool
    where
        I: IntoIterator<Item = TileCoord>,
    {
        let mut added = false;
        let mut fresh = Vec::new();

        for position in positions {
            if self.tiles.contains_key(&position) {
                continue;
            }
            added = true;

            if !self.constraints.contains_key(&position) {
                self.constraints.insert(position, self.palette.clone());
                fresh.push(position);
            }
            self.tiles.insert(position, None);
            self.unresolved.insert(position);
            self.settle_seeds.push(position);

            for direction in Direction::ALL {
                let neighbour = direction.step(position);
                if !self.constraints.contains_key(&neighbour) {
                    self.constraints.insert(neighbour, self.palette.clone());
                    self.settle_seeds.push(neighbour);
                    fresh.push(neighbour);
                }
            }
        }

        // Older neighbours of fresh cells must push their constraints inward too
        for position in fresh {
            for direction in Direction::ALL {
                let neighbour = direction.step(position);
                if self.constraints.contains_key(&neighbour) {
                    self.settle_seeds.push(neighbour);
                }
            }
        }

        added
    }

    /// Whether the cell carries a possible-set
    pub fn is_known(&self, position: TileCoord) -> bool {
        self.constraints.contains_key(&position)
    }

    /// Whether the cell belongs to the level rather than the frontier
    pub fn is_level_cell(&self, position: TileCoord) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Whether the cell is a level cell with a committed tile
    pub fn is_resolved(&self, position: TileCoord) -> bool {
        matches!(self.tiles.get(&position), Some(Some(_)))
    }

    /// Committed tile at a level cell
    pub fn tile(&self, position: TileCoord) -> Option<TileType> {
        self.tiles.get(&position).copied().flatten()
    }

    /// Current possible-set of a known cell
    pub fn possible(&self, position: TileCoord) -> Option<&TileBitset> {
        self.constraints.get(&position)
    }

    /// Cardinality of the possible-set; lower is more constrained
    pub fn entropy(&self, position: TileCoord) -> Option<usize> {
        self.constraints.get(&position).map(TileBitset::count)
    }

    /// All unresolved level cells sharing the minimum entropy, in sorted order
    ///
    /// Exhausted cells have entropy zero and are returned first so the
    /// scheduler can substitute the fallback tile for them.
    pub fn lowest_entropy_cells(&self) -> Vec<TileCoord> {
        let mut lowest = usize::MAX;
        let mut cells = Vec::new();

        for &position in &self.unresolved {
            let entropy = self.entropy(position).unwrap_or(0);
            if entropy < lowest {
                lowest = entropy;
                cells.clear();
            }
            if entropy == lowest {
                cells.push(position);
            }
        }

        cells
    }

    /// Intersect a cell's possible-set with `allowed`
    ///
    /// Returns whether the set shrank. Unknown and resolved cells are left
    /// untouched.
    pub fn narrow(&mut self, position: TileCoord, allowed: &TileBitset) -> bool {
        if self.is_resolved(position) {
            return false;
        }
        let Some(possible) = self.constraints.get_mut(&position) else {
            return false;
        };
        let before = possible.count();
        possible.intersect_with(allowed);
        possible.count() != before
    }

    /// Resolve a level cell to `tile` permanently
    ///
    /// Already resolved cells and frontier cells are left untouched; returns
    /// whether the commit took effect.
    pub fn commit(&mut self, position: TileCoord, tile: TileType) -> bool {
        let Some(slot) = self.tiles.get_mut(&position) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(tile);
        self.constraints.insert(position, TileBitset::single(tile));
        self.unresolved.remove(&position);
        self.newly_resolved.push((position, tile));
        true
    }

    /// Drain the cells that need a settle pass after extension
    ///
    /// Each cell appears once, in the order it was first affected.
    pub fn take_settle_seeds(&mut self) -> Vec<TileCoord> {
        let mut seen = HashSet::new();
        std::mem::take(&mut self.settle_seeds)
            .into_iter()
            .filter(|position| seen.insert(*position))
            .collect()
    }

    /// Drain the cells resolved since the previous call
    pub fn take_newly_resolved(&mut self) -> Vec<(TileCoord, TileType)> {
        std::mem::take(&mut self.newly_resolved)
    }

    /// Number of level cells awaiting collapse
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }

    /// Number of level cells
    pub fn level_len(&self) -> usize {
        self.tiles.len()
    }

    /// Number of known cells, frontier included
    pub fn known_len(&self) -> usize {
        self.constraints.len()
    }

    /// Level cells with their committed tile, in arbitrary order
    pub fn level_cells(&self) -> impl Iterator<Item = (TileCoord, Option<TileType>)> + '_ {
        self.tiles.iter().map(|(&position, &tile)| (position, tile))
    }

    /// Every known cell with its possible-set, in arbitrary order
    pub fn known_cells(&self) -> impl Iterator<Item = (TileCoord, &TileBitset)> + '_ {
        self.constraints
            .iter()
            .map(|(&position, possible)| (position, possible))
    }
}
