use crate::{
    algorithm::constraints::ConstraintMap,
    algorithm::propagation::{PropagationReport, propagate},
    algorithm::selection::RandomSelector,
    spatial::grid::ConstraintGrid,
    spatial::tiles::{TileCoord, TileType},
};

/// Phase of a collapse pass
///
/// A pass starts in `Settling` and cycles
/// `Scanning → Choosing → Committing → Propagating → Scanning` until no
/// unresolved level cell remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollapsePhase {
    /// Propagate from cells whose status changed during the last extension
    Settling,
    /// Look for the unresolved cells with the lowest entropy
    Scanning,
    /// Pick one of the minimum-entropy candidates and a tile for it
    Choosing(Vec<TileCoord>),
    /// Resolve the chosen cell
    Committing {
        /// Cell being resolved
        position: TileCoord,
        /// Tile it resolves to
        tile: TileType,
    },
    /// Restore consistency around the committed cell
    Propagating(TileCoord),
    /// Every level cell is resolved
    Done,
}

/// Summary of a collapse pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollapseReport {
    /// Cells resolved by an explicit choice
    pub collapsed: usize,
    /// Cells resolved to the fallback tile, in the order they were found
    pub contradictions: Vec<TileCoord>,
    /// Cells popped across all propagation runs
    pub propagation_visits: usize,
    /// Possible-set reductions across all propagation runs
    pub narrowed: usize,
    /// State machine transitions taken
    pub steps: usize,
}

impl CollapseReport {
    fn absorb(&mut self, propagation: PropagationReport) {
        self.propagation_visits += propagation.visited;
        self.narrowed += propagation.narrowed;
        self.contradictions.extend(propagation.contradictions);
    }
}

/// Drives a grid from its current state to the point where every level cell is resolved
///
/// The scheduler borrows the grid exclusively for the whole pass, so no caller
/// can observe a half-collapsed state.
pub struct CollapseScheduler<'a> {
    /// Grid being collapsed
    grid: &'a mut ConstraintGrid,
    /// Adjacency constraints
    rules: &'a ConstraintMap,
    /// Source of cell and tile choices
    selector: &'a mut RandomSelector,
    /// Next phase to execute
    phase: CollapsePhase,
    /// Accumulated pass statistics
    report: CollapseReport,
}

impl<'a> CollapseScheduler<'a> {
    /// Create a scheduler that starts by settling freshly extended cells
    pub fn new(
        grid: &'a mut ConstraintGrid,
        rules: &'a ConstraintMap,
        selector: &'a mut RandomSelector,
    ) -> Self {
        Self {
            grid,
            rules,
            selector,
            phase: CollapsePhase::Settling,
            report: CollapseReport::default(),
        }
    }

    /// Phase the next call to [`step`](Self::step) will execute
    pub const fn phase(&self) -> &CollapsePhase {
        &self.phase
    }

    /// Whether the pass has finished
    pub fn is_done(&self) -> bool {
        self.phase == CollapsePhase::Done
    }

    /// Statistics gathered so far
    pub const fn report(&self) -> &CollapseReport {
        &self.report
    }

    /// Execute one phase; returns whether the pass still has work to do
    pub fn step(&mut self) -> bool {
        let phase = std::mem::replace(&mut self.phase, CollapsePhase::Done);
        if phase != CollapsePhase::Done {
            self.report.steps += 1;
        }

        self.phase = match phase {
            CollapsePhase::Settling => {
                let seeds = self.grid.take_settle_seeds();
                let settled = propagate(self.grid, self.rules, seeds);
                self.report.absorb(settled);
                CollapsePhase::Scanning
            }
            CollapsePhase::Scanning => {
                let candidates = self.grid.lowest_entropy_cells();
                if candidates.is_empty() {
                    CollapsePhase::Done
                } else {
                    CollapsePhase::Choosing(candidates)
                }
            }
            CollapsePhase::Choosing(candidates) => match self.selector.choose_cell(&candidates) {
                Some(position) => {
                    let tile = self.choose_tile(position);
                    CollapsePhase::Committing { position, tile }
                }
                None => CollapsePhase::Scanning,
            },
            CollapsePhase::Committing { position, tile } => {
                if self.grid.commit(position, tile) && !tile.is_fallback() {
                    self.report.collapsed += 1;
                }
                CollapsePhase::Propagating(position)
            }
            CollapsePhase::Propagating(position) => {
                let propagated = propagate(self.grid, self.rules, [position]);
                self.report.absorb(propagated);
                CollapsePhase::Scanning
            }
            CollapsePhase::Done => CollapsePhase::Done,
        };

        !self.is_done()
    }

    /// Run the pass to completion
    pub fn run(mut self) -> CollapseReport {
        while self.step() {}
        self.report
    }

    /// Tile for a chosen cell; an exhausted cell falls back to [`TileType::Void`]
    fn choose_tile(&mut self, position: TileCoord) -> TileType {
        match self.grid.possible(position) {
            Some(possible) if !possible.is_empty() => self.selector.choose_tile(possible),
            _ => {
                log::warn!(
                    "Tile ({}, {}) has no possible tiles left; substituting fallback",
                    position[0],
                    position[1]
                );
                self.report.contradictions.push(position);
                TileType::Void
            }
        }
    }
}
