use crate::{
    algorithm::bitset::TileBitset,
    algorithm::constraints::ConstraintMap,
    spatial::grid::ConstraintGrid,
    spatial::tiles::{Direction, TileCoord, TileType},
};
use std::collections::{HashSet, VecDeque};

/// FIFO of cells whose possible-set changed and must push constraints outward
///
/// A cell is queued at most once at a time; re-adding a pending cell is a no-op.
#[derive(Debug, Default)]
pub struct PropagationQueue {
    /// Pending cells in arrival order
    queue: VecDeque<TileCoord>,
    /// Membership of `queue`
    pending: HashSet<TileCoord>,
}

impl PropagationQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a cell unless it is already pending; returns whether it was added
    pub fn push(&mut self, position: TileCoord) -> bool {
        if self.pending.insert(position) {
            self.queue.push_back(position);
            true
        } else {
            false
        }
    }

    /// Queue several cells, skipping any already pending
    pub fn extend<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = TileCoord>,
    {
        for position in positions {
            self.push(position);
        }
    }

    /// Remove and return the oldest pending cell
    pub fn pop(&mut self) -> Option<TileCoord> {
        let position = self.queue.pop_front()?;
        self.pending.remove(&position);
        Some(position)
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get the number of pending cells
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Outcome of a propagation pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropagationReport {
    /// Cells popped from the queue
    pub visited: usize,
    /// Neighbour updates that shrank a possible-set
    pub narrowed: usize,
    /// Level cells exhausted during the pass and resolved to the fallback tile
    pub contradictions: Vec<TileCoord>,
}

impl PropagationReport {
    /// Fold another report into this one
    pub fn absorb(&mut self, other: Self) {
        self.visited += other.visited;
        self.narrowed += other.narrowed;
        self.contradictions.extend(other.contradictions);
    }
}

/// Tiles a neighbour in `direction` may take given the source cell's possible-set
///
/// The fallback tile is never allowed, so propagation can only remove tiles.
pub fn allowed_neighbours(
    rules: &ConstraintMap,
    possible: &TileBitset,
    direction: Direction,
) -> TileBitset {
    let mut allowed = rules.allowed_by(possible, direction);
    allowed.remove(TileType::Void);
    allowed
}

/// Run arc-consistency propagation from `seeds` until no possible-set changes
///
/// Exhausted or fallback-resolved cells impose nothing on their neighbours.
/// Resolved and unknown neighbours are never touched. A level cell whose
/// possible-set empties is committed to [`TileType::Void`] and recorded as a
/// contradiction; an exhausted frontier cell stays empty until the level
/// reaches it.
pub fn propagate<I>(grid: &mut ConstraintGrid, rules: &ConstraintMap, seeds: I) -> PropagationReport
where
    I: IntoIterator<Item = TileCoord>,
{
    let mut queue = PropagationQueue::new();
    queue.extend(seeds);
    let mut report = PropagationReport::default();

    while let Some(position) = queue.pop() {
        report.visited += 1;

        if grid.tile(position) == Some(TileType::Void) {
            continue;
        }
        let Some(possible) = grid.possible(position) else {
            continue;
        };
        if possible.is_empty() {
            continue;
        }
        let possible = possible.clone();

        for direction in Direction::ALL {
            let target = direction.step(position);
            if !grid.is_known(target) || grid.is_resolved(target) {
                continue;
            }

            let allowed = allowed_neighbours(rules, &possible, direction);
            if !grid.narrow(target, &allowed) {
                continue;
            }
            report.narrowed += 1;

            let exhausted = grid.possible(target).is_none_or(TileBitset::is_empty);
            if exhausted && grid.is_level_cell(target) {
                log::warn!(
                    "Contradiction at tile ({}, {}) pushed {direction} from ({}, {}); substituting fallback",
                    target[0],
                    target[1],
                    position[0],
                    position[1]
                );
                grid.commit(target, TileType::Void);
                report.contradictions.push(target);
            } else if !exhausted {
                queue.push(target);
            }
        }
    }

    log::trace!(
        "Propagation visited {} cells, narrowed {} sets",
        report.visited,
        report.narrowed
    );
    report
}

/// A pair of adjacent resolved cells whose tiles do not allow each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Cell the check started from
    pub position: TileCoord,
    /// Direction from `position` to the offending neighbour
    pub direction: Direction,
}

/// Find adjacent resolved pairs that break the rules
///
/// Pairs involving the fallback tile are exempt. Each pair is reported once,
/// from the cell on its left or upper side.
pub fn find_violations(grid: &ConstraintGrid, rules: &ConstraintMap) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (position, tile) in grid.level_cells() {
        let Some(tile) = tile else { continue };
        if tile.is_fallback() {
            continue;
        }

        for direction in [Direction::Right, Direction::Down] {
            let Some(neighbour) = grid.tile(direction.step(position)) else {
                continue;
            };
            if neighbour.is_fallback() {
                continue;
            }
            if !rules.allows(tile, direction, neighbour) {
                violations.push(Violation {
                    position,
                    direction,
                });
            }
        }
    }

    violations.sort_by_key(|violation| (violation.position, violation.direction.index()));
    violations
}
