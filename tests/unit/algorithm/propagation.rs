//! Tests for the propagation queue, fixpoint propagation and violation checks

#[cfg(test)]
mod tests {
    use arenagen::algorithm::bitset::TileBitset;
    use arenagen::algorithm::constraints::{AdjacencyRule, ConstraintMap};
    use arenagen::algorithm::propagation::{
        PropagationQueue, allowed_neighbours, find_violations, propagate,
    };
    use arenagen::spatial::grid::ConstraintGrid;
    use arenagen::spatial::tiles::{Direction, TileType};

    // Crosses stack vertically, horizontals chain sideways, nothing else fits
    fn disjoint_rules() -> ConstraintMap {
        ConstraintMap::from_rules(&[
            AdjacencyRule::new(TileType::Cross, &[Direction::Up, Direction::Down], &[
                TileType::Cross,
            ]),
            AdjacencyRule::new(
                TileType::Horizontal,
                &[Direction::Left, Direction::Right],
                &[TileType::Horizontal],
            ),
        ])
    }

    fn grid_for(rules: &ConstraintMap, cells: &[[i32; 2]]) -> ConstraintGrid {
        let mut grid = ConstraintGrid::new(rules.palette().clone());
        grid.extend(cells.iter().copied());
        grid.take_settle_seeds();
        grid
    }

    // Verifies pending cells are not queued twice
    // Verified by removing the membership check from push
    #[test]
    fn test_queue_deduplicates() {
        let mut queue = PropagationQueue::new();
        assert!(queue.push([0, 0]));
        assert!(!queue.push([0, 0]));
        queue.extend([[1, 0], [0, 0]]);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.pop(), Some([0, 0]));
        assert!(queue.push([0, 0]));
        assert_eq!(queue.pop(), Some([1, 0]));
        assert_eq!(queue.pop(), Some([0, 0]));
        assert!(queue.is_empty());
    }

    // Tests the fallback tile is never allowed
    // Verified by dropping the Void removal
    #[test]
    fn test_allowed_neighbours_excludes_fallback() {
        let rules = ConstraintMap::from_rules(&[AdjacencyRule::new(
            TileType::Cross,
            &Direction::ALL,
            &[TileType::Cross],
        )]);
        let allowed = allowed_neighbours(&rules, &TileBitset::all(), Direction::Up);
        assert!(!allowed.contains(TileType::Void));
        assert!(allowed.contains(TileType::Cross));
    }

    // Tests a commit narrows neighbours transitively
    // Verified by not enqueueing narrowed neighbours
    #[test]
    fn test_propagation_is_transitive() {
        let rules = disjoint_rules();
        let mut grid = grid_for(&rules, &[[0, 0], [0, 1], [0, 2]]);

        assert!(grid.commit([0, 0], TileType::Cross));
        let report = propagate(&mut grid, &rules, [[0, 0]]);

        assert!(report.contradictions.is_empty());
        assert_eq!(grid.possible([0, 1]), Some(&TileBitset::single(TileType::Cross)));
        assert_eq!(grid.possible([0, 2]), Some(&TileBitset::single(TileType::Cross)));
        assert_eq!(grid.possible([0, 3]), Some(&TileBitset::single(TileType::Cross)));
        assert!(report.narrowed >= 3);
    }

    // Tests an exhausted level cell falls back exactly once
    // Verified by enqueueing exhausted cells
    #[test]
    fn test_contradiction_substitutes_fallback_once() {
        let rules = disjoint_rules();
        let mut grid = grid_for(&rules, &[[0, 0], [1, 0]]);

        assert!(grid.commit([0, 0], TileType::Cross));
        let report = propagate(&mut grid, &rules, [[0, 0]]);

        assert_eq!(report.contradictions, vec![[1, 0]]);
        assert_eq!(grid.tile([1, 0]), Some(TileType::Void));
        assert!(!grid.is_resolved([2, 0]));
        assert_eq!(grid.unresolved_count(), 0);
    }

    // Tests exhausted frontier cells are left empty without a contradiction
    // Verified by committing the fallback on frontier cells too
    #[test]
    fn test_frontier_exhaustion_is_silent() {
        let rules = disjoint_rules();
        let mut grid = grid_for(&rules, &[[0, 0]]);

        assert!(grid.commit([0, 0], TileType::Cross));
        let report = propagate(&mut grid, &rules, [[0, 0]]);

        assert!(report.contradictions.is_empty());
        assert_eq!(grid.entropy([1, 0]), Some(0));
        assert_eq!(grid.entropy([-1, 0]), Some(0));
        assert!(!grid.is_level_cell([1, 0]));
        assert_eq!(grid.possible([0, -1]), Some(&TileBitset::single(TileType::Cross)));
    }

    // Tests a fallback cell imposes nothing on its neighbours
    // Verified by removing the Void skip
    #[test]
    fn test_fallback_is_wildcard() {
        let rules = disjoint_rules();
        let mut grid = grid_for(&rules, &[[0, 0], [1, 0]]);
        let before = grid.possible([1, 0]).cloned();

        assert!(grid.commit([0, 0], TileType::Void));
        let report = propagate(&mut grid, &rules, [[0, 0]]);

        assert_eq!(report.narrowed, 0);
        assert_eq!(grid.possible([1, 0]).cloned(), before);
    }

    // Tests a second pass over every known cell changes nothing
    // Verified by skipping the re-enqueue of narrowed cells
    #[test]
    fn test_fixpoint_is_idempotent() {
        let rules = disjoint_rules();
        let mut grid = grid_for(&rules, &[[0, 0], [0, 1], [1, 1]]);

        assert!(grid.commit([0, 1], TileType::Horizontal));
        propagate(&mut grid, &rules, [[0, 1]]);

        let known: Vec<[i32; 2]> = grid.known_cells().map(|(position, _)| position).collect();
        let again = propagate(&mut grid, &rules, known);
        assert_eq!(again.narrowed, 0);
        assert!(again.contradictions.is_empty());
    }

    // Tests possible-sets never grow during propagation
    // Verified by overwriting instead of intersecting in narrow
    #[test]
    fn test_sets_only_shrink() {
        let rules = disjoint_rules();
        let mut grid = grid_for(&rules, &[[0, 0], [1, 0], [0, 1]]);
        let before: Vec<([i32; 2], TileBitset)> = grid
            .known_cells()
            .map(|(position, set)| (position, set.clone()))
            .collect();

        assert!(grid.commit([0, 0], TileType::Horizontal));
        propagate(&mut grid, &rules, [[0, 0]]);

        for (position, old) in before {
            if position == [0, 0] {
                continue;
            }
            let Some(new) = grid.possible(position) else {
                continue;
            };
            if grid.tile(position) == Some(TileType::Void) {
                continue;
            }
            assert!(new.is_subset(&old), "set at {position:?} grew");
        }
    }

    // Tests incompatible resolved neighbours are reported once
    // Verified by checking all four directions
    #[test]
    fn test_find_violations() {
        let rules = disjoint_rules();
        let mut grid = grid_for(&rules, &[[0, 0], [1, 0], [0, 1]]);
        grid.commit([0, 0], TileType::Cross);
        grid.commit([1, 0], TileType::Horizontal);
        grid.commit([0, 1], TileType::Void);

        let violations = find_violations(&grid, &rules);
        assert_eq!(violations.len(), 1);
        let violation = violations.first().copied();
        assert_eq!(violation.map(|v| v.position), Some([0, 0]));
        assert_eq!(violation.map(|v| v.direction), Some(Direction::Right));
    }
}
