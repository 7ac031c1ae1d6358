//! Incremental level generator driven by player positions
//!
//! The generator owns the constraint grid exclusively. Each call to
//! [`LevelGenerator::extend_level`] grows the grid around the given positions,
//! collapses everything new to a consistent state, and returns the tiles the
//! caller has not been told about yet.

use crate::{
    algorithm::cache::WindowCache,
    algorithm::constraints::{AdjacencyRule, ConstraintMap},
    algorithm::executor::{CollapseReport, CollapseScheduler},
    algorithm::propagation::find_violations,
    algorithm::selection::RandomSelector,
    io::configuration::{GeneratorConfig, MAX_INTEREST_RADIUS, MAX_TILE_COORD, STAMP_SIZE},
    io::error::Result,
    level::snapshot::{Level, LevelDiff},
    spatial::extension::{interest_tiles, square_offsets},
    spatial::grid::ConstraintGrid,
    spatial::tiles::TileCoord,
};
use std::sync::Arc;
use std::time::Instant;

/// Running totals across the lifetime of a generator
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    /// Extension calls that added at least one cell
    pub extensions: usize,
    /// Extension calls whose cells were all known already
    pub noop_extensions: usize,
    /// Cells resolved by an explicit choice
    pub collapsed: usize,
    /// Cells resolved to the fallback tile
    pub contradictions: usize,
    /// Cells popped across all propagation runs
    pub propagation_visits: usize,
    /// Adjacent resolved pairs found breaking the rules after a pass
    pub violations: usize,
}

/// Owner of the constraint grid and the published level snapshots
pub struct LevelGenerator {
    config: GeneratorConfig,
    rules: ConstraintMap,
    grid: ConstraintGrid,
    selector: RandomSelector,
    windows: WindowCache,
    /// Current materialized level
    level: Arc<Level>,
    /// Level as of the last diff handed out
    reported: Arc<Level>,
    stats: GenerationStats,
}

impl LevelGenerator {
    /// Build a generator and collapse its seed region around the origin
    ///
    /// The seed level is the diff baseline: clients are expected to fetch it
    /// with [`get_level`](Self::get_level) when they connect.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration radii are out of range
    /// - The rules mention no tile type
    /// - The derived constraint map is not symmetric
    pub fn new(rules: &[AdjacencyRule], config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rules = ConstraintMap::from_rules(rules);
        rules.validate()?;

        let grid = ConstraintGrid::new(rules.palette().clone());
        let mut generator = Self {
            config,
            rules,
            grid,
            selector: RandomSelector::new(config.seed),
            windows: WindowCache::new(),
            level: Arc::new(Level::new()),
            reported: Arc::new(Level::new()),
            stats: GenerationStats::default(),
        };

        let seed_region = square_offsets(config.seed_radius);
        generator.grid.extend(seed_region);
        generator.collapse();
        generator.reported = Arc::clone(&generator.level);

        log::info!(
            "Level generator ready: seed {}, {} tile palette, {} seed tiles",
            config.seed,
            generator.rules.palette().count(),
            generator.level.len()
        );
        Ok(generator)
    }

    /// Grow the level around player world positions and return the unreported tiles
    ///
    /// Positions already inside the generated area cost nothing and yield an
    /// empty diff. Non-finite positions are skipped.
    pub fn extend_level(&mut self, positions: &[[f64; 2]]) -> LevelDiff {
        let tiles = interest_tiles(
            positions,
            self.config.interest_radius,
            STAMP_SIZE,
            &mut self.windows,
        );
        self.extend_tiles(tiles)
    }

    /// Grow the level by explicit tile coordinates and return the unreported tiles
    ///
    /// Tiles beyond the reach of any interest window are skipped with a
    /// warning, since their stamps would leave the `i32` block plane.
    pub fn extend_tiles<I>(&mut self, tiles: I) -> LevelDiff
    where
        I: IntoIterator<Item = TileCoord>,
    {
        let limit = MAX_TILE_COORD + MAX_INTEREST_RADIUS;
        let tiles = tiles.into_iter().filter(|tile| {
            let inside = tile
                .iter()
                .all(|coord| coord.checked_abs().is_some_and(|magnitude| magnitude <= limit));
            if !inside {
                log::warn!("Skipping tile {tile:?} outside the generated plane");
            }
            inside
        });
        if !self.grid.extend(tiles) {
            self.stats.noop_extensions += 1;
            return self.get_level_diff();
        }

        let start = Instant::now();
        let report = self.collapse();
        self.stats.extensions += 1;

        let diff = self.get_level_diff();
        log::debug!(
            "Extension resolved {} tiles ({} fallback) in {:.2?}; diff has {} entries",
            report.collapsed + report.contradictions.len(),
            report.contradictions.len(),
            start.elapsed(),
            diff.len()
        );
        diff
    }

    /// Immutable snapshot of the whole materialized level
    pub fn get_level(&self) -> Arc<Level> {
        Arc::clone(&self.level)
    }

    /// Tiles new or changed since the previous diff; marks them as reported
    pub fn get_level_diff(&mut self) -> LevelDiff {
        let diff = self.level.diff_from(&self.reported);
        self.reported = Arc::clone(&self.level);
        diff
    }

    /// Live constraint grid
    pub const fn grid(&self) -> &ConstraintGrid {
        &self.grid
    }

    /// Adjacency constraints in force
    pub const fn rules(&self) -> &ConstraintMap {
        &self.rules
    }

    /// Configuration the generator was built with
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Lifetime totals
    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Interest window cache, for hit-rate inspection
    pub const fn window_cache(&self) -> &WindowCache {
        &self.windows
    }

    // Runs the scheduler to completion, then materializes what it resolved
    fn collapse(&mut self) -> CollapseReport {
        let report = CollapseScheduler::new(&mut self.grid, &self.rules, &mut self.selector).run();

        let resolved = self.grid.take_newly_resolved();
        if !resolved.is_empty() {
            let level = Arc::make_mut(&mut self.level);
            for (position, tile) in resolved {
                level.insert(position, tile);
            }
        }

        let violations = find_violations(&self.grid, &self.rules);
        for violation in &violations {
            log::error!(
                "Rule violation between ({}, {}) and its {} neighbour",
                violation.position[0],
                violation.position[1],
                violation.direction
            );
        }

        self.stats.collapsed += report.collapsed;
        self.stats.contradictions += report.contradictions.len();
        self.stats.propagation_visits += report.propagation_visits;
        self.stats.violations += violations.len();
        report
    }
}
