//! Generator constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Edge length of a tile's block stamp, in blocks
pub const STAMP_SIZE: i32 = 5;

/// Default half-width of the square interest window kept generated around a player, in tiles
pub const DEFAULT_INTEREST_RADIUS: i32 = 2;

/// Largest accepted interest radius
pub const MAX_INTEREST_RADIUS: i32 = 32;

/// Largest tile coordinate magnitude a world position may map to
///
/// Leaves room for the widest interest window, its frontier ring and the
/// block stamp of every covered tile inside `i32`.
pub const MAX_TILE_COORD: i32 = i32::MAX / STAMP_SIZE - MAX_INTEREST_RADIUS - 1;

/// Default half-width of the seed region collapsed at construction, in tiles
pub const DEFAULT_SEED_RADIUS: i32 = 1;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Demo driver defaults
/// Default number of simulated server ticks
pub const DEFAULT_TICKS: usize = 200;
/// Default number of simulated players
pub const DEFAULT_PLAYERS: usize = 2;
/// Distance a simulated player moves per tick, in blocks
pub const PLAYER_STEP: f64 = 1.5;
/// Ticks a simulated player keeps its heading before turning
pub const PLAYER_TURN_INTERVAL: usize = 12;

// Output settings
/// Default pixels per block in exported images
pub const DEFAULT_PIXEL_SCALE: u32 = 4;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters for a level generator instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for cell and tile choices
    pub seed: u64,
    /// Half-width of the interest window around each position, in tiles
    pub interest_radius: i32,
    /// Half-width of the seed region around the origin, in tiles
    pub seed_radius: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            interest_radius: DEFAULT_INTEREST_RADIUS,
            seed_radius: DEFAULT_SEED_RADIUS,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check that radii are within the supported range
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is negative or exceeds
    /// [`MAX_INTEREST_RADIUS`].
    pub fn validate(&self) -> Result<()> {
        for (parameter, radius) in [
            ("interest_radius", self.interest_radius),
            ("seed_radius", self.seed_radius),
        ] {
            if radius < 0 {
                return Err(invalid_parameter(parameter, &radius, &"must not be negative"));
            }
            if radius > MAX_INTEREST_RADIUS {
                return Err(invalid_parameter(
                    parameter,
                    &radius,
                    &format!("must be at most {MAX_INTEREST_RADIUS}"),
                ));
            }
        }
        Ok(())
    }
}
