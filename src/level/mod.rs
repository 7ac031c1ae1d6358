//! Materialized levels and the incremental generator that produces them

/// Tile to block stamps
pub mod blocks;
/// Incremental level generation around player positions
pub mod generator;
/// Level snapshots and diffs
pub mod snapshot;

pub use generator::LevelGenerator;
pub use snapshot::{Level, LevelDiff};
