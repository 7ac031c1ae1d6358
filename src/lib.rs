//! Incremental wave function collapse level generator for an online arena game
//!
//! The level is an unbounded grid of corridor tiles. It grows on demand around
//! player positions: new cells are seeded with every tile, constraint
//! propagation keeps neighbours consistent, and only the newly resolved tiles
//! are handed back so servers can forward small diffs to their clients.

#![forbid(unsafe_code)]

/// Constraint solving: bitsets, rules, propagation and the collapse scheduler
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Materialized levels and the incremental generator
pub mod level;
/// Tile types, coordinates and the sparse constraint grid
pub mod spatial;

pub use io::error::{GenerationError, Result};
pub use level::{Level, LevelDiff, LevelGenerator};
