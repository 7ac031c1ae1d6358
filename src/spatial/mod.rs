//! Spatial data structures over the unbounded tile plane
//!
//! This module contains spatial-related functionality including:
//! - Tile types, directions and coordinates
//! - The sparse constraint grid
//! - Interest windows around world positions

/// Interest windows and world to tile conversion
pub mod extension;
/// Sparse constraint grid
pub mod grid;
/// Tile types and directions
pub mod tiles;

pub use grid::ConstraintGrid;
