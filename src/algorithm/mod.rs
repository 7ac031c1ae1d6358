/// Fixed-width bitsets over tile types
pub mod bitset;
/// Memoized interest window offsets
pub mod cache;
/// Adjacency rules and the derived constraint map
pub mod constraints;
/// Collapse scheduler state machine
pub mod executor;
/// Constraint propagation to fixpoint
pub mod propagation;
/// Seeded cell and tile choices
pub mod selection;
