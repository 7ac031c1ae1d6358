//! Adjacency rules and the symmetric constraint map derived from them

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{GenerationError, Result};
use crate::spatial::tiles::{Direction, TileType};

/// User-authored adjacency rule
///
/// For `tile`, every tile in `allowed` may occupy the neighbouring cell in each
/// of `directions`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyRule {
    /// Tile the rule is written for
    pub tile: TileType,
    /// Neighbour slots the rule applies to
    pub directions: Vec<Direction>,
    /// Tiles permitted in those slots
    pub allowed: Vec<TileType>,
}

impl AdjacencyRule {
    /// Create a rule
    pub fn new(tile: TileType, directions: &[Direction], allowed: &[TileType]) -> Self {
        Self {
            tile,
            directions: directions.to_vec(),
            allowed: allowed.to_vec(),
        }
    }
}

/// Allowed-neighbour table per tile and direction
///
/// Built by pure set union, so it is independent of rule order and every
/// authored implication is mirrored: `allowed[T][D] ∋ U ⇔ allowed[U][invert(D)] ∋ T`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintMap {
    allowed: Vec<[TileBitset; 4]>,
    palette: TileBitset,
}

impl ConstraintMap {
    /// Derive the map from authored rules
    ///
    /// Rules mentioning [`TileType::Void`] are ignored; the fallback marker is
    /// never an allowed neighbour.
    pub fn from_rules(rules: &[AdjacencyRule]) -> Self {
        let mut map = Self {
            allowed: (0..TileType::COUNT)
                .map(|_| std::array::from_fn(|_| TileBitset::new()))
                .collect(),
            palette: TileBitset::new(),
        };

        for rule in rules {
            if rule.tile.is_fallback() {
                continue;
            }
            map.palette.insert(rule.tile);
            for &direction in &rule.directions {
                for &neighbour in &rule.allowed {
                    if neighbour.is_fallback() {
                        continue;
                    }
                    map.palette.insert(neighbour);
                    map.insert(rule.tile, direction, neighbour);
                    map.insert(neighbour, direction.invert(), rule.tile);
                }
            }
        }

        map
    }

    /// Build a map from explicit `(tile, direction, neighbour)` entries
    ///
    /// Entries are taken verbatim, without mirroring, so the result must pass
    /// [`ConstraintMap::validate`] before it is handed to a generator.
    pub fn from_table<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TileType, Direction, TileType)>,
    {
        let mut map = Self::from_rules(&[]);
        for (tile, direction, neighbour) in entries {
            if tile.is_fallback() || neighbour.is_fallback() {
                continue;
            }
            map.palette.insert(tile);
            map.palette.insert(neighbour);
            map.insert(tile, direction, neighbour);
        }
        map
    }

    fn insert(&mut self, tile: TileType, direction: Direction, neighbour: TileType) {
        if let Some(slot) = self
            .allowed
            .get_mut(tile.index())
            .and_then(|directions| directions.get_mut(direction.index()))
        {
            slot.insert(neighbour);
        }
    }

    /// Tiles allowed next to `tile` in `direction`
    pub fn allowed(&self, tile: TileType, direction: Direction) -> Option<&TileBitset> {
        self.allowed
            .get(tile.index())
            .and_then(|directions| directions.get(direction.index()))
    }

    /// Whether `neighbour` may sit next to `tile` in `direction`
    pub fn allows(&self, tile: TileType, direction: Direction, neighbour: TileType) -> bool {
        self.allowed(tile, direction)
            .is_some_and(|set| set.contains(neighbour))
    }

    /// Union of allowed neighbours over every tile still possible in a cell
    pub fn allowed_by(&self, possible: &TileBitset, direction: Direction) -> TileBitset {
        let mut result = TileBitset::new();
        for tile in possible.iter() {
            if let Some(set) = self.allowed(tile, direction) {
                result.union_with(set);
            }
        }
        result
    }

    /// Every tile that appears in at least one rule
    ///
    /// Fresh cells start with this set.
    pub const fn palette(&self) -> &TileBitset {
        &self.palette
    }

    /// Check the direction-inversion symmetry of the table
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AsymmetricRules`] for the first pair found
    /// that is allowed in one direction but not in the mirrored one.
    pub fn validate_symmetry(&self) -> Result<()> {
        for tile in TileType::ALL {
            for direction in Direction::ALL {
                let Some(set) = self.allowed(tile, direction) else {
                    continue;
                };
                for neighbour in set.iter() {
                    if !self.allows(neighbour, direction.invert(), tile) {
                        return Err(GenerationError::AsymmetricRules {
                            tile,
                            direction,
                            neighbour,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate the map for use by the generator
    ///
    /// # Errors
    ///
    /// Returns an error if no tile appears in any rule or the table is not
    /// symmetric.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(GenerationError::EmptyPalette);
        }
        self.validate_symmetry()
    }
}
