//! Tile kinds, grid directions and tile coordinates
//!
//! Tile types are a closed, totally ordered set. The ordinal is only used for
//! stable bitset indexing; it carries no meaning beyond that.

use std::fmt;

/// Position of a tile in the unbounded level grid as `[x, y]`
///
/// `y` grows downwards, matching block and screen coordinates.
pub type TileCoord = [i32; 2];

/// Abstract tile kinds placed by the generator
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileType {
    /// Four-way junction
    Cross,
    /// Junction open left, right and up
    TeeUp,
    /// Junction open left, right and down
    TeeDown,
    /// Junction open up, down and right
    TeeRight,
    /// Junction open up, down and left
    TeeLeft,
    /// Straight east-west corridor
    Horizontal,
    /// Straight north-south corridor
    Vertical,
    /// Fallback marker for cells whose constraints were exhausted
    ///
    /// Never part of a fresh possible-set and never allowed by propagation.
    Void,
}

impl TileType {
    /// Number of tile kinds, including the fallback marker
    pub const COUNT: usize = 8;

    /// All tile kinds in ordinal order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Cross,
        Self::TeeUp,
        Self::TeeDown,
        Self::TeeRight,
        Self::TeeLeft,
        Self::Horizontal,
        Self::Vertical,
        Self::Void,
    ];

    /// Ordinal used for bitset indexing
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`TileType::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this is the fallback marker
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Void)
    }

    /// Box-drawing glyph used in text dumps
    pub const fn symbol(self) -> char {
        match self {
            Self::Cross => '┼',
            Self::TeeUp => '┴',
            Self::TeeDown => '┬',
            Self::TeeRight => '├',
            Self::TeeLeft => '┤',
            Self::Horizontal => '─',
            Self::Vertical => '│',
            Self::Void => ' ',
        }
    }

    /// Short code used in rule files
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cross => "C",
            Self::TeeUp => "TI",
            Self::TeeDown => "T",
            Self::TeeRight => "E",
            Self::TeeLeft => "EI",
            Self::Horizontal => "H",
            Self::Vertical => "V",
            Self::Void => "VOID",
        }
    }

    /// Parse a rule-file code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tile| tile.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The four grid neighbours of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards negative `y`
    Up,
    /// Towards positive `y`
    Down,
    /// Towards negative `x`
    Left,
    /// Towards positive `x`
    Right,
}

impl Direction {
    /// All directions in ordinal order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit offset in tile coordinates
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
        }
    }

    /// The opposite direction
    pub const fn invert(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Ordinal used for table lookups
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Neighbouring coordinate in this direction
    pub const fn step(self, coord: TileCoord) -> TileCoord {
        let offset = self.offset();
        [coord[0] + offset[0], coord[1] + offset[1]]
    }

    /// Lower-case name used in rule files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse a rule-file direction name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
