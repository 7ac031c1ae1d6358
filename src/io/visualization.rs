//! Text renderings of the tile grid for debugging

use crate::spatial::extension::BoundingBox;
use crate::spatial::grid::ConstraintGrid;
use crate::spatial::tiles::TileType;

/// Marker for unresolved or unknown cells
pub const UNRESOLVED_SYMBOL: char = '·';

/// Box-drawing view of the level cells, one character per tile
///
/// Rows run top to bottom. Returns an empty string for an empty grid.
pub fn render_tiles(grid: &ConstraintGrid) -> String {
    let Some(bounds) = BoundingBox::from_points(grid.level_cells().map(|(position, _)| position))
    else {
        return String::new();
    };

    let mut out = String::with_capacity((bounds.width() + 1) * bounds.height());
    for y in bounds.min[1]..=bounds.max[1] {
        for x in bounds.min[0]..=bounds.max[0] {
            out.push(grid.tile([x, y]).map_or(UNRESOLVED_SYMBOL, TileType::symbol));
        }
        out.push('\n');
    }
    out
}

/// Possible-set sizes of every known cell, frontier included
///
/// Resolved cells show their tile symbol, exhausted cells `!`, and cells
/// outside the known region [`UNRESOLVED_SYMBOL`].
pub fn render_entropy(grid: &ConstraintGrid) -> String {
    let Some(bounds) = BoundingBox::from_points(grid.known_cells().map(|(position, _)| position))
    else {
        return String::new();
    };

    let mut out = String::new();
    for y in bounds.min[1]..=bounds.max[1] {
        for x in bounds.min[0]..=bounds.max[0] {
            let position = [x, y];
            let cell = match (grid.tile(position), grid.entropy(position)) {
                (Some(tile), _) => tile.symbol(),
                (None, Some(0)) => '!',
                (None, Some(entropy)) => char::from_digit(entropy as u32, 36).unwrap_or('+'),
                (None, None) => UNRESOLVED_SYMBOL,
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

/// Possible tile codes of every known cell, frontier included
///
/// Each cell prints its set as `{C H}`, padded to a common column width;
/// cells outside the known region show [`UNRESOLVED_SYMBOL`].
pub fn render_constraints(grid: &ConstraintGrid) -> String {
    let Some(bounds) = BoundingBox::from_points(grid.known_cells().map(|(position, _)| position))
    else {
        return String::new();
    };

    let rows: Vec<Vec<String>> = (bounds.min[1]..=bounds.max[1])
        .map(|y| {
            (bounds.min[0]..=bounds.max[0])
                .map(|x| {
                    grid.possible([x, y])
                        .map_or_else(|| UNRESOLVED_SYMBOL.to_string(), ToString::to_string)
                })
                .collect()
        })
        .collect();
    let width = rows
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    for row in &rows {
        let cells: Vec<String> = row.iter().map(|cell| format!("{cell:<width$}")).collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}
