//! Plain-text rendering of the tile map

use crate::spatial::{Coordinate, Tile, TileMap};

/// Render the grid row by row over the bounding box of every stored tile
///
/// Each cell is one character: the placed letter, otherwise the number of
/// candidates when `show_candidates` is set (`+` past nine), otherwise a
/// space. An empty map renders as an empty string.
pub fn render_grid(map: &TileMap, show_candidates: bool) -> String {
    let Some(bounds) = map.bounding_box() else {
        return String::new();
    };

    let rows: Vec<String> = (bounds.min.y..=bounds.max.y)
        .map(|y| {
            (bounds.min.x..=bounds.max.x)
                .map(|x| cell_char(map.get(Coordinate::new(x, y)), show_candidates))
                .collect()
        })
        .collect();
    rows.join("\n")
}

fn cell_char(tile: Option<&Tile>, show_candidates: bool) -> char {
    match tile {
        Some(Tile::Fixed(letter)) => *letter,
        Some(Tile::Open(candidates)) if show_candidates => u32::try_from(candidates.len())
            .ok()
            .and_then(|count| char::from_digit(count, 10))
            .unwrap_or('+'),
        _ => ' ',
    }
}
