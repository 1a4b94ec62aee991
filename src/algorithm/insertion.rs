//! Word validation, insertion and presence checks on the tile map

use crate::algorithm::constraints::constraints;
use crate::algorithm::words::{letter_at, word_length};
use crate::spatial::{Axis, Coordinate, Tile, TileMap};

/// Check whether `word` fits at `origin` along `axis`
///
/// Scans one cell of padding before and after the word. Every cell must agree
/// with any letter already placed there (padding cells must be empty), must
/// not be a corner, and must not be constrained along the perpendicular axis.
/// The last rule keeps parallel words from touching side by side.
pub fn can_insert(map: &TileMap, word: &str, origin: Coordinate, axis: Axis) -> bool {
    (-1..=word_length(word)).all(|index| {
        let at = origin.step(axis, index);

        if map
            .letter(at)
            .is_some_and(|placed| letter_at(word, index) != Some(placed))
        {
            return false;
        }

        let found = constraints(map, at);
        !found.is_corner() && !found.along(axis.perpendicular())
    })
}

/// Write `word` at `origin` along `axis`
///
/// Unconditional; validate with [`can_insert`] first. Letters already placed
/// are left untouched.
pub fn insert(map: &mut TileMap, word: &str, origin: Coordinate, axis: Axis) {
    for (index, letter) in (0..).zip(word.chars()) {
        map.set(origin.step(axis, index), Tile::Fixed(letter));
    }
}

/// Check whether every letter of `word` is already placed from `at` along `axis`
pub fn is_inserted(map: &TileMap, word: &str, at: Coordinate, axis: Axis) -> bool {
    (0..)
        .zip(word.chars())
        .all(|(index, letter)| map.letter(at.step(axis, index)) == Some(letter))
}

/// Check whether `word` appears anywhere on the grid in either axis
///
/// Catches words completed as a side effect of other placements as well as
/// words inserted directly.
pub fn is_present(map: &TileMap, word: &str) -> bool {
    let Some(first) = letter_at(word, 0) else {
        return false;
    };

    map.iter()
        .filter(|(_, tile)| tile.letter() == Some(first))
        .any(|(at, _)| {
            is_inserted(map, word, at, Axis::Horizontal) || is_inserted(map, word, at, Axis::Vertical)
        })
}

/// Fresh grid holding only the seed word
pub fn seed_map(word: &str, origin: Coordinate, axis: Axis) -> TileMap {
    let mut map = TileMap::new();
    insert(&mut map, word, origin, axis);
    map
}
