use crate::{
    algorithm::constraints::constraints,
    algorithm::insertion::can_insert,
    algorithm::words::{WordSet, letter_at, word_length},
    spatial::{Axis, Coordinate, LetterSet, TileMap},
};

/// Reset phase: clear stale candidates around every placed letter
///
/// Each orthogonal neighbour of a fixed tile becomes an open tile with no
/// candidates. Fixed neighbours are left alone by the map itself.
pub fn reset_neighbours(map: &mut TileMap) {
    let fixed: Vec<Coordinate> = map.fixed_coordinates().collect();
    for at in fixed {
        for neighbour in at.neighbours() {
            map.reset_to_open(neighbour);
        }
    }
}

/// Letter `word` would put on `at` when extended through it along `axis`
///
/// Tries origins from the cell nearest `at` backwards until the word would
/// no longer cover `at`. When the cell before `at` holds a letter the word
/// must already cover it, so the scan starts one cell further back and can
/// reach one cell deeper. The first origin that passes [`can_insert`] wins.
pub fn can_fill(map: &TileMap, word: &str, at: Coordinate, axis: Axis) -> Option<char> {
    let position = at.along(axis);
    let length = word_length(word);

    let (first, last) = if map.is_fixed(at.step(axis, -1)) {
        (position - 1, position - length + 1)
    } else {
        (position, position - length + 2)
    };

    (last..=first).rev().find_map(|start| {
        let origin = at.step(axis, start - position);
        can_insert(map, word, origin, axis)
            .then(|| letter_at(word, position - start))
            .flatten()
    })
}

/// Fill phase: compute candidate letters for every open tile
///
/// Corner tiles are skipped. Every pending word adds at most one letter per
/// tile. Candidates are gathered against the unchanged grid, then written.
pub fn fill_candidates(map: &mut TileMap, words: &WordSet) {
    let updates: Vec<(Coordinate, LetterSet)> = map
        .iter()
        .filter(|(_, tile)| !tile.is_fixed())
        .filter_map(|(at, _)| {
            let found = constraints(map, at);
            if found.is_corner() {
                return None;
            }
            let axis = found.fill_axis();
            let letters = words
                .iter()
                .filter_map(|word| can_fill(map, word, at, axis))
                .collect();
            Some((at, letters))
        })
        .collect();

    for (at, letters) in updates {
        if let Some(candidates) = map.get_mut(at).and_then(|tile| tile.candidates_mut()) {
            *candidates = letters;
        }
    }
}
