use crate::{
    algorithm::constraints::constraints,
    algorithm::insertion::{can_insert, insert},
    algorithm::words::WordSet,
    spatial::{Axis, Coordinate, TileMap},
};

/// A word committed to the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The word written
    pub word: String,
    /// Cell of its first letter
    pub origin: Coordinate,
    /// Direction it runs in
    pub axis: Axis,
}

/// Place the first pending word that puts `choice` on `at`
///
/// Words are tried in set order and, within a word, every occurrence of
/// `choice` from left to right. Only the first valid placement is committed,
/// so at most one word lands per round. Returns `None` when nothing fits or
/// `at` is unconstrained.
pub fn place_word(map: &mut TileMap, words: &WordSet, at: Coordinate, choice: char) -> Option<Placement> {
    let found = constraints(map, at);
    if found.is_free() {
        return None;
    }
    let axis = found.fill_axis();

    let placement = words
        .iter()
        .flat_map(|word| {
            word.char_indices()
                .filter(move |&(_, letter)| letter == choice)
                .filter_map(move |(index, _)| {
                    let offset = i32::try_from(index).ok()?;
                    Some((word, at.step(axis, -offset)))
                })
        })
        .find(|&(word, origin)| can_insert(map, word, origin, axis))
        .map(|(word, origin)| Placement {
            word: word.to_string(),
            origin,
            axis,
        })?;

    insert(map, &placement.word, placement.origin, placement.axis);
    Some(placement)
}
