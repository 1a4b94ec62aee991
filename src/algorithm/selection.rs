use crate::{
    io::configuration::{LOWEST_ENTROPY_MAX_ROUNDS, RANDOM_PICK_MAX_ROUNDS, TIE_BREAK_PROBABILITY},
    io::error::{AlgorithmError, Result},
    math::random::RandomSource,
    spatial::{Coordinate, LetterSet, TileMap},
};

/// Strategy for choosing the next tile to commit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Uniformly random among tiles with candidates
    #[default]
    UniformRandom,
    /// Fewest candidates first, ties broken by coin flips
    LowestEntropy,
}

impl SelectionPolicy {
    /// Round cap used when none is configured explicitly
    pub const fn default_max_rounds(self) -> usize {
        match self {
            Self::UniformRandom => RANDOM_PICK_MAX_ROUNDS,
            Self::LowestEntropy => LOWEST_ENTROPY_MAX_ROUNDS,
        }
    }
}

/// Tile chosen for this round along with its candidate letters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Position of the chosen tile
    pub at: Coordinate,
    /// Letters proposed for it
    pub candidates: LetterSet,
}

/// Choose a tile according to `policy`
///
/// # Errors
///
/// Returns `NoEligibleTile` when no open tile has candidates
pub fn select(policy: SelectionPolicy, map: &TileMap, random: &mut RandomSource) -> Result<Selection> {
    match policy {
        SelectionPolicy::UniformRandom => select_uniform(map, random),
        SelectionPolicy::LowestEntropy => select_lowest_entropy(map, random),
    }
}

/// Pick uniformly among open tiles with at least one candidate
///
/// # Errors
///
/// Returns `NoEligibleTile` when no open tile has candidates
pub fn select_uniform(map: &TileMap, random: &mut RandomSource) -> Result<Selection> {
    let eligible: Vec<(Coordinate, &LetterSet)> = eligible_tiles(map).collect();
    if eligible.is_empty() {
        return Err(no_eligible_tile(map));
    }

    let &(at, candidates) = random.pick(&eligible, "select_uniform")?;
    Ok(Selection {
        at,
        candidates: candidates.clone(),
    })
}

/// Pick the open tile with the fewest candidates
///
/// Scans in grid order. A strictly smaller candidate count replaces the held
/// tile; an equal count replaces it on a coin flip, so later ties are not
/// weighted uniformly.
///
/// # Errors
///
/// Returns `NoEligibleTile` when no open tile has candidates
pub fn select_lowest_entropy(map: &TileMap, random: &mut RandomSource) -> Result<Selection> {
    let mut lowest: Option<(Coordinate, &LetterSet)> = None;

    for (at, candidates) in eligible_tiles(map) {
        let replace = match lowest {
            None => true,
            Some((_, best)) if candidates.len() < best.len() => true,
            Some((_, best)) if candidates.len() == best.len() => {
                random.next_f64() < TIE_BREAK_PROBABILITY
            }
            Some(_) => false,
        };
        if replace {
            lowest = Some((at, candidates));
        }
    }

    lowest
        .map(|(at, candidates)| Selection {
            at,
            candidates: candidates.clone(),
        })
        .ok_or_else(|| no_eligible_tile(map))
}

/// Open tiles with a non-empty candidate set, in grid order
fn eligible_tiles(map: &TileMap) -> impl Iterator<Item = (Coordinate, &LetterSet)> {
    map.iter()
        .filter_map(|(at, tile)| tile.candidates().map(|candidates| (at, candidates)))
        .filter(|(_, candidates)| !candidates.is_empty())
}

fn no_eligible_tile(map: &TileMap) -> AlgorithmError {
    AlgorithmError::NoEligibleTile {
        open_tiles: map.iter().filter(|(_, tile)| !tile.is_fixed()).count(),
    }
}
