//! Tile states for the sparse word grid
//!
//! A tile is either a committed letter or an open cell carrying the letters
//! proposed for it this round. The two states are exclusive by construction.

use crate::spatial::letters::LetterSet;

/// A single grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Letter already placed; never changes once set
    Fixed(char),
    /// Unplaced cell with the candidate letters computed this round
    Open(LetterSet),
}

impl Tile {
    /// Open tile with no candidates
    pub fn open() -> Self {
        Self::Open(LetterSet::new())
    }

    /// Placed letter, if any
    pub const fn letter(&self) -> Option<char> {
        match self {
            Self::Fixed(letter) => Some(*letter),
            Self::Open(_) => None,
        }
    }

    /// Check whether the tile holds a placed letter
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Candidate letters of an open tile
    pub const fn candidates(&self) -> Option<&LetterSet> {
        match self {
            Self::Fixed(_) => None,
            Self::Open(candidates) => Some(candidates),
        }
    }

    /// Mutable candidate letters of an open tile
    pub const fn candidates_mut(&mut self) -> Option<&mut LetterSet> {
        match self {
            Self::Fixed(_) => None,
            Self::Open(candidates) => Some(candidates),
        }
    }

    /// Number of candidates; zero for fixed tiles
    pub fn candidate_count(&self) -> usize {
        self.candidates().map_or(0, LetterSet::len)
    }
}
