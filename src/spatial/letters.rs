use bitvec::prelude::*;
use std::fmt;

/// Number of letters a candidate set can hold (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// Fixed-size bitset of lowercase letters proposed for an open tile
///
/// Bit `i` stands for the letter `b'a' + i`. Iteration is alphabetical, which
/// keeps random picks over the set reproducible for a given seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterSet {
    bits: BitVec,
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterSet {
    /// Create a set with no letters present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; ALPHABET_SIZE],
        }
    }

    /// Insert a letter
    ///
    /// Anything outside `a..=z` is ignored.
    pub fn insert(&mut self, letter: char) {
        if let Some(index) = Self::index_of(letter) {
            self.bits.set(index, true);
        }
    }

    /// Test letter membership
    pub fn contains(&self, letter: char) -> bool {
        Self::index_of(letter)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Remove every letter
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no letters are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count letters in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.bits
            .iter_ones()
            .filter_map(|index| u8::try_from(index).ok())
            .map(|offset| char::from(b'a' + offset))
    }

    /// Extract all letters as a vector, alphabetically
    pub fn to_vec(&self) -> Vec<char> {
        self.iter().collect()
    }

    fn index_of(letter: char) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| letter as usize - 'a' as usize)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        write!(f, "}}")
    }
}
