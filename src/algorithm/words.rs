use crate::io::error::{Result, invalid_parameter, invalid_word};

/// Insertion-ordered set of unique words awaiting placement
///
/// Iteration follows the order words were first supplied. The placement
/// engine commits the first word that fits in this order, so the order is
/// part of what makes an attempt reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    /// Build a word set from user input
    ///
    /// Duplicates collapse onto their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or any word is not made of
    /// lowercase ASCII letters
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for word in words {
            let word = word.as_ref();
            validate_word(word)?;
            set.insert(word);
        }
        if set.is_empty() {
            return Err(invalid_parameter(
                "words",
                &"",
                &"at least one word is required",
            ));
        }
        Ok(set)
    }

    /// Add a word unless already present; returns whether it was added
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    /// Remove a word; returns whether it was present
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|candidate| candidate != word);
        self.words.len() != before
    }

    /// Test word membership
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|candidate| candidate == word)
    }

    /// Iterate words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether no words remain
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Check that a word can be laid out on the grid
///
/// # Errors
///
/// Returns `InvalidWord` for empty words and words containing anything but
/// `a..=z`
pub fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(invalid_word(word, &"words must not be empty"));
    }
    if let Some(letter) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
        return Err(invalid_word(
            word,
            &format!("'{letter}' is not a lowercase ASCII letter"),
        ));
    }
    Ok(())
}

/// Letter of `word` at signed `index`; `None` outside the word
pub fn letter_at(word: &str, index: i32) -> Option<char> {
    usize::try_from(index)
        .ok()
        .and_then(|index| word.as_bytes().get(index))
        .map(|&byte| char::from(byte))
}

/// Word length as a grid distance
pub fn word_length(word: &str) -> i32 {
    i32::try_from(word.len()).unwrap_or(i32::MAX)
}
