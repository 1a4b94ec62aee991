//! Error types for layout generation

use std::fmt;

/// Main error type for all algorithm operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The round loop hit its cap with words still pending
    ///
    /// An attempt-level failure: the seed sweep discards the grid and moves
    /// on to the next seed.
    IterationCapExceeded {
        /// Rounds executed, equal to the configured cap
        rounds: usize,
        /// Words still waiting for placement
        pending: usize,
    },

    /// No open tile carries any candidate letter
    ///
    /// The round cannot place anything. The round driver absorbs this as a
    /// no-op round and lets the cap decide the attempt.
    NoEligibleTile {
        /// Open tiles scanned during selection
        open_tiles: usize,
    },

    /// A uniform pick was requested from an empty sequence
    ///
    /// Every pick is guarded by a non-empty check, so this signals a broken
    /// invariant and is never retried.
    EmptyPickSource {
        /// Name of the operation that attempted the pick
        operation: &'static str,
    },

    /// An input word cannot be laid out
    InvalidWord {
        /// The offending word
        word: String,
        /// Why it was rejected
        reason: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationCapExceeded { rounds, pending } => {
                write!(
                    f,
                    "Max iterations reached after {rounds} rounds ({pending} words pending)"
                )
            }
            Self::NoEligibleTile { open_tiles } => {
                write!(
                    f,
                    "No open tile has candidate letters ({open_tiles} open tiles scanned)"
                )
            }
            Self::EmptyPickSource { operation } => {
                write!(f, "Random pick from an empty sequence in {operation}")
            }
            Self::InvalidWord { word, reason } => {
                write!(f, "Invalid word '{word}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid word error
pub fn invalid_word(word: &str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidWord {
        word: word.to_string(),
        reason: reason.to_string(),
    }
}
