//! Crossword-style word layout generation by greedy constraint propagation
//!
//! Words are placed one per round onto an unbounded sparse grid. Each round
//! recomputes the letters every open cell could take from the words still
//! pending, picks a cell, and commits the first word that fits through it.
//! There is no backtracking: an attempt that stalls hits its round cap and
//! the seed sweep starts over with the next seed.

#![forbid(unsafe_code)]

/// Constraint propagation, selection, placement and the round driver
pub mod algorithm;
/// Command-line interface, configuration, errors, progress and rendering
pub mod io;
/// Seeded randomness
pub mod math;
/// Coordinates, tiles and the sparse tile map
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
