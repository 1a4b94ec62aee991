//! Mathematical utilities for the algorithm

/// Seeded random source with uniform picks
pub mod random;
