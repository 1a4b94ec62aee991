/// Adjacency constraints around placed letters
pub mod constraints;
/// Round driver running one seeded attempt
pub mod executor;
/// Word validation, insertion and presence checks
pub mod insertion;
/// Single-word placement through a chosen tile
pub mod placement;
/// Neighbour reset and candidate letter propagation
pub mod propagation;
/// Tile selection strategies
pub mod selection;
/// Seed sweep keeping the smallest layout
pub mod sweep;
/// Pending word set
pub mod words;
