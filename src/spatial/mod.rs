//! Spatial data structures for word layouts
//!
//! This module contains spatial-related functionality including:
//! - Coordinates, axes and the sparse tile map
//! - Tile states
//! - Candidate letter sets

/// Coordinates, axes, bounding boxes and the sparse tile map
pub mod grid;
/// Bitset of candidate letters
pub mod letters;
/// Fixed and open tile states
pub mod tiles;

pub use grid::{Axis, BoundingBox, Coordinate, TileMap};
pub use letters::LetterSet;
pub use tiles::Tile;
