//! Sparse grid storage for word layouts
//!
//! The grid is unbounded in every direction. Only cells that hold a letter or
//! that sit next to one are stored; a missing key means the cell has never
//! been relevant, which differs from an open tile with no candidates.

use std::collections::BTreeMap;

use crate::spatial::tiles::Tile;

/// Integer grid position; `x` grows to the right and `y` grows downward
///
/// Ordering is by `x` then `y` and defines the grid iteration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move `distance` cells along `axis` (negative moves backwards)
    #[must_use]
    pub const fn step(self, axis: Axis, distance: i32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(self.x + distance, self.y),
            Axis::Vertical => Self::new(self.x, self.y + distance),
        }
    }

    /// Position along `axis`
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// The four orthogonal neighbours: left, right, up, down
    pub const fn neighbours(self) -> [Self; 4] {
        [
            self.step(Axis::Horizontal, -1),
            self.step(Axis::Horizontal, 1),
            self.step(Axis::Vertical, -1),
            self.step(Axis::Vertical, 1),
        ]
    }
}

/// Direction a word runs in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl Axis {
    /// The other axis
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Axis-aligned bounding box, inclusive on both ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Coordinate,
    /// Maximum corner
    pub max: Coordinate,
}

impl BoundingBox {
    fn around(coordinate: Coordinate) -> Self {
        Self {
            min: coordinate,
            max: coordinate,
        }
    }

    fn include(&mut self, coordinate: Coordinate) {
        self.min.x = self.min.x.min(coordinate.x);
        self.min.y = self.min.y.min(coordinate.y);
        self.max.x = self.max.x.max(coordinate.x);
        self.max.y = self.max.y.max(coordinate.y);
    }

    /// Number of columns covered
    pub const fn width(&self) -> u64 {
        (self.max.x as i64 - self.min.x as i64 + 1) as u64
    }

    /// Number of rows covered
    pub const fn height(&self) -> u64 {
        (self.max.y as i64 - self.min.y as i64 + 1) as u64
    }

    /// Number of cells covered
    pub const fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= self.min.x
            && coordinate.x <= self.max.x
            && coordinate.y >= self.min.y
            && coordinate.y <= self.max.y
    }
}

/// Sparse map from coordinates to tiles
///
/// Fixed tiles are write-once: every mutation that would replace a placed
/// letter is ignored, so a letter survives any later reset or overwrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileMap {
    tiles: BTreeMap<Coordinate, Tile>,
}

impl TileMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Tile at `at`, if the cell has been touched
    pub fn get(&self, at: Coordinate) -> Option<&Tile> {
        self.tiles.get(&at)
    }

    /// Mutable tile at `at`
    pub fn get_mut(&mut self, at: Coordinate) -> Option<&mut Tile> {
        self.tiles.get_mut(&at)
    }

    /// Store `tile` at `at` unless a fixed tile is already there
    pub fn set(&mut self, at: Coordinate, tile: Tile) {
        if self.is_fixed(at) {
            return;
        }
        self.tiles.insert(at, tile);
    }

    /// Replace a non-fixed tile with an open tile holding no candidates
    pub fn reset_to_open(&mut self, at: Coordinate) {
        self.set(at, Tile::open());
    }

    /// Placed letter at `at`
    pub fn letter(&self, at: Coordinate) -> Option<char> {
        self.get(at).and_then(Tile::letter)
    }

    /// Check whether `at` holds a placed letter
    pub fn is_fixed(&self, at: Coordinate) -> bool {
        self.get(at).is_some_and(Tile::is_fixed)
    }

    /// Iterate tiles in coordinate order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Tile)> {
        self.tiles.iter().map(|(&at, tile)| (at, tile))
    }

    /// Coordinates of all placed letters, in coordinate order
    pub fn fixed_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.is_fixed())
            .map(|(at, _)| at)
    }

    /// Number of stored tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether no tile has been stored
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of placed letters
    pub fn fixed_count(&self) -> usize {
        self.fixed_coordinates().count()
    }

    /// Bounds over every stored tile, open ones included
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        Self::bounds_of(self.tiles.keys().copied())
    }

    /// Bounds over placed letters only
    pub fn letter_bounds(&self) -> Option<BoundingBox> {
        Self::bounds_of(self.fixed_coordinates())
    }

    fn bounds_of(mut coordinates: impl Iterator<Item = Coordinate>) -> Option<BoundingBox> {
        let mut bounds = BoundingBox::around(coordinates.next()?);
        for coordinate in coordinates {
            bounds.include(coordinate);
        }
        Some(bounds)
    }
}
