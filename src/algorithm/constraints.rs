//! Adjacency constraints derived from placed letters
//!
//! A cell is constrained along an axis when it sits at the open end of a
//! single placed letter on that axis, i.e. next to a letter that belongs to a
//! perpendicular word. Such a cell can only be filled by a word running along
//! that axis and crossing the perpendicular word.
//!
//! A placed letter with placed neighbours on both sides of an axis is never
//! constrained along it. A plain "left or right" check would flag the `e` of
//! a horizontal `red` (its `r` and `d` each end a one-letter run outward), so
//! a vertical `blue` could never drop through the middle of `red`; only the
//! end letters of a word could ever be crossed.
//!
//! The rule guards cells next to single letters only. A cell just past the
//! end of a word of two or more letters is unconstrained, so a perpendicular
//! word may end right against it and form a longer run such as `ncoral`.

use crate::spatial::{Axis, Coordinate, TileMap};

/// Axes along which a cell must be extended
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Cell extends a single letter to its left or right
    pub horizontal: bool,
    /// Cell extends a single letter above or below it
    pub vertical: bool,
}

impl Constraints {
    /// Both axes constrained; the cell sits at a corner and takes no word
    pub const fn is_corner(self) -> bool {
        self.horizontal && self.vertical
    }

    /// Neither axis constrained; the cell plays no part this round
    pub const fn is_free(self) -> bool {
        !self.horizontal && !self.vertical
    }

    /// Flag for `axis`
    pub const fn along(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Axis a word through this cell must take: vertical only when the
    /// horizontal flag is unset and the vertical one is set
    pub const fn fill_axis(self) -> Axis {
        if self.vertical && !self.horizontal {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

/// Evaluate adjacency constraints at `at`
pub fn constraints(map: &TileMap, at: Coordinate) -> Constraints {
    Constraints {
        horizontal: run_end(map, at, Axis::Horizontal),
        vertical: run_end(map, at, Axis::Vertical),
    }
}

/// Whether `at` is the open end of a one-letter run along `axis`
fn run_end(map: &TileMap, at: Coordinate, axis: Axis) -> bool {
    let before = map.is_fixed(at.step(axis, -1));
    let after = map.is_fixed(at.step(axis, 1));

    // A placed letter flanked on both sides is inside a run, not at its end
    if before && after && map.is_fixed(at) {
        return false;
    }

    let extends_before = before && !map.is_fixed(at.step(axis, -2));
    let extends_after = after && !map.is_fixed(at.step(axis, 2));
    extends_before || extends_after
}
