//! Grid positions and dense cell identifiers.

use crate::direction::Direction;
use std::fmt;

/// Integer grid coordinate `(x, y)`.
///
/// `x` grows eastward and `y` grows northward, matching the layout
/// convention of the host simulation. The origin is the south-west corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing northward.
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`. `Stop` returns `self`.
    ///
    /// No bounds or obstacle check is performed.
    ///
    /// ```
    /// use gridmdp_core::{Direction, Position};
    ///
    /// let p = Position::new(2, 3);
    /// assert_eq!(p.step(Direction::North), Position::new(2, 4));
    /// assert_eq!(p.step(Direction::West), Position::new(1, 3));
    /// assert_eq!(p.step(Direction::Stop), p);
    /// ```
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (L1) distance between two positions.
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dense index of a traversable cell within one grid.
///
/// Assigned in canonical order at grid construction. `CellId(n)` indexes
/// every per-cell vector (rewards, utilities, transitions) of that grid and
/// is meaningless for any other grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl CellId {
    /// The id as a vector index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
