//! Movement directions and compact direction sets.

use std::fmt;

/// A move an agent can attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// One cell north (`y + 1`).
    North = 0,
    /// One cell south (`y - 1`).
    South = 1,
    /// One cell east (`x + 1`).
    East = 2,
    /// One cell west (`x - 1`).
    West = 3,
    /// Stay in place.
    Stop = 4,
}

impl Direction {
    /// Every direction, in canonical order.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Stop,
    ];

    /// The four moving directions, in canonical order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    /// The two directions perpendicular to `self`.
    ///
    /// These are where an attempted move slips to. `Stop` has none.
    pub fn orthogonal(self) -> &'static [Direction] {
        match self {
            Direction::North | Direction::South => &[Direction::West, Direction::East],
            Direction::East | Direction::West => &[Direction::North, Direction::South],
            Direction::Stop => &[],
        }
    }

    /// The direction pointing the other way. `Stop` is its own opposite.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        f.write_str(name)
    }
}

/// A set of directions packed into one byte.
///
/// Iteration always yields directions in canonical order
/// (see [`Direction::ALL`]), independent of insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a direction. Returns `true` if it was not already present.
    pub fn insert(&mut self, direction: Direction) -> bool {
        let fresh = !self.contains(direction);
        self.0 |= direction.bit();
        fresh
    }

    /// Remove a direction. Returns `true` if it was present.
    pub fn remove(&mut self, direction: Direction) -> bool {
        let present = self.contains(direction);
        self.0 &= !direction.bit();
        present
    }

    /// Whether `direction` is in the set.
    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Number of directions in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}
