//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction. Fatal for the episode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// Width or height is zero or negative.
    NonPositiveBounds {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
    /// Every in-bounds coordinate is an obstacle.
    NoTraversableCells,
    /// The grid has more cells than a `CellId` can address.
    CellCountOverflow {
        /// The number of cells requested.
        count: u64,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBounds { width, height } => {
                write!(f, "grid bounds must be positive, got {width} x {height}")
            }
            Self::NoTraversableCells => write!(f, "grid has no traversable cells"),
            Self::CellCountOverflow { count } => {
                write!(f, "cell count {count} exceeds u32::MAX")
            }
        }
    }
}

impl std::error::Error for TopologyError {}
