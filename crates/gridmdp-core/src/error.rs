//! Error raised when world sensor data cannot be applied to a grid.

use crate::id::Position;
use std::error::Error;
use std::fmt;

/// Malformed or inconsistent data reported by the world sensor.
///
/// Raised before any reward layer is touched, so a rejected observation
/// never leaves the layers half-updated.
#[derive(Clone, Debug, PartialEq)]
pub enum SensorDataError {
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Reported x.
        x: f64,
        /// Reported y.
        y: f64,
    },
    /// A hazard is between cells on both axes at once.
    FractionalOnBothAxes {
        /// Reported x.
        x: f64,
        /// Reported y.
        y: f64,
    },
    /// A coordinate does not fit the integer grid coordinate range.
    CoordinateOutOfRange {
        /// Reported x.
        x: f64,
        /// Reported y.
        y: f64,
    },
    /// A position lies outside the grid bounds.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A position that must be traversable is an obstacle.
    Obstacle {
        /// The offending position.
        position: Position,
    },
}

impl fmt::Display for SensorDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { x, y } => {
                write!(f, "non-finite coordinate ({x}, {y})")
            }
            Self::FractionalOnBothAxes { x, y } => {
                write!(f, "coordinate ({x}, {y}) is fractional on both axes")
            }
            Self::CoordinateOutOfRange { x, y } => {
                write!(f, "coordinate ({x}, {y}) exceeds the grid coordinate range")
            }
            Self::OutOfBounds { position, bounds } => {
                write!(f, "position {position} out of bounds: {bounds}")
            }
            Self::Obstacle { position } => {
                write!(f, "position {position} is an obstacle")
            }
        }
    }
}

impl Error for SensorDataError {}
