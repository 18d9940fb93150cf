//! Hazard samples reported by a world sensor.

use crate::error::SensorDataError;
use crate::id::Position;
use smallvec::{smallvec, SmallVec};

/// A hazard position sampled at a decision instant.
///
/// Hazards move continuously in the host simulation, so a sample may sit
/// halfway between two cells. At most one axis may be fractional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardPoint {
    /// Column coordinate, possibly fractional.
    pub x: f64,
    /// Row coordinate, possibly fractional.
    pub y: f64,
}

impl HazardPoint {
    /// Create a hazard sample.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Split the sample into the integer cells it occupies.
    ///
    /// An integral sample occupies one cell. A sample fractional on one
    /// axis occupies the floor and the ceil cell along that axis, floor
    /// first. The order does not affect the hazard layer: both cells take
    /// the full punishment and spill accumulates regardless of which is
    /// applied first.
    ///
    /// ```
    /// use gridmdp_core::{HazardPoint, Position};
    ///
    /// let cells = HazardPoint::new(1.0, 0.5).decompose().unwrap();
    /// assert_eq!(cells.as_slice(), &[Position::new(1, 0), Position::new(1, 1)]);
    /// ```
    pub fn decompose(self) -> Result<SmallVec<[Position; 2]>, SensorDataError> {
        let Self { x, y } = self;
        if !x.is_finite() || !y.is_finite() {
            return Err(SensorDataError::NonFiniteCoordinate { x, y });
        }
        let x_frac = x.fract() != 0.0;
        let y_frac = y.fract() != 0.0;
        if x_frac && y_frac {
            return Err(SensorDataError::FractionalOnBothAxes { x, y });
        }

        let to_i32 = |v: f64| -> Result<i32, SensorDataError> {
            if v < i32::MIN as f64 || v > i32::MAX as f64 {
                Err(SensorDataError::CoordinateOutOfRange { x, y })
            } else {
                Ok(v as i32)
            }
        };

        if x_frac {
            let row = to_i32(y)?;
            Ok(smallvec![
                Position::new(to_i32(x.floor())?, row),
                Position::new(to_i32(x.ceil())?, row),
            ])
        } else if y_frac {
            let col = to_i32(x)?;
            Ok(smallvec![
                Position::new(col, to_i32(y.floor())?),
                Position::new(col, to_i32(y.ceil())?),
            ])
        } else {
            Ok(smallvec![Position::new(to_i32(x)?, to_i32(y)?)])
        }
    }
}

impl From<Position> for HazardPoint {
    fn from(p: Position) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

impl From<(f64, f64)> for HazardPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
