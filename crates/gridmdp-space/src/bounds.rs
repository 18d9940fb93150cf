//! Rectangular grid bounds.

use crate::error::TopologyError;
use gridmdp_core::Position;

/// Width and height of a grid whose south-west corner is the origin.
///
/// Valid coordinates are `0 <= x < width` and `0 <= y < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    /// Create bounds of `width` columns and `height` rows.
    ///
    /// Returns `Err(TopologyError::NonPositiveBounds)` if either is `<= 0`.
    ///
    /// ```
    /// use gridmdp_space::Bounds;
    ///
    /// let b = Bounds::new(3, 1).unwrap();
    /// assert_eq!(b.area(), 3);
    /// assert!(Bounds::new(0, 5).is_err());
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, TopologyError> {
        if width <= 0 || height <= 0 {
            return Err(TopologyError::NonPositiveBounds {
                width: width.into(),
                height: height.into(),
            });
        }
        Ok(Self { width, height })
    }

    /// Derive bounds from the corner cells of a layout.
    ///
    /// The corner farthest from the origin is the north-east corner
    /// `(width - 1, height - 1)`.
    pub fn from_corners(corners: &[Position]) -> Result<Self, TopologyError> {
        let origin = Position::new(0, 0);
        let far = corners
            .iter()
            .copied()
            .max_by_key(|c| c.manhattan(origin))
            .ok_or(TopologyError::NonPositiveBounds {
                width: 0,
                height: 0,
            })?;
        let width = i64::from(far.x) + 1;
        let height = i64::from(far.y) + 1;
        match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => Self::new(w, h),
            _ => Err(TopologyError::CellCountOverflow {
                count: width.unsigned_abs().saturating_mul(height.unsigned_abs()),
            }),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of coordinates inside the bounds, obstacles included.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether `position` is inside the bounds.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Human-readable description of the valid range.
    pub fn describe(&self) -> String {
        format!("[0, {}) x [0, {})", self.width, self.height)
    }
}
