//! Static description of an episode's world.

use gridmdp_core::Position;
use gridmdp_space::{Bounds, TopologyError};

/// Bounds, obstacles, and initial goals of one episode.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Grid extent.
    pub bounds: Bounds,
    /// Impassable positions. Those outside `bounds` are ignored.
    pub obstacles: Vec<Position>,
    /// Goal positions at the start of the episode.
    pub goals: Vec<Position>,
}

impl Layout {
    /// Layout with the given bounds and no obstacles or goals.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Layout whose bounds come from the grid's corner cells.
    ///
    /// Hosts that only report corners get the same extent as
    /// [`Bounds::from_corners`].
    pub fn from_corners(
        corners: &[Position],
        obstacles: impl IntoIterator<Item = Position>,
        goals: impl IntoIterator<Item = Position>,
    ) -> Result<Self, TopologyError> {
        Ok(Self {
            bounds: Bounds::from_corners(corners)?,
            obstacles: obstacles.into_iter().collect(),
            goals: goals.into_iter().collect(),
        })
    }

    /// Add obstacles.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Position>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Add goals.
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = Position>) -> Self {
        self.goals.extend(goals);
        self
    }
}
