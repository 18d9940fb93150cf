//! Text renderings of session state for logs.
//!
//! Both views borrow the session's state and format it lazily, so building
//! one costs nothing unless it is actually printed.

use std::fmt;

use gridmdp_core::Position;
use gridmdp_solver::{RewardLayers, UtilityField};
use gridmdp_space::Grid;

/// Character map of the grid, north row first.
///
/// | Symbol | Meaning |
/// |--------|---------|
/// | `#` | obstacle |
/// | `X` | cell occupied by a hazard |
/// | `.` | unconsumed goal |
/// | `~` | hazard spill onto a neighbour |
/// | space | anything else |
pub struct GridView<'a> {
    grid: &'a Grid,
    rewards: &'a RewardLayers,
}

impl<'a> GridView<'a> {
    /// View over `grid` with the given reward layers.
    pub fn new(grid: &'a Grid, rewards: &'a RewardLayers) -> Self {
        Self { grid, rewards }
    }

    fn symbol(&self, position: Position) -> char {
        let Some(cell) = self.grid.cell(position) else {
            return '#';
        };
        let values = self.rewards.values();
        if self.rewards.hazard_centres().any(|c| c == cell) {
            'X'
        } else if self.rewards.goal(cell) != values.neutral {
            '.'
        } else if self.rewards.hazard(cell) != values.baseline {
            '~'
        } else {
            ' '
        }
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self.grid.bounds();
        for y in (0..bounds.height()).rev() {
            let row: String = (0..bounds.width())
                .map(|x| self.symbol(Position::new(x, y)))
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Per-cell table of utility, goal reward, and hazard punishment.
pub struct UtilityView<'a> {
    grid: &'a Grid,
    rewards: &'a RewardLayers,
    utilities: &'a UtilityField,
}

impl<'a> UtilityView<'a> {
    /// View over the solved state of one session.
    pub fn new(grid: &'a Grid, rewards: &'a RewardLayers, utilities: &'a UtilityField) -> Self {
        Self {
            grid,
            rewards,
            utilities,
        }
    }
}

impl fmt::Display for UtilityView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10} {:>10} {:>8} {:>8}", "cell", "utility", "goal", "hazard")?;
        for cell in self.grid.cell_ids() {
            let position = self.grid.position(cell).to_string();
            writeln!(
                f,
                "{position:>10} {:>10.4} {:>8.2} {:>8.3}",
                self.utilities.get(cell),
                self.rewards.goal(cell),
                self.rewards.hazard(cell),
            )?;
        }
        Ok(())
    }
}
