//! Noisy action-transition model.
//!
//! An attempted move lands on the intended neighbour with probability
//! `noise`; the rest slips evenly to the two perpendicular sides. A slip
//! into a wall or the boundary leaves the mover where it was, so the source
//! cell collects that share and every distribution sums to exactly 1.

use gridmdp_core::{CellId, Direction};
use gridmdp_space::Grid;
use smallvec::SmallVec;

/// Outcome distribution of one attempted move: `(result cell, probability)`.
///
/// At most three outcomes: the intended cell, one side, and either the
/// other side or the source cell.
pub type Distribution = SmallVec<[(CellId, f64); 3]>;

/// `P(s' | s, a)` for every cell and every topologically legal direction.
///
/// Precomputed once from the grid. Topology is fixed for an episode, so the
/// table is never rebuilt or mutated.
#[derive(Clone, Debug)]
pub struct TransitionModel {
    noise: f64,
    /// `table[cell][d]` for cardinal direction `d`; `None` where blocked.
    table: Vec<[Option<Distribution>; 4]>,
}

impl TransitionModel {
    /// Build the model for `grid` with intended-direction mass `noise`.
    ///
    /// `noise` is expected in `[0, 1]`; the engine config validates it.
    ///
    /// ```
    /// use gridmdp_core::{Direction, Position};
    /// use gridmdp_space::{Bounds, Grid};
    /// use gridmdp_solver::TransitionModel;
    ///
    /// let grid = Grid::build(Bounds::new(3, 1).unwrap(), []).unwrap();
    /// let model = TransitionModel::build(&grid, 0.8);
    /// let start = grid.cell(Position::new(0, 0)).unwrap();
    /// let dist = model.distribution(start, Direction::East).unwrap();
    /// // 0.8 east, both perpendicular slips bounce back onto the start cell.
    /// assert_eq!(dist.len(), 2);
    /// let total: f64 = dist.iter().map(|(_, p)| p).sum();
    /// assert!((total - 1.0).abs() < 1e-12);
    /// ```
    pub fn build(grid: &Grid, noise: f64) -> Self {
        let table = grid
            .cell_ids()
            .map(|cell| {
                let mut row: [Option<Distribution>; 4] = Default::default();
                for (slot, d) in Direction::CARDINAL.into_iter().enumerate() {
                    if let Some(target) = grid.neighbour(cell, d) {
                        row[slot] = Some(Self::outcomes(grid, cell, d, target, noise));
                    }
                }
                row
            })
            .collect();
        Self { noise, table }
    }

    fn outcomes(
        grid: &Grid,
        cell: CellId,
        intended: Direction,
        target: CellId,
        noise: f64,
    ) -> Distribution {
        let sides = intended.orthogonal();
        let share = (1.0 - noise) / sides.len() as f64;

        let mut dist = Distribution::new();
        if noise > 0.0 {
            dist.push((target, noise));
        }
        let mut stay = 0.0;
        for &side in sides {
            match grid.neighbour(cell, side) {
                Some(n) if share > 0.0 => dist.push((n, share)),
                Some(_) => {}
                None => stay += share,
            }
        }
        if stay > 0.0 {
            dist.push((cell, stay));
        }
        dist
    }

    /// Intended-direction probability mass.
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Number of cells covered by the table.
    pub fn cell_count(&self) -> usize {
        self.table.len()
    }

    /// Outcome distribution for attempting `direction` from `cell`.
    ///
    /// `None` if `direction` is `Stop` or not legal for `cell`.
    pub fn distribution(&self, cell: CellId, direction: Direction) -> Option<&[(CellId, f64)]> {
        match direction {
            Direction::Stop => None,
            d => self.table[cell.index()][d as usize].as_deref(),
        }
    }

    /// Expected value of `values` after attempting `direction` from `cell`.
    pub fn expectation(&self, cell: CellId, direction: Direction, values: &[f64]) -> Option<f64> {
        self.distribution(cell, direction)
            .map(|dist| dist.iter().map(|&(s, p)| p * values[s.index()]).sum())
    }
}
