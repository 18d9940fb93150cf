//! Value iteration by synchronous Bellman backup.
//!
//! ```text
//! U'(s) = R(s) + γ · max_a Σ_s' P(s' | s, a) · U(s')
//! ```
//!
//! Sweeps repeat until no cell changes by more than the threshold. With
//! `0 < γ < 1` the backup is a contraction, so the loop converges; the
//! sweep cap and optional time budget bound the worst case anyway.

use crate::error::SolveError;
use crate::reward::RewardLayers;
use crate::transition::TransitionModel;
use crate::utility::UtilityField;
use gridmdp_core::CellId;
use gridmdp_space::Grid;
use std::time::{Duration, Instant};

/// Outcome of a converged solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveReport {
    /// Sweeps run.
    pub sweeps: u32,
    /// Largest per-cell change in the final sweep.
    pub residual: f64,
}

/// Value iteration parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueIteration {
    discount: f64,
    threshold: f64,
    max_sweeps: u32,
    time_budget: Option<Duration>,
}

impl ValueIteration {
    /// Default sweep cap.
    pub const DEFAULT_MAX_SWEEPS: u32 = 10_000;

    /// Create a solver with discount `γ` and convergence `threshold`.
    ///
    /// `discount` is expected in `(0, 1)` and `threshold` non-negative;
    /// the engine config validates both.
    pub fn new(discount: f64, threshold: f64) -> Self {
        Self {
            discount,
            threshold,
            max_sweeps: Self::DEFAULT_MAX_SWEEPS,
            time_budget: None,
        }
    }

    /// Cap the number of sweeps per solve.
    pub fn with_max_sweeps(mut self, max_sweeps: u32) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Cap the wall-clock time per solve. Checked between sweeps.
    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }

    /// Discount factor.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Convergence threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Sweep cap.
    pub fn max_sweeps(&self) -> u32 {
        self.max_sweeps
    }

    /// Bellman backup of one cell against the previous sweep's utilities.
    ///
    /// A cell with no legal direction keeps its immediate reward.
    pub fn backup(
        &self,
        grid: &Grid,
        model: &TransitionModel,
        rewards: &RewardLayers,
        previous: &[f64],
        cell: CellId,
    ) -> f64 {
        let best = grid
            .legal_directions(cell)
            .iter()
            .filter_map(|d| model.expectation(cell, d, previous))
            .reduce(f64::max);
        let reward = rewards.combined(cell);
        match best {
            Some(expected) => reward + self.discount * expected,
            None => reward,
        }
    }

    /// Iterate until convergence, updating `utilities` in place.
    ///
    /// An unseeded field starts from the combined rewards; a seeded one
    /// warm-starts from its current values.
    ///
    /// # Errors
    ///
    /// [`SolveError::ConvergenceTimeout`] if the sweep cap or time budget
    /// runs out. `utilities` then holds the last completed sweep.
    pub fn solve(
        &self,
        grid: &Grid,
        model: &TransitionModel,
        rewards: &RewardLayers,
        utilities: &mut UtilityField,
    ) -> Result<SolveReport, SolveError> {
        if !utilities.is_seeded() {
            utilities.seed(|cell| rewards.combined(cell));
        }

        let started = Instant::now();
        let mut sweeps = 0;
        let mut residual = f64::INFINITY;
        while sweeps < self.max_sweeps {
            residual = utilities.sweep(|prev, cell| self.backup(grid, model, rewards, prev, cell));
            sweeps += 1;
            if residual <= self.threshold {
                tracing::debug!(sweeps, residual, "value iteration converged");
                return Ok(SolveReport { sweeps, residual });
            }
            if self.time_budget.is_some_and(|b| started.elapsed() >= b) {
                break;
            }
        }

        tracing::warn!(sweeps, residual, "value iteration stopped before convergence");
        Err(SolveError::ConvergenceTimeout { sweeps, residual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardValues;
    use gridmdp_core::{HazardPoint, Position};
    use gridmdp_space::Bounds;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    struct Fixture {
        grid: Grid,
        model: TransitionModel,
        rewards: RewardLayers,
    }

    fn corridor_with_goal(goal: f64) -> Fixture {
        let grid = Grid::build(Bounds::new(3, 1).unwrap(), []).unwrap();
        let model = TransitionModel::build(&grid, 0.8);
        let values = RewardValues {
            goal,
            ..RewardValues::default()
        };
        let mut rewards = RewardLayers::new(&grid, values);
        rewards.seed_goals(&grid, [p(2, 0)]).unwrap();
        Fixture {
            grid,
            model,
            rewards,
        }
    }

    fn solve(f: &Fixture, solver: &ValueIteration) -> (UtilityField, SolveReport) {
        let mut u = UtilityField::new(f.grid.cell_count());
        let report = solver.solve(&f.grid, &f.model, &f.rewards, &mut u).unwrap();
        (u, report)
    }

    #[test]
    fn corridor_utilities_increase_toward_goal() {
        let f = corridor_with_goal(10.0);
        let (u, report) = solve(&f, &ValueIteration::new(0.9, 0.01));
        assert!(report.residual <= 0.01);
        let at = |x| u.get(f.grid.cell(p(x, 0)).unwrap());
        assert!(at(0) < at(1), "{} !< {}", at(0), at(1));
        assert!(at(1) < at(2), "{} !< {}", at(1), at(2));
    }

    #[test]
    fn converged_field_is_a_fixed_point() {
        let f = corridor_with_goal(10.0);
        let solver = ValueIteration::new(0.9, 1e-9);
        let (u, _) = solve(&f, &solver);
        for cell in f.grid.cell_ids() {
            let again = solver.backup(&f.grid, &f.model, &f.rewards, u.as_slice(), cell);
            assert!((again - u.get(cell)).abs() < 1e-7);
        }
    }

    #[test]
    fn identical_inputs_give_identical_fields() {
        let f = corridor_with_goal(10.0);
        let solver = ValueIteration::new(0.65, 0.1);
        let (a, ra) = solve(&f, &solver);
        let (b, rb) = solve(&f, &solver);
        assert_eq!(a.as_slice(), b.as_slice());
        assert_eq!(ra, rb);
    }

    #[test]
    fn isolated_cell_keeps_its_reward() {
        let grid = Grid::build(Bounds::new(3, 1).unwrap(), [p(1, 0)]).unwrap();
        let model = TransitionModel::build(&grid, 0.8);
        let mut rewards = RewardLayers::new(&grid, RewardValues::default());
        rewards.seed_goals(&grid, [p(0, 0)]).unwrap();
        let mut u = UtilityField::new(grid.cell_count());
        ValueIteration::new(0.9, 0.01)
            .solve(&grid, &model, &rewards, &mut u)
            .unwrap();
        let cell = grid.cell(p(0, 0)).unwrap();
        assert_eq!(u.get(cell), rewards.combined(cell));
    }

    #[test]
    fn hazard_depresses_utility() {
        let mut f = corridor_with_goal(10.0);
        let solver = ValueIteration::new(0.9, 0.01);
        let (calm, _) = solve(&f, &solver);
        f.rewards
            .update_hazards(&f.grid, &[HazardPoint::new(1.0, 0.0)])
            .unwrap();
        let (risky, _) = solve(&f, &solver);
        let mid = f.grid.cell(p(1, 0)).unwrap();
        assert!(risky.get(mid) < calm.get(mid) - 4.0);
    }

    #[test]
    fn sweep_cap_reports_timeout_with_progress() {
        let f = corridor_with_goal(10.0);
        let solver = ValueIteration::new(0.99, 1e-12).with_max_sweeps(3);
        let mut u = UtilityField::new(f.grid.cell_count());
        let err = solver.solve(&f.grid, &f.model, &f.rewards, &mut u).unwrap_err();
        match err {
            SolveError::ConvergenceTimeout { sweeps, residual } => {
                assert_eq!(sweeps, 3);
                assert!(residual > 1e-12);
            }
        }
        // Progress is kept: the goal cell has grown past its raw reward.
        let goal = f.grid.cell(p(2, 0)).unwrap();
        assert!(u.get(goal) > f.rewards.combined(goal));
    }

    #[test]
    fn zero_time_budget_stops_after_first_sweep() {
        let f = corridor_with_goal(10.0);
        let solver = ValueIteration::new(0.99, 1e-12).with_time_budget(Some(Duration::ZERO));
        let mut u = UtilityField::new(f.grid.cell_count());
        assert!(matches!(
            solver.solve(&f.grid, &f.model, &f.rewards, &mut u),
            Err(SolveError::ConvergenceTimeout { sweeps: 1, .. })
        ));
    }

    #[test]
    fn warm_start_converges_faster() {
        let f = corridor_with_goal(10.0);
        let solver = ValueIteration::new(0.9, 0.01);
        let mut u = UtilityField::new(f.grid.cell_count());
        let cold = solver.solve(&f.grid, &f.model, &f.rewards, &mut u).unwrap();
        let warm = solver.solve(&f.grid, &f.model, &f.rewards, &mut u).unwrap();
        assert!(warm.sweeps < cold.sweeps);
    }
}
