//! One episode of decision making.
//!
//! A [`Session`] owns the grid built from an episode's [`Layout`] together
//! with everything derived from it: the transition table, both reward
//! layers, and the utility field that warm-starts each solve from the
//! previous decision's result.
//!
//! Each [`decide`](Session::decide) runs, in order:
//!
//! 1. validate the observation
//! 2. recompute the hazard layer
//! 3. consume any goal under the agent or reported by the host
//! 4. solve to convergence (or budget exhaustion)
//! 5. pick the best legal move

use std::time::{Duration, Instant};

use gridmdp_core::{CellId, Direction, Position};
use gridmdp_solver::{
    policy, PolicyError, RewardLayers, SolveError, SolveReport, TransitionModel, UtilityField,
    ValueIteration,
};
use gridmdp_space::Grid;
use tracing::instrument;

use crate::config::MdpConfig;
use crate::error::{DecideError, InitError};
use crate::host::{MoveIssuer, Observation, WorldSensor};
use crate::layout::Layout;
use crate::metrics::DecisionMetrics;
use crate::view::{GridView, UtilityView};

/// Outcome of one decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    /// Chosen move, drawn from the observation's legal set.
    pub direction: Direction,
    /// Solver and sensor figures for this decision.
    pub metrics: DecisionMetrics,
}

/// Per-episode decision state.
#[derive(Debug)]
pub struct Session {
    config: MdpConfig,
    solver: ValueIteration,
    grid: Grid,
    model: TransitionModel,
    rewards: RewardLayers,
    utilities: UtilityField,
    decisions: u64,
}

impl Session {
    /// Build the grid for `layout` and seed its goals.
    ///
    /// # Errors
    ///
    /// [`InitError::Config`] if `config` is invalid,
    /// [`InitError::Topology`] if the layout leaves no usable grid, and
    /// [`InitError::Sensor`] if a goal is off-grid or on an obstacle.
    pub fn initialize(config: MdpConfig, layout: &Layout) -> Result<Self, InitError> {
        config.validate()?;
        let grid = Grid::build(layout.bounds, layout.obstacles.iter().copied())?;
        let model = TransitionModel::build(&grid, config.noise);
        let mut rewards = RewardLayers::new(&grid, config.rewards);
        let goals = rewards.seed_goals(&grid, layout.goals.iter().copied())?;
        let utilities = UtilityField::new(grid.cell_count());

        tracing::info!(
            cells = grid.cell_count(),
            goals,
            bounds = %layout.bounds.describe(),
            "session initialized"
        );
        tracing::trace!("initial map\n{}", GridView::new(&grid, &rewards));

        Ok(Self {
            solver: config.solver(),
            config,
            grid,
            model,
            rewards,
            utilities,
            decisions: 0,
        })
    }

    /// Replace all episode state with a fresh grid for `layout`.
    ///
    /// The configuration is kept. On error the current episode is left
    /// untouched.
    pub fn reset(&mut self, layout: &Layout) -> Result<(), InitError> {
        *self = Self::initialize(self.config.clone(), layout)?;
        Ok(())
    }

    /// Choose a move for the given observation.
    ///
    /// # Errors
    ///
    /// [`DecideError::Sensor`] if the agent, a hazard, or the consumed goal
    /// is not on a traversable cell. [`DecideError::Policy`] if the legal
    /// set is empty. No state changes in either case.
    #[instrument(skip_all, fields(decision = self.decisions, position = %observation.position))]
    pub fn decide(&mut self, observation: &Observation) -> Result<Decision, DecideError> {
        let here = self.grid.resolve(observation.position)?;
        if let Some(goal) = observation.consumed_goal {
            self.grid.resolve(goal)?;
        }
        let candidates = policy::candidates(&observation.legal, self.config.allow_stop);
        if candidates.is_empty() {
            return Err(PolicyError::NoLegalMove {
                position: observation.position,
            }
            .into());
        }

        let update = self.rewards.update_hazards(&self.grid, &observation.hazards)?;
        self.consume(observation.position)?;
        if let Some(goal) = observation.consumed_goal {
            self.consume(goal)?;
        }

        let started = Instant::now();
        let outcome = self
            .solver
            .solve(&self.grid, &self.model, &self.rewards, &mut self.utilities);
        let solve_us = micros(started.elapsed());
        let (report, converged) = match outcome {
            Ok(report) => (report, true),
            Err(SolveError::ConvergenceTimeout { sweeps, residual }) => {
                tracing::warn!(
                    sweeps,
                    residual,
                    "solver budget exhausted, using best utilities so far"
                );
                (SolveReport { sweeps, residual }, false)
            }
        };
        tracing::trace!(
            "utilities\n{}",
            UtilityView::new(&self.grid, &self.rewards, &self.utilities)
        );

        let direction = self.choose(here, &candidates)?;
        self.decisions += 1;

        let metrics = DecisionMetrics {
            sweeps: report.sweeps,
            residual: report.residual,
            solve_us,
            hazard_cells: update.hazard_cells,
            converged,
        };
        tracing::debug!(
            %direction,
            sweeps = metrics.sweeps,
            residual = metrics.residual,
            solve_us,
            "decided"
        );
        Ok(Decision { direction, metrics })
    }

    /// Sense, decide, and hand the chosen move to the host.
    pub fn step<S, I>(&mut self, sensor: &mut S, issuer: &mut I) -> Result<Decision, DecideError>
    where
        S: WorldSensor + ?Sized,
        I: MoveIssuer + ?Sized,
    {
        let observation = sensor.sense();
        let decision = self.decide(&observation)?;
        issuer.issue(decision.direction, &observation.legal)?;
        Ok(decision)
    }

    fn consume(&mut self, position: Position) -> Result<(), DecideError> {
        if self.rewards.consume_goal(&self.grid, position)? {
            tracing::debug!(%position, remaining = self.rewards.remaining_goals(), "goal consumed");
        }
        Ok(())
    }

    fn choose(&self, here: CellId, candidates: &[Direction]) -> Result<Direction, DecideError> {
        if tracing::enabled!(tracing::Level::TRACE) {
            let ranking = policy::ranked_directions(&self.grid, &self.utilities, here, candidates);
            tracing::trace!(?ranking, "candidate moves");
        }
        Ok(policy::best_direction(
            &self.grid,
            &self.utilities,
            here,
            candidates,
        )?)
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Configuration in use.
    pub fn config(&self) -> &MdpConfig {
        &self.config
    }

    /// The episode's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current reward layers.
    pub fn rewards(&self) -> &RewardLayers {
        &self.rewards
    }

    /// Utilities from the most recent solve.
    pub fn utilities(&self) -> &UtilityField {
        &self.utilities
    }

    /// Utility of `position`, if it is a traversable cell.
    pub fn utility_at(&self, position: Position) -> Option<f64> {
        self.grid.cell(position).map(|c| self.utilities.get(c))
    }

    /// Decisions made so far this episode.
    pub fn decisions(&self) -> u64 {
        self.decisions
    }

    /// Character map of the current state.
    pub fn grid_view(&self) -> GridView<'_> {
        GridView::new(&self.grid, &self.rewards)
    }

    /// Per-cell utility table of the current state.
    pub fn utility_view(&self) -> UtilityView<'_> {
        UtilityView::new(&self.grid, &self.rewards, &self.utilities)
    }
}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
