//! Goal and hazard reward layers.
//!
//! Positive goals change rarely (one is consumed at a time) while hazards
//! move every decision, so the two are kept in separate layers with their
//! own update paths. The reward a cell contributes to the Bellman backup is
//! the plain sum of both layers.

use gridmdp_core::{CellId, HazardPoint, Position, SensorDataError};
use gridmdp_space::Grid;
use indexmap::IndexSet;

/// Reward constants for both layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardValues {
    /// Goal layer value of an unconsumed goal. Default: 1.0.
    pub goal: f64,
    /// Goal layer value of every other cell. Default: 0.0.
    pub neutral: f64,
    /// Hazard layer value of a cell a hazard occupies. Default: -5.0.
    pub hazard: f64,
    /// Hazard layer value outside any hazard's reach. Default: -0.1.
    pub baseline: f64,
}

impl Default for RewardValues {
    fn default() -> Self {
        Self {
            goal: 1.0,
            neutral: 0.0,
            hazard: -5.0,
            baseline: -0.1,
        }
    }
}

/// Summary of one hazard layer recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardUpdate {
    /// Cells occupied by a hazard after decomposition (with repeats).
    pub hazard_cells: usize,
    /// Distinct cells that received a hazard contribution.
    pub touched: usize,
}

/// The two reward layers of one grid.
#[derive(Clone, Debug)]
pub struct RewardLayers {
    values: RewardValues,
    goal: Vec<f64>,
    hazard: Vec<f64>,
    /// Cells holding a hazard contribution from the last update.
    dirty: IndexSet<CellId>,
    /// Cells occupied by a hazard in the last update.
    centres: IndexSet<CellId>,
}

impl RewardLayers {
    /// Neutral goal layer and baseline hazard layer for every cell of `grid`.
    pub fn new(grid: &Grid, values: RewardValues) -> Self {
        let n = grid.cell_count();
        Self {
            values,
            goal: vec![values.neutral; n],
            hazard: vec![values.baseline; n],
            dirty: IndexSet::new(),
            centres: IndexSet::new(),
        }
    }

    /// Reward constants in use.
    pub fn values(&self) -> &RewardValues {
        &self.values
    }

    // ── Goal layer ──────────────────────────────────────────────

    /// Mark every position in `goals` as an unconsumed goal.
    ///
    /// All positions are validated before any cell is written. Returns the
    /// number of distinct goal cells set.
    pub fn seed_goals(
        &mut self,
        grid: &Grid,
        goals: impl IntoIterator<Item = Position>,
    ) -> Result<usize, SensorDataError> {
        let cells = goals
            .into_iter()
            .map(|p| grid.resolve(p))
            .collect::<Result<IndexSet<_>, _>>()?;
        for &cell in &cells {
            self.goal[cell.index()] = self.values.goal;
        }
        Ok(cells.len())
    }

    /// Reset the goal at `position` to neutral. O(1).
    ///
    /// Returns `true` if an unconsumed goal was there.
    pub fn consume_goal(&mut self, grid: &Grid, position: Position) -> Result<bool, SensorDataError> {
        let cell = grid.resolve(position)?;
        let slot = &mut self.goal[cell.index()];
        let had_goal = *slot != self.values.neutral;
        *slot = self.values.neutral;
        Ok(had_goal)
    }

    /// Number of cells whose goal value is not neutral.
    pub fn remaining_goals(&self) -> usize {
        self.goal.iter().filter(|&&g| g != self.values.neutral).count()
    }

    // ── Hazard layer ────────────────────────────────────────────

    /// Recompute the hazard layer from the current hazard samples.
    ///
    /// Each sample is split into the cells it occupies. Every occupied cell
    /// takes the full hazard value and each of its neighbours an even share
    /// of it; a cell reached more than once in the same update accumulates
    /// instead of being overwritten. Second-degree neighbours that received
    /// nothing are put back to the baseline, as is every cell the previous
    /// update touched and this one did not.
    ///
    /// All samples are validated first; on error the layer is unchanged.
    pub fn update_hazards(
        &mut self,
        grid: &Grid,
        hazards: &[HazardPoint],
    ) -> Result<HazardUpdate, SensorDataError> {
        let mut occupied = Vec::with_capacity(hazards.len() * 2);
        for h in hazards {
            for p in h.decompose()? {
                occupied.push(grid.resolve(p)?);
            }
        }

        let baseline = self.values.baseline;
        for &cell in &self.dirty {
            self.hazard[cell.index()] = baseline;
        }

        let hazard = self.values.hazard;
        let mut touched: IndexSet<CellId> = IndexSet::new();
        for &centre in &occupied {
            contribute(&mut self.hazard, &mut touched, centre, hazard);
            let neighbours = grid.neighbours(centre);
            if neighbours.is_empty() {
                continue;
            }
            let share = hazard / neighbours.len() as f64;
            for &nb in &neighbours {
                contribute(&mut self.hazard, &mut touched, nb, share);
                for second in grid.neighbours(nb) {
                    if !touched.contains(&second) {
                        self.hazard[second.index()] = baseline;
                    }
                }
            }
        }

        self.centres = occupied.iter().copied().collect();
        let update = HazardUpdate {
            hazard_cells: occupied.len(),
            touched: touched.len(),
        };
        self.dirty = touched;
        Ok(update)
    }

    /// Cells occupied by a hazard in the last update.
    pub fn hazard_centres(&self) -> impl Iterator<Item = CellId> + '_ {
        self.centres.iter().copied()
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Goal layer value of `cell`.
    pub fn goal(&self, cell: CellId) -> f64 {
        self.goal[cell.index()]
    }

    /// Hazard layer value of `cell`.
    pub fn hazard(&self, cell: CellId) -> f64 {
        self.hazard[cell.index()]
    }

    /// Reward used by the Bellman backup: goal plus hazard.
    pub fn combined(&self, cell: CellId) -> f64 {
        self.goal[cell.index()] + self.hazard[cell.index()]
    }
}

/// Set `cell` on first touch within an update, accumulate afterwards.
fn contribute(layer: &mut [f64], touched: &mut IndexSet<CellId>, cell: CellId, amount: f64) {
    if touched.insert(cell) {
        layer[cell.index()] = amount;
    } else {
        layer[cell.index()] += amount;
    }
}
