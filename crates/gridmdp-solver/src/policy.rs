//! Greedy one-step policy extraction.
//!
//! The planner already priced slip noise into the utilities. Choosing a
//! move only compares the utility of the cell one deterministic step away.

use crate::error::PolicyError;
use crate::utility::UtilityField;
use gridmdp_core::{CellId, Direction};
use gridmdp_space::Grid;
use smallvec::SmallVec;

/// Candidate directions with their scores.
pub type Ranking = SmallVec<[(Direction, f64); 5]>;

/// Cell reached by one deterministic step. Blocked steps stay in place.
fn landing(grid: &Grid, cell: CellId, direction: Direction) -> CellId {
    grid.neighbour(cell, direction).unwrap_or(cell)
}

/// Drop [`Direction::Stop`] from `legal` unless `allow_stop` is set or it is
/// the only move left.
pub fn candidates(legal: &[Direction], allow_stop: bool) -> SmallVec<[Direction; 5]> {
    let moving: SmallVec<[Direction; 5]> = legal
        .iter()
        .copied()
        .filter(|&d| allow_stop || d != Direction::Stop)
        .collect();
    if moving.is_empty() {
        legal.iter().copied().collect()
    } else {
        moving
    }
}

/// Direction in `legal` whose landing cell has the highest utility.
///
/// Ties go to the direction that appears first in `legal`.
///
/// # Errors
///
/// [`PolicyError::NoLegalMove`] if `legal` is empty.
pub fn best_direction(
    grid: &Grid,
    utilities: &UtilityField,
    cell: CellId,
    legal: &[Direction],
) -> Result<Direction, PolicyError> {
    let mut best: Option<(Direction, f64)> = None;
    for &d in legal {
        let score = utilities.get(landing(grid, cell, d));
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((d, score));
        }
    }
    best.map(|(d, _)| d).ok_or(PolicyError::NoLegalMove {
        position: grid.position(cell),
    })
}

/// Every direction in `legal` with its landing utility, best first.
///
/// The sort is stable, so equal scores keep their input order and the head
/// of the ranking agrees with [`best_direction`].
pub fn ranked_directions(
    grid: &Grid,
    utilities: &UtilityField,
    cell: CellId,
    legal: &[Direction],
) -> Ranking {
    let mut ranking: Ranking = legal
        .iter()
        .map(|&d| (d, utilities.get(landing(grid, cell, d))))
        .collect();
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranking
}
