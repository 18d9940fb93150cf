//! Grid graph compliance test helpers.
//!
//! These functions verify that a grid satisfies the invariants every
//! consumer of the graph relies on. Reused across the grid test modules.

use crate::grid::Grid;
use gridmdp_core::Direction;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for a in grid.cell_ids() {
        for b in grid.neighbours(a) {
            assert!(
                grid.neighbours(b).contains(&a),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Assert that every neighbour is exactly one Manhattan step away.
pub fn assert_neighbours_unit_distance(grid: &Grid) {
    for a in grid.cell_ids() {
        for b in grid.neighbours(a) {
            let d = grid.position(a).manhattan(grid.position(b));
            assert_eq!(d, 1, "neighbour {b} of {a} is at distance {d}");
        }
    }
}

/// Assert that the legal direction set names exactly the open sides.
pub fn assert_legal_matches_neighbours(grid: &Grid) {
    for id in grid.cell_ids() {
        let legal = grid.legal_directions(id);
        assert!(!legal.contains(Direction::Stop), "Stop is never a topological move");
        assert_eq!(legal.len(), grid.neighbours(id).len());
        for d in legal.iter() {
            assert!(grid.neighbour(id, d).is_some(), "{d} legal at {id} but blocked");
        }
    }
}

/// Assert that canonical order is complete, unique and round-trips.
pub fn assert_canonical_order_complete(grid: &Grid) {
    let positions: Vec<_> = grid.positions().collect();
    assert_eq!(positions.len(), grid.cell_count());
    let unique: IndexSet<_> = positions.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "canonical order has duplicates");
    for id in grid.cell_ids() {
        assert_eq!(grid.cell(grid.position(id)), Some(id));
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_unit_distance(grid);
    assert_legal_matches_neighbours(grid);
    assert_canonical_order_complete(grid);
}
