//! Criterion micro-benchmarks for grid, transition, and solver operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridmdp_bench::{hazard_positions, reference_layout, stress_layout};
use gridmdp_engine::Layout;
use gridmdp_solver::{RewardLayers, RewardValues, TransitionModel, UtilityField, ValueIteration};
use gridmdp_space::Grid;

fn grid_for(layout: &Layout) -> Grid {
    Grid::build(layout.bounds, layout.obstacles.iter().copied()).unwrap()
}

fn rewards_for(grid: &Grid, layout: &Layout) -> RewardLayers {
    let mut rewards = RewardLayers::new(grid, RewardValues::default());
    rewards.seed_goals(grid, layout.goals.iter().copied()).unwrap();
    rewards
}

/// Benchmark: build the grid graph for the 100x100 stress arena.
fn bench_grid_build_stress(c: &mut Criterion) {
    let layout = stress_layout();
    c.bench_function("grid_build_stress", |b| {
        b.iter(|| black_box(grid_for(&layout)));
    });
}

/// Benchmark: precompute every transition distribution on the reference arena.
fn bench_transition_build_reference(c: &mut Criterion) {
    let grid = grid_for(&reference_layout());
    c.bench_function("transition_build_reference", |b| {
        b.iter(|| black_box(TransitionModel::build(&grid, 0.8)));
    });
}

/// Benchmark: recompute the hazard layer for 8 hazards, half of them between cells.
fn bench_hazard_update_reference(c: &mut Criterion) {
    let layout = reference_layout();
    let grid = grid_for(&layout);
    let mut rewards = rewards_for(&grid, &layout);
    let waves: Vec<_> = (0..16).map(|s| hazard_positions(&layout, 8, s)).collect();

    c.bench_function("hazard_update_reference", |b| {
        let mut i = 0;
        b.iter(|| {
            let update = rewards.update_hazards(&grid, &waves[i % waves.len()]).unwrap();
            i += 1;
            black_box(update);
        });
    });
}

/// Benchmark: solve the reference arena from a cold start.
fn bench_cold_solve_reference(c: &mut Criterion) {
    let layout = reference_layout();
    let grid = grid_for(&layout);
    let model = TransitionModel::build(&grid, 0.8);
    let mut rewards = rewards_for(&grid, &layout);
    rewards
        .update_hazards(&grid, &hazard_positions(&layout, 4, 1))
        .unwrap();
    let solver = ValueIteration::new(0.65, 0.1);

    c.bench_function("cold_solve_reference", |b| {
        b.iter(|| {
            let mut utilities = UtilityField::new(grid.cell_count());
            let report = solver.solve(&grid, &model, &rewards, &mut utilities).unwrap();
            black_box(report);
        });
    });
}

/// Benchmark: one Bellman sweep over the 100x100 stress arena.
fn bench_single_sweep_stress(c: &mut Criterion) {
    let layout = stress_layout();
    let grid = grid_for(&layout);
    let model = TransitionModel::build(&grid, 0.8);
    let rewards = rewards_for(&grid, &layout);
    let solver = ValueIteration::new(0.65, 0.1);
    let mut utilities = UtilityField::new(grid.cell_count());
    utilities.seed(|cell| rewards.combined(cell));

    c.bench_function("single_sweep_stress", |b| {
        b.iter(|| {
            let residual =
                utilities.sweep(|prev, cell| solver.backup(&grid, &model, &rewards, prev, cell));
            black_box(residual);
        });
    });
}

criterion_group!(
    benches,
    bench_grid_build_stress,
    bench_transition_build_reference,
    bench_hazard_update_reference,
    bench_cold_solve_reference,
    bench_single_sweep_stress
);
criterion_main!(benches);
