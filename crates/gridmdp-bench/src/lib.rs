//! Benchmark layouts for the gridmdp decision engine.
//!
//! Provides deterministic [`Layout`] profiles for benchmarking:
//!
//! - [`reference_layout`]: 28x31 pillared arena, the size of a classic maze game board
//! - [`stress_layout`]: 100x100 pillared arena (~7.5K cells)
//! - [`hazard_positions`]: deterministic hazard placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridmdp_core::{HazardPoint, Position};
use gridmdp_engine::Layout;
use gridmdp_space::Bounds;

/// Arena with a pillar on every cell whose coordinates are both odd.
///
/// Every even row and column stays open, so the arena is connected. Goals
/// sit on every open cell whose coordinate sum is a multiple of four.
pub fn pillar_layout(width: i32, height: i32) -> Layout {
    let mut layout = Layout::new(Bounds::new(width, height).unwrap());
    for x in 0..width {
        for y in 0..height {
            let p = Position::new(x, y);
            if x % 2 == 1 && y % 2 == 1 {
                layout.obstacles.push(p);
            } else if (x + y) % 4 == 0 {
                layout.goals.push(p);
            }
        }
    }
    layout
}

/// 28x31 pillared arena.
pub fn reference_layout() -> Layout {
    pillar_layout(28, 31)
}

/// 100x100 pillared arena.
pub fn stress_layout() -> Layout {
    pillar_layout(100, 100)
}

/// Generate `n` deterministic hazard samples on open cells of `layout`.
///
/// Odd-numbered hazards are placed halfway to the next open cell east or
/// north, so benchmarks exercise the two-cell decomposition too.
pub fn hazard_positions(layout: &Layout, n: usize, seed: u64) -> Vec<HazardPoint> {
    let width = layout.bounds.width() as u64;
    let height = layout.bounds.height() as u64;
    let open = |p: Position| layout.bounds.contains(p) && !layout.obstacles.contains(&p);

    let mut hazards = Vec::with_capacity(n);
    let mut i = 0u64;
    while hazards.len() < n {
        let h = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407));
        i += 1;
        let p = Position::new(((h >> 17) % width) as i32, ((h >> 41) % height) as i32);
        if !open(p) {
            continue;
        }
        let sample = if hazards.len() % 2 == 1 {
            let east = Position::new(p.x + 1, p.y);
            let north = Position::new(p.x, p.y + 1);
            if open(east) {
                HazardPoint::new(p.x as f64 + 0.5, p.y as f64)
            } else if open(north) {
                HazardPoint::new(p.x as f64, p.y as f64 + 0.5)
            } else {
                HazardPoint::from(p)
            }
        } else {
            HazardPoint::from(p)
        };
        hazards.push(sample);
    }
    hazards
}
