//! Per-decision metrics.
//!
//! [`DecisionMetrics`] captures solver effort and hazard load for a single
//! decision, so a host can watch latency and convergence over an episode.

/// Solver and sensor figures collected during one decision.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionMetrics {
    /// Bellman sweeps run by the solver.
    pub sweeps: u32,
    /// Largest per-cell change in the last sweep.
    pub residual: f64,
    /// Wall-clock time spent in the solver, in microseconds.
    pub solve_us: u64,
    /// Grid cells occupied by hazards after decomposition.
    pub hazard_cells: usize,
    /// Whether the solver reached the threshold within its budget.
    pub converged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = DecisionMetrics::default();
        assert_eq!(m.sweeps, 0);
        assert_eq!(m.residual, 0.0);
        assert_eq!(m.solve_us, 0);
        assert_eq!(m.hazard_cells, 0);
        assert!(!m.converged);
    }
}
