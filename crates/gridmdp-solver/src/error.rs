//! Error types for solving and policy extraction.

use gridmdp_core::Position;
use std::error::Error;
use std::fmt;

/// Errors from [`ValueIteration::solve`](crate::ValueIteration::solve).
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The sweep cap or time budget ran out before convergence.
    ///
    /// The utility field keeps the last completed sweep, which is the best
    /// estimate available; callers may still extract a policy from it.
    ConvergenceTimeout {
        /// Sweeps completed.
        sweeps: u32,
        /// Largest per-cell change in the last completed sweep.
        residual: f64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergenceTimeout { sweeps, residual } => write!(
                f,
                "value iteration did not converge after {sweeps} sweeps (residual {residual})"
            ),
        }
    }
}

impl Error for SolveError {}

/// Errors from policy extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// The legal direction set was empty.
    NoLegalMove {
        /// Where the agent stood.
        position: Position,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLegalMove { position } => {
                write!(f, "no legal move at {position}")
            }
        }
    }
}

impl Error for PolicyError {}
