//! gridmdp: a grid-world Markov decision process engine for game agents.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridmdp sub-crates. For most users, adding `gridmdp` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridmdp::prelude::*;
//!
//! // A 3x1 corridor with a goal at the east end.
//! let layout = Layout::new(Bounds::new(3, 1).unwrap())
//!     .with_goals([Position::new(2, 0)]);
//! let mut session = Session::initialize(MdpConfig::default(), &layout).unwrap();
//!
//! let observation = Observation::at(
//!     Position::new(0, 0),
//!     [Direction::East, Direction::West],
//! );
//! let decision = session.decide(&observation).unwrap();
//! assert_eq!(decision.direction, Direction::East);
//! assert!(decision.metrics.converged);
//!
//! // Hazards may sit between two cells on one axis.
//! let observation = Observation::at(Position::new(1, 0), [Direction::East, Direction::West])
//!     .with_hazards([HazardPoint::new(0.5, 0.0)]);
//! let decision = session.decide(&observation).unwrap();
//! assert_eq!(decision.metrics.hazard_cells, 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridmdp-core` | Positions, cell ids, directions, hazard samples |
//! | [`space`] | `gridmdp-space` | Bounds and the grid graph |
//! | [`solver`] | `gridmdp-solver` | Transitions, reward layers, value iteration, policy |
//! | [`engine`] | `gridmdp-engine` | Sessions, configuration, host seams, views |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`gridmdp-core`).
///
/// [`types::Position`], [`types::CellId`], [`types::Direction`], and the
/// [`types::HazardPoint`] samples a world sensor reports.
pub use gridmdp_core as types;

/// Grid graph (`gridmdp-space`).
pub use gridmdp_space as space;

/// Decision-process machinery (`gridmdp-solver`).
///
/// Usable without a session: build a [`solver::TransitionModel`] and
/// [`solver::RewardLayers`] over a grid, then run
/// [`solver::ValueIteration`] directly.
pub use gridmdp_solver as solver;

/// Per-episode sessions (`gridmdp-engine`).
pub use gridmdp_engine as engine;

/// Common imports for typical gridmdp usage.
///
/// ```rust
/// use gridmdp::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridmdp_core::{CellId, Direction, HazardPoint, Position};

    // Space
    pub use gridmdp_space::{Bounds, Grid};

    // Solver
    pub use gridmdp_solver::{RewardValues, UtilityField};

    // Engine
    pub use gridmdp_engine::{
        Decision, DecisionMetrics, Layout, MdpConfig, MoveIssuer, Observation, Session,
        WorldSensor,
    };

    // Errors
    pub use gridmdp_core::SensorDataError;
    pub use gridmdp_engine::{ConfigError, DecideError, HostError, InitError};
    pub use gridmdp_solver::{PolicyError, SolveError};
    pub use gridmdp_space::TopologyError;
}
