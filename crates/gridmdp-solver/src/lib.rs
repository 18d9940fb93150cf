//! Decision-process machinery for gridmdp.
//!
//! Everything here borrows a [`Grid`](gridmdp_space::Grid) and keeps its
//! own per-cell state in dense vectors indexed by `CellId`.
//!
//! # Decision order
//!
//! 1. [`RewardLayers::update_hazards`]: full recompute of the hazard layer
//! 2. [`RewardLayers::consume_goal`]: point update of the goal layer
//! 3. [`ValueIteration::solve`]: Bellman sweeps over a [`UtilityField`]
//!    using the precomputed [`TransitionModel`]
//! 4. [`policy::best_direction`]: greedy one-step choice

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod policy;
pub mod reward;
pub mod transition;
pub mod utility;
pub mod value_iteration;

pub use error::{PolicyError, SolveError};
pub use policy::{best_direction, candidates, ranked_directions, Ranking};
pub use reward::{HazardUpdate, RewardLayers, RewardValues};
pub use transition::{Distribution, TransitionModel};
pub use utility::UtilityField;
pub use value_iteration::{SolveReport, ValueIteration};
