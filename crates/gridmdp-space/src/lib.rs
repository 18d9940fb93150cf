//! Grid graph for gridmdp.
//!
//! A [`Grid`] is the state graph of the decision process: one cell per
//! traversable coordinate inside a rectangular [`Bounds`], joined to its
//! 4-connected traversable neighbours. Topology is fixed at construction;
//! everything that varies during an episode (rewards, utilities) lives in
//! per-cell vectors indexed by [`CellId`](gridmdp_core::CellId).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::Bounds;
pub use error::TopologyError;
pub use grid::Grid;
