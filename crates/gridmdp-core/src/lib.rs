//! Core types for the gridmdp decision engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid positions
//! and dense cell ids, movement directions, hazard samples reported by a
//! world sensor, and the error raised when sensor data is malformed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod hazard;
pub mod id;

pub use direction::{Direction, DirectionSet};
pub use error::SensorDataError;
pub use hazard::HazardPoint;
pub use id::{CellId, Position};
