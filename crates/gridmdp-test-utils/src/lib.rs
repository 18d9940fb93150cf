//! Test utilities for gridmdp development.
//!
//! Provides layout fixtures (including an ASCII map parser) and
//! [`MockWorld`], a seeded simulation that implements both host seams so a
//! [`Session`](gridmdp_engine::Session) can play whole episodes in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod world;

pub use fixtures::{corridor, open_room, parse, Scene, MEDIUM_MAZE, SMALL_MAZE};
pub use world::{play, EpisodeReport, MockWorld, Outcome};
