//! Decision engine for grid-world agents.
//!
//! A [`Session`] covers one episode: it is built from a [`Layout`] and an
//! [`MdpConfig`], then answers one [`Observation`] per turn with a
//! [`Decision`]. Hosts plug in through the [`WorldSensor`] and
//! [`MoveIssuer`] traits and drive the loop with [`Session::step`].
//!
//! Logging goes through `tracing`; the engine never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod host;
pub mod layout;
pub mod metrics;
pub mod session;
pub mod view;

pub use config::{ConfigError, MdpConfig};
pub use error::{DecideError, InitError};
pub use host::{HostError, MoveIssuer, Observation, WorldSensor};
pub use layout::Layout;
pub use metrics::DecisionMetrics;
pub use session::{Decision, Session};
pub use view::{GridView, UtilityView};
