//! Session-level error types.

use std::error::Error;
use std::fmt;

use gridmdp_core::SensorDataError;
use gridmdp_solver::PolicyError;
use gridmdp_space::TopologyError;

use crate::config::ConfigError;
use crate::host::HostError;

/// Errors from [`Session::initialize`](crate::Session::initialize) and
/// [`Session::reset`](crate::Session::reset).
#[derive(Clone, Debug, PartialEq)]
pub enum InitError {
    /// Bounds or obstacles do not describe a usable grid.
    Topology(TopologyError),
    /// A goal position is outside the grid or on an obstacle.
    Sensor(SensorDataError),
    /// Configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topology(e) => write!(f, "topology: {e}"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Topology(e) => Some(e),
            Self::Sensor(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<TopologyError> for InitError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

impl From<SensorDataError> for InitError {
    fn from(e: SensorDataError) -> Self {
        Self::Sensor(e)
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Errors from a single decision.
///
/// A solver timeout is not an error here: the session falls back to the
/// utilities it has and flags the decision as unconverged.
#[derive(Clone, Debug, PartialEq)]
pub enum DecideError {
    /// The observation contained unusable positions.
    Sensor(SensorDataError),
    /// No move could be chosen.
    Policy(PolicyError),
    /// The host refused the chosen move.
    Host(HostError),
}

impl fmt::Display for DecideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Policy(e) => write!(f, "policy: {e}"),
            Self::Host(e) => write!(f, "host: {e}"),
        }
    }
}

impl Error for DecideError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sensor(e) => Some(e),
            Self::Policy(e) => Some(e),
            Self::Host(e) => Some(e),
        }
    }
}

impl From<SensorDataError> for DecideError {
    fn from(e: SensorDataError) -> Self {
        Self::Sensor(e)
    }
}

impl From<PolicyError> for DecideError {
    fn from(e: PolicyError) -> Self {
        Self::Policy(e)
    }
}

impl From<HostError> for DecideError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmdp_core::Position;

    #[test]
    fn sources_chain_to_inner_error() {
        let inner = SensorDataError::Obstacle {
            position: Position::new(1, 1),
        };
        let err = DecideError::from(inner.clone());
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source, Some(inner.to_string()));
    }

    #[test]
    fn init_display_names_the_stage() {
        let err = InitError::from(ConfigError::ZeroSweepCap);
        assert!(err.to_string().starts_with("config:"));
    }
}
