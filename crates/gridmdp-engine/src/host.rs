//! Seams to the simulation that hosts the agent.
//!
//! The engine never observes or moves anything itself. A [`WorldSensor`]
//! reports what the agent can see at each decision point and a
//! [`MoveIssuer`] carries out the chosen move.

use std::error::Error;
use std::fmt;

use gridmdp_core::{Direction, HazardPoint, Position};

/// What the agent sees at one decision point.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// Cell the agent stands on.
    pub position: Position,
    /// Moves the host will accept this turn, in host order.
    pub legal: Vec<Direction>,
    /// Current hazard positions. Each may be fractional on one axis.
    pub hazards: Vec<HazardPoint>,
    /// A goal the host reports as consumed since the last decision.
    pub consumed_goal: Option<Position>,
}

impl Observation {
    /// Observation at `position` with the given legal moves and nothing else.
    pub fn at(position: Position, legal: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            position,
            legal: legal.into_iter().collect(),
            hazards: Vec::new(),
            consumed_goal: None,
        }
    }

    /// Add hazard samples.
    pub fn with_hazards(mut self, hazards: impl IntoIterator<Item = HazardPoint>) -> Self {
        self.hazards.extend(hazards);
        self
    }

    /// Report a consumed goal.
    pub fn with_consumed_goal(mut self, goal: Position) -> Self {
        self.consumed_goal = Some(goal);
        self
    }
}

/// Source of observations.
pub trait WorldSensor {
    /// Observe the world as it is now.
    fn sense(&mut self) -> Observation;
}

/// Sink for chosen moves.
pub trait MoveIssuer {
    /// Carry out `direction`. `legal` is the set it was chosen from.
    fn issue(&mut self, direction: Direction, legal: &[Direction]) -> Result<(), HostError>;
}

/// Errors raised by a host while carrying out a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The host refused the move.
    Rejected {
        /// The refused direction.
        direction: Direction,
        /// Host-supplied explanation.
        reason: String,
    },
    /// The episode has already ended; no further moves are accepted.
    EpisodeOver,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { direction, reason } => {
                write!(f, "host rejected {direction}: {reason}")
            }
            Self::EpisodeOver => write!(f, "episode is over"),
        }
    }
}

impl Error for HostError {}
