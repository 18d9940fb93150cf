//! Session configuration, validation, and error types.
//!
//! [`MdpConfig`] is the input for [`Session::initialize`](crate::Session::initialize).
//! [`validate()`](MdpConfig::validate) runs at initialisation so a bad
//! discount or reward never reaches the solver.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use gridmdp_solver::{RewardValues, ValueIteration};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MdpConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Discount is not strictly between 0 and 1.
    InvalidDiscount {
        /// The invalid value.
        value: f64,
    },
    /// Threshold is NaN, infinite, or negative.
    InvalidThreshold {
        /// The invalid value.
        value: f64,
    },
    /// Noise is outside `[0, 1]`.
    InvalidNoise {
        /// The invalid value.
        value: f64,
    },
    /// `max_sweeps` is zero.
    ZeroSweepCap,
    /// A reward constant is not finite.
    InvalidReward {
        /// Description of which constant was rejected.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDiscount { value } => {
                write!(f, "discount must be in (0, 1), got {value}")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "threshold must be finite and non-negative, got {value}")
            }
            Self::InvalidNoise { value } => write!(f, "noise must be in [0, 1], got {value}"),
            Self::ZeroSweepCap => write!(f, "max_sweeps must be at least 1"),
            Self::InvalidReward { reason } => write!(f, "invalid reward: {reason}"),
        }
    }
}

impl Error for ConfigError {}

// ── MdpConfig ──────────────────────────────────────────────────────

/// Tuning for one decision session.
///
/// Defaults match a cautious forager: a short horizon (`γ = 0.65`), a loose
/// threshold, and 80% of each move landing where it was aimed.
#[derive(Clone, Debug, PartialEq)]
pub struct MdpConfig {
    /// Discount factor `γ`, strictly between 0 and 1. Default: 0.65.
    pub discount: f64,
    /// Convergence threshold on the largest per-cell change. Default: 0.1.
    pub threshold: f64,
    /// Probability that a move lands on the intended cell. Default: 0.8.
    pub noise: f64,
    /// Sweep cap per solve. Default: 10 000.
    pub max_sweeps: u32,
    /// Optional wall-clock cap per solve. Default: none.
    pub time_budget: Option<Duration>,
    /// Whether `Stop` may be chosen while another move is legal. When
    /// false, `Stop` is dropped from the legal set unless it is the only
    /// move. Default: true.
    pub allow_stop: bool,
    /// Reward constants for the goal and hazard layers.
    pub rewards: RewardValues,
}

impl Default for MdpConfig {
    fn default() -> Self {
        Self {
            discount: 0.65,
            threshold: 0.1,
            noise: 0.8,
            max_sweeps: ValueIteration::DEFAULT_MAX_SWEEPS,
            time_budget: None,
            allow_stop: true,
            rewards: RewardValues::default(),
        }
    }
}

impl MdpConfig {
    /// Check every parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. 0 < γ < 1 keeps the backup a contraction.
        if !(self.discount > 0.0 && self.discount < 1.0) {
            return Err(ConfigError::InvalidDiscount {
                value: self.discount,
            });
        }
        // 2. Threshold finite and >= 0.
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }
        // 3. Noise is a probability.
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(ConfigError::InvalidNoise { value: self.noise });
        }
        // 4. At least one sweep.
        if self.max_sweeps == 0 {
            return Err(ConfigError::ZeroSweepCap);
        }
        // 5. Reward constants finite.
        let r = &self.rewards;
        for (name, value) in [
            ("goal", r.goal),
            ("neutral", r.neutral),
            ("hazard", r.hazard),
            ("baseline", r.baseline),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidReward {
                    reason: format!("{name} must be finite, got {value}"),
                });
            }
        }
        if r.goal == r.neutral {
            return Err(ConfigError::InvalidReward {
                reason: format!("goal ({}) must differ from neutral", r.goal),
            });
        }
        Ok(())
    }

    /// Solver configured from these parameters.
    pub fn solver(&self) -> ValueIteration {
        ValueIteration::new(self.discount, self.threshold)
            .with_max_sweeps(self.max_sweeps)
            .with_time_budget(self.time_budget)
    }
}
