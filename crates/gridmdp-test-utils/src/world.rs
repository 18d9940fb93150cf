//! Seeded mock simulation implementing both host seams.
//!
//! [`MockWorld`] plays the host's side of an episode. The agent's moves
//! slip sideways with the same noise model the planner assumes, and each
//! hazard random-walks at half a cell per turn, so between cells it sits on
//! a half-integer coordinate on exactly one axis. All randomness comes from
//! a `ChaCha8Rng` seeded at construction; the same seed and the same moves
//! replay the same episode.
//!
//! Clones share one world, so a single world can be handed to
//! [`Session::step`](gridmdp_engine::Session::step) as both sensor and
//! issuer.

use std::cell::RefCell;
use std::rc::Rc;

use gridmdp_core::{Direction, HazardPoint, Position};
use gridmdp_engine::{
    Decision, DecideError, HostError, MoveIssuer, Observation, Session, WorldSensor,
};
use gridmdp_space::Grid;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::fixtures::Scene;

/// How an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every goal was consumed.
    Cleared,
    /// The agent shared a cell with a hazard.
    Caught,
}

#[derive(Clone, Copy, Debug)]
struct Hazard {
    at: HazardPoint,
    heading: Direction,
}

#[derive(Debug)]
struct WorldState {
    grid: Grid,
    agent: Position,
    goals: Vec<Position>,
    hazards: Vec<Hazard>,
    noise: f64,
    rng: ChaCha8Rng,
    consumed: Option<Position>,
    outcome: Option<Outcome>,
    turns: u32,
}

/// Shared handle to a mock world.
#[derive(Clone, Debug)]
pub struct MockWorld {
    state: Rc<RefCell<WorldState>>,
}

impl MockWorld {
    /// World for `scene` with the default 0.8 move accuracy.
    ///
    /// # Panics
    ///
    /// Panics if the scene's layout does not build a grid.
    pub fn new(scene: &Scene, seed: u64) -> Self {
        Self::with_noise(scene, seed, 0.8)
    }

    /// World whose moves land on the intended cell with probability `noise`.
    pub fn with_noise(scene: &Scene, seed: u64, noise: f64) -> Self {
        let grid = Grid::build(scene.layout.bounds, scene.layout.obstacles.iter().copied())
            .expect("scene layout must build a grid");
        let hazards = scene
            .hazards
            .iter()
            .map(|&p| Hazard {
                at: HazardPoint::from(p),
                heading: Direction::Stop,
            })
            .collect();
        let state = WorldState {
            grid,
            agent: scene.agent,
            goals: scene.layout.goals.clone(),
            hazards,
            noise,
            rng: ChaCha8Rng::seed_from_u64(seed),
            consumed: None,
            outcome: None,
            turns: 0,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn agent(&self) -> Position {
        self.state.borrow().agent
    }

    pub fn remaining_goals(&self) -> usize {
        self.state.borrow().goals.len()
    }

    pub fn hazards(&self) -> Vec<HazardPoint> {
        self.state.borrow().hazards.iter().map(|h| h.at).collect()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.borrow().outcome
    }

    pub fn turns(&self) -> u32 {
        self.state.borrow().turns
    }
}

impl WorldState {
    fn legal(&self) -> Vec<Direction> {
        let mut legal = Vec::with_capacity(5);
        if let Some(cell) = self.grid.cell(self.agent) {
            legal.extend(self.grid.legal_directions(cell).iter());
        }
        legal.push(Direction::Stop);
        legal
    }

    fn open(&self, from: Position, direction: Direction) -> bool {
        self.grid.contains(from.step(direction))
    }

    fn slip(&mut self, intended: Direction) -> Direction {
        if intended == Direction::Stop || self.rng.random::<f64>() < self.noise {
            return intended;
        }
        *intended
            .orthogonal()
            .choose(&mut self.rng)
            .unwrap_or(&intended)
    }

    fn move_agent(&mut self, intended: Direction) {
        let actual = self.slip(intended);
        if self.open(self.agent, actual) {
            self.agent = self.agent.step(actual);
        }
        self.consumed = None;
        if let Some(i) = self.goals.iter().position(|&g| g == self.agent) {
            self.goals.swap_remove(i);
            self.consumed = Some(self.agent);
        }
    }

    /// Half a cell along the current heading; pick a new heading on arrival.
    fn move_hazards(&mut self) {
        for i in 0..self.hazards.len() {
            let Hazard { at, heading } = self.hazards[i];
            let heading = if at.x.fract() == 0.0 && at.y.fract() == 0.0 {
                self.pick_heading(Position::new(at.x as i32, at.y as i32), heading)
            } else {
                heading
            };
            let (dx, dy) = heading.delta();
            self.hazards[i] = Hazard {
                at: HazardPoint::new(at.x + 0.5 * dx as f64, at.y + 0.5 * dy as f64),
                heading,
            };
        }
    }

    /// Random open direction, avoiding a U-turn unless it is the only exit.
    fn pick_heading(&mut self, here: Position, previous: Direction) -> Direction {
        let open: Vec<Direction> = Direction::CARDINAL
            .into_iter()
            .filter(|&d| self.open(here, d))
            .collect();
        let forward: Vec<Direction> = open
            .iter()
            .copied()
            .filter(|&d| previous == Direction::Stop || d != previous.opposite())
            .collect();
        let pool = if forward.is_empty() { &open } else { &forward };
        pool.choose(&mut self.rng).copied().unwrap_or(Direction::Stop)
    }

    fn caught(&self) -> bool {
        self.hazards.iter().any(|h| {
            h.at.decompose()
                .map(|cells| cells.contains(&self.agent))
                .unwrap_or(false)
        })
    }
}

impl WorldSensor for MockWorld {
    fn sense(&mut self) -> Observation {
        let mut state = self.state.borrow_mut();
        let consumed_goal = state.consumed.take();
        Observation {
            position: state.agent,
            legal: state.legal(),
            hazards: state.hazards.iter().map(|h| h.at).collect(),
            consumed_goal,
        }
    }
}

impl MoveIssuer for MockWorld {
    fn issue(&mut self, direction: Direction, legal: &[Direction]) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        if state.outcome.is_some() {
            return Err(HostError::EpisodeOver);
        }
        if !legal.contains(&direction) {
            return Err(HostError::Rejected {
                direction,
                reason: "not in the legal set".to_string(),
            });
        }
        state.turns += 1;
        state.move_agent(direction);
        if state.caught() {
            state.outcome = Some(Outcome::Caught);
            return Ok(());
        }
        state.move_hazards();
        if state.caught() {
            state.outcome = Some(Outcome::Caught);
        } else if state.goals.is_empty() {
            state.outcome = Some(Outcome::Cleared);
        }
        Ok(())
    }
}

/// Summary of a played episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeReport {
    pub outcome: Option<Outcome>,
    pub turns: u32,
    pub directions: Vec<Direction>,
    pub unconverged: u32,
}

/// Drive `session` against `world` until the episode ends or `max_turns`
/// moves have been made.
pub fn play(
    session: &mut Session,
    world: &MockWorld,
    max_turns: u32,
) -> Result<EpisodeReport, DecideError> {
    let mut sensor = world.clone();
    let mut issuer = world.clone();
    let mut directions = Vec::new();
    let mut unconverged = 0;
    while world.outcome().is_none() && world.turns() < max_turns {
        let Decision { direction, metrics } = session.step(&mut sensor, &mut issuer)?;
        directions.push(direction);
        if !metrics.converged {
            unconverged += 1;
        }
    }
    Ok(EpisodeReport {
        outcome: world.outcome(),
        turns: world.turns(),
        directions,
        unconverged,
    })
}
