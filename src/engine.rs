//! Single-writer game engine.
//!
//! Timer ticks and key presses both arrive here as [`Command`]s and are
//! applied one at a time, so the state never needs a lock.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compute;
use crate::entities::{Direction, GameState};
use crate::tuning::Tuning;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Start { level: u32 },
    Reset,
    Move(Direction),
    Jump,
    /// One fixed-interval step; `elapsed_ms` is wall-clock time since start.
    Tick { elapsed_ms: u64 },
}

pub struct Engine {
    state: GameState,
    tuning: Tuning,
    rng: StdRng,
}

impl Engine {
    pub fn new(tuning: Tuning, rng: StdRng) -> Self {
        Self {
            state: compute::idle_state(&tuning),
            tuning,
            rng,
        }
    }

    /// Engine with a deterministic letter roll.
    pub fn seeded(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(tuning: Tuning) -> Self {
        Self::new(tuning, StdRng::from_entropy())
    }

    /// Read-only snapshot for the presentation layer.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn apply(&mut self, command: Command) -> &GameState {
        self.state = match command {
            Command::Start { level } => compute::start(level, &self.tuning, &mut self.rng),
            Command::Reset => compute::reset(&self.state),
            Command::Move(direction) => compute::move_player(&self.state, direction, &self.tuning),
            Command::Jump => compute::jump(&self.state, &self.tuning),
            Command::Tick { elapsed_ms } => compute::tick(&self.state, elapsed_ms, &self.tuning),
        };
        &self.state
    }

    pub fn start(&mut self, level: u32) -> &GameState {
        self.apply(Command::Start { level })
    }

    pub fn reset(&mut self) -> &GameState {
        self.apply(Command::Reset)
    }
}
