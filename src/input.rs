//! Key-down → command translation.
//!
//! Only the arrow keys and Space mean anything to the game. Everything else
//! maps to `None` and is dropped without a trace.

use crossterm::event::KeyCode;

use crate::compute;
use crate::engine::Command;
use crate::entities::{Direction, GameState};
use crate::tuning::Tuning;

pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Up | KeyCode::Char(' ') => Some(Command::Jump),
        _ => None,
    }
}

/// Apply one key-down to `state`. Inert while no game is running.
pub fn handle_key(state: &GameState, code: KeyCode, tuning: &Tuning) -> GameState {
    match command_for_key(code) {
        Some(Command::Move(direction)) => compute::move_player(state, direction, tuning),
        Some(Command::Jump) => compute::jump(state, tuning),
        _ => state.clone(),
    }
}
