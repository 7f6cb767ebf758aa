use aybuben::compute::{reset, start};
use aybuben::engine::Command;
use aybuben::entities::*;
use aybuben::input::*;
use aybuben::tuning::Tuning;

use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    start(1, &Tuning::default(), &mut StdRng::seed_from_u64(3))
}

#[test]
fn arrows_and_space_map_to_commands() {
    assert_eq!(command_for_key(KeyCode::Left), Some(Command::Move(Direction::Left)));
    assert_eq!(command_for_key(KeyCode::Right), Some(Command::Move(Direction::Right)));
    assert_eq!(command_for_key(KeyCode::Up), Some(Command::Jump));
    assert_eq!(command_for_key(KeyCode::Char(' ')), Some(Command::Jump));
}

#[test]
fn other_keys_are_ignored() {
    for code in [
        KeyCode::Down,
        KeyCode::Enter,
        KeyCode::Char('x'),
        KeyCode::Char('a'),
        KeyCode::Tab,
        KeyCode::F(1),
    ] {
        assert_eq!(command_for_key(code), None, "{code:?}");
    }
}

#[test]
fn handle_key_moves_and_jumps() {
    let tuning = Tuning::default();
    let s = make_state();

    let right = handle_key(&s, KeyCode::Right, &tuning);
    assert_eq!(right.player_position.x, 70.0);

    let left = handle_key(&s, KeyCode::Left, &tuning);
    assert_eq!(left.player_position.x, 30.0);

    let up = handle_key(&s, KeyCode::Up, &tuning);
    assert!(up.is_jumping);
}

#[test]
fn handle_key_unknown_key_changes_nothing() {
    let s = make_state();
    assert_eq!(handle_key(&s, KeyCode::Char('z'), &Tuning::default()), s);
}

#[test]
fn handle_key_inert_when_not_playing() {
    let tuning = Tuning::default();
    let s = reset(&make_state());
    assert_eq!(handle_key(&s, KeyCode::Right, &tuning), s);
    assert_eq!(handle_key(&s, KeyCode::Char(' '), &tuning), s);
}
