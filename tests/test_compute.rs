use aybuben::compute::*;
use aybuben::entities::*;
use aybuben::tuning::Tuning;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_state() -> GameState {
    start(1, &Tuning::default(), &mut seeded_rng())
}

/// All letters taken, boss awake, player standing right on the boss.
fn boss_fight_state() -> GameState {
    let mut s = make_state();
    for letter in s.letters.iter_mut() {
        letter.collected = true;
    }
    s.score = 800;
    s.boss.is_active = true;
    s.player_position.x = s.boss.x;
    s
}

fn ticks(state: &GameState, n: usize, tuning: &Tuning) -> GameState {
    (0..n).fold(state.clone(), |s, _| tick(&s, 0, tuning))
}

// ── start / idle_state ────────────────────────────────────────────────────────

#[test]
fn start_builds_fresh_game() {
    let s = make_state();
    assert!(s.is_playing);
    assert_eq!(s.score, 0);
    assert_eq!(s.lives, 3);
    assert_eq!(s.level, 1);
    assert_eq!(s.letters.len(), 8);
    assert!(s.letters.iter().all(|l| !l.collected));
    assert!(!s.boss.is_active);
    assert_eq!(s.boss.health, 3);
    assert_eq!(s.player_position, Position::new(50.0, 400.0));
    assert!(!s.is_jumping);
    assert!(!s.game_won);
    assert!(!s.game_over);
}

#[test]
fn start_clamps_level_to_one() {
    let s = start(0, &Tuning::default(), &mut seeded_rng());
    assert_eq!(s.level, 1);
}

#[test]
fn idle_state_is_not_playing() {
    let s = idle_state(&Tuning::default());
    assert!(!s.is_playing);
    assert!(s.letters.is_empty());
    assert_eq!(s.status(), GameStatus::Idle);
}

// ── move_player ───────────────────────────────────────────────────────────────

#[test]
fn move_left_normal() {
    let s = make_state(); // x=50
    let s2 = move_player(&s, Direction::Left, &Tuning::default());
    assert_eq!(s2.player_position.x, 30.0); // step is 20
}

#[test]
fn move_left_clamps_at_zero() {
    let mut s = make_state();
    s.player_position.x = 10.0;
    let s2 = move_player(&s, Direction::Left, &Tuning::default());
    assert_eq!(s2.player_position.x, 0.0);
    let s3 = move_player(&s2, Direction::Left, &Tuning::default());
    assert_eq!(s3.player_position.x, 0.0);
}

#[test]
fn move_right_clamps_at_max() {
    let mut s = make_state();
    s.player_position.x = 740.0;
    let s2 = move_player(&s, Direction::Right, &Tuning::default());
    assert_eq!(s2.player_position.x, 750.0);
    let s3 = move_player(&s2, Direction::Right, &Tuning::default());
    assert_eq!(s3.player_position.x, 750.0);
}

#[test]
fn move_leaves_y_alone() {
    let s = make_state();
    let s2 = move_player(&s, Direction::Right, &Tuning::default());
    assert_eq!(s2.player_position.y, s.player_position.y);
}

#[test]
fn move_does_not_mutate_original() {
    let s = make_state();
    let _ = move_player(&s, Direction::Right, &Tuning::default());
    assert_eq!(s.player_position.x, 50.0);
}

#[test]
fn move_ignored_when_not_playing() {
    let s = reset(&make_state());
    let s2 = move_player(&s, Direction::Right, &Tuning::default());
    assert_eq!(s2, s);
}

// ── jump ──────────────────────────────────────────────────────────────────────

#[test]
fn jump_sets_airborne_immediately() {
    let s = jump(&make_state(), &Tuning::default());
    assert!(s.is_jumping);
    assert_eq!(s.jump_ticks_left, 6);
}

#[test]
fn jump_lands_after_six_ticks() {
    let tuning = Tuning::default();
    let s = jump(&make_state(), &tuning);
    let s5 = ticks(&s, 5, &tuning);
    assert!(s5.is_jumping);
    let s6 = tick(&s5, 0, &tuning);
    assert!(!s6.is_jumping);
    assert_eq!(s6.jump_ticks_left, 0);
}

#[test]
fn jump_while_airborne_is_ignored() {
    let tuning = Tuning::default();
    let s = jump(&make_state(), &tuning);
    let s3 = ticks(&s, 3, &tuning);
    let again = jump(&s3, &tuning);
    assert_eq!(again, s3);
    // Still lands on the original schedule
    let landed = ticks(&again, 3, &tuning);
    assert!(!landed.is_jumping);
}

#[test]
fn jump_ignored_when_not_playing() {
    let s = reset(&make_state());
    let s2 = jump(&s, &Tuning::default());
    assert!(!s2.is_jumping);
}

#[test]
fn can_jump_again_after_landing() {
    let tuning = Tuning::default();
    let landed = ticks(&jump(&make_state(), &tuning), 6, &tuning);
    let s = jump(&landed, &tuning);
    assert!(s.is_jumping);
}

// ── tick — letter pickup ──────────────────────────────────────────────────────

#[test]
fn tick_collects_letter_in_range() {
    let mut s = make_state();
    let target = s.letters[2].clone();
    s.player_position = Position::new(target.x + 29.0, target.y - 29.0);
    let s2 = tick(&s, 0, &Tuning::default());
    assert!(s2.letters[2].collected);
    assert_eq!(s2.score, 100);
    assert_eq!(s2.letters_collected(), 1);
}

#[test]
fn tick_pickup_window_is_exclusive() {
    let mut s = make_state();
    let target = s.letters[2].clone();
    s.player_position = Position::new(target.x + 30.0, target.y);
    let s2 = tick(&s, 0, &Tuning::default());
    assert!(!s2.letters[2].collected);
    assert_eq!(s2.score, 0);
}

#[test]
fn tick_letter_scores_only_once() {
    let mut s = make_state();
    s.player_position = s.letters[0].position();
    let s2 = ticks(&s, 5, &Tuning::default());
    assert_eq!(s2.score, 100);
}

#[test]
fn tick_collects_overlapping_letters_together() {
    let mut s = make_state();
    s.letters[1].x = s.letters[0].x;
    s.letters[1].y = s.letters[0].y;
    s.player_position = s.letters[0].position();
    let s2 = tick(&s, 0, &Tuning::default());
    assert!(s2.letters[0].collected && s2.letters[1].collected);
    assert_eq!(s2.score, 200);
}

#[test]
fn walking_right_collects_every_letter() {
    let tuning = Tuning::default();
    let mut s = make_state();
    while s.player_position.x < tuning.max_x {
        s = move_player(&s, Direction::Right, &tuning);
        s = tick(&s, 0, &tuning);
    }
    assert_eq!(s.letters_collected(), 8);
    assert_eq!(s.score, 800);
    assert!(s.boss.is_active);
    assert!(s.is_playing);
}

// ── tick — boss activation ────────────────────────────────────────────────────

#[test]
fn boss_stays_dormant_until_last_letter() {
    let tuning = Tuning::default();
    let mut s = make_state();
    for letter in s.letters.iter_mut().take(7) {
        letter.collected = true;
    }
    let s2 = tick(&s, 0, &tuning);
    assert!(!s2.boss.is_active);

    s.player_position = s.letters[7].position();
    let s3 = tick(&s, 0, &tuning);
    assert!(s3.letters[7].collected);
    assert!(s3.boss.is_active);
}

#[test]
fn dormant_boss_does_not_move_or_take_hits() {
    let tuning = Tuning::default();
    let mut s = jump(&make_state(), &tuning);
    s.player_position.x = s.boss.x;
    let s2 = tick(&s, 785, &tuning);
    assert_eq!(s2.boss.x, tuning.boss_start.x);
    assert_eq!(s2.boss.health, 3);
}

// ── tick — boss sway ──────────────────────────────────────────────────────────

#[test]
fn boss_sway_follows_sine() {
    let tuning = Tuning::default();
    assert_eq!(boss_sway(0, &tuning), 0.0);
    // sin(785 * 0.002) ≈ 1
    assert!((boss_sway(785, &tuning) - 2.0).abs() < 1e-3);
    assert!((boss_sway(2356, &tuning) + 2.0).abs() < 1e-2);
}

#[test]
fn active_boss_sways_each_tick() {
    let tuning = Tuning::default();
    let mut s = boss_fight_state();
    s.player_position.x = 0.0;
    let s2 = tick(&s, 785, &tuning);
    assert!((s2.boss.x - (s.boss.x + 2.0)).abs() < 1e-3);
}

// ── tick — boss damage ────────────────────────────────────────────────────────

#[test]
fn grounded_player_cannot_hurt_boss() {
    let s2 = tick(&boss_fight_state(), 0, &Tuning::default());
    assert_eq!(s2.boss.health, 3);
    assert_eq!(s2.score, 800);
}

#[test]
fn jumping_player_in_range_hits_boss() {
    let tuning = Tuning::default();
    let s = jump(&boss_fight_state(), &tuning);
    let s2 = tick(&s, 0, &tuning);
    assert_eq!(s2.boss.health, 2);
    assert_eq!(s2.score, 1300);
    assert!(s2.is_playing);
}

#[test]
fn jumping_player_out_of_range_misses() {
    let tuning = Tuning::default();
    let mut s = jump(&boss_fight_state(), &tuning);
    s.player_position.x = s.boss.x - 40.0;
    let s2 = tick(&s, 0, &tuning);
    assert_eq!(s2.boss.health, 3);
}

#[test]
fn three_separate_hits_win_the_game() {
    let tuning = Tuning::default();
    let mut s = boss_fight_state();

    for hit in 1..=3u32 {
        s = jump(&s, &tuning);
        s = tick(&s, 0, &tuning);
        assert_eq!(s.boss.health, 3 - hit);
        assert_eq!(s.score, 800 + 500 * hit);
        if hit == 3 {
            break;
        }

        // Step out of range and land before the next attempt
        for _ in 0..3 {
            s = move_player(&s, Direction::Left, &tuning);
        }
        s = ticks(&s, 5, &tuning);
        assert!(!s.is_jumping);
        assert_eq!(s.boss.health, 3 - hit);
        for _ in 0..3 {
            s = move_player(&s, Direction::Right, &tuning);
        }
    }

    assert_eq!(s.boss.health, 0);
    assert_eq!(s.score, 2300);
    assert!(s.game_won);
    assert!(!s.is_playing);
    assert_eq!(s.status(), GameStatus::Won);
}

#[test]
fn one_sustained_jump_hits_every_tick() {
    let tuning = Tuning::default();
    let s = jump(&boss_fight_state(), &tuning);
    let s1 = tick(&s, 0, &tuning);
    let s2 = tick(&s1, 0, &tuning);
    let s3 = tick(&s2, 0, &tuning);
    assert_eq!(s1.boss.health, 2);
    assert_eq!(s2.boss.health, 1);
    assert_eq!(s3.boss.health, 0);
    assert!(s3.game_won);
    assert_eq!(s3.score, 800 + 1500);
}

#[test]
fn hit_cooldown_spaces_out_damage() {
    let tuning = Tuning {
        boss_hit_cooldown_ticks: 2,
        ..Tuning::default()
    };
    let s = jump(&boss_fight_state(), &tuning);
    let s6 = ticks(&s, 6, &tuning);
    // Hits land on ticks 1 and 4
    assert_eq!(s6.boss.health, 1);
    assert_eq!(s6.score, 800 + 1000);
    assert!(!s6.is_jumping);
}

// ── tick — terminal state ─────────────────────────────────────────────────────

#[test]
fn win_cancels_pending_jump() {
    let tuning = Tuning::default();
    let mut s = jump(&boss_fight_state(), &tuning);
    s.boss.health = 1;
    let s2 = tick(&s, 0, &tuning);
    assert!(s2.game_won);
    assert!(!s2.is_jumping);
    assert_eq!(s2.jump_ticks_left, 0);
}

#[test]
fn won_game_ignores_further_ticks_and_input() {
    let tuning = Tuning::default();
    let mut s = jump(&boss_fight_state(), &tuning);
    s.boss.health = 1;
    let won = tick(&s, 0, &tuning);

    assert_eq!(tick(&won, 785, &tuning), won);
    assert_eq!(move_player(&won, Direction::Left, &tuning), won);
    assert_eq!(jump(&won, &tuning), won);
}

#[test]
fn tick_counter_advances_while_playing() {
    let s = ticks(&make_state(), 4, &Tuning::default());
    assert_eq!(s.tick, 4);
}

#[test]
fn lives_never_change() {
    let tuning = Tuning::default();
    let mut s = jump(&boss_fight_state(), &tuning);
    s = ticks(&s, 3, &tuning);
    assert_eq!(s.lives, 3);
    assert!(!s.game_over);
}

// ── reset ─────────────────────────────────────────────────────────────────────

#[test]
fn reset_stops_play_but_keeps_progress() {
    let tuning = Tuning::default();
    let mut s = make_state();
    s.player_position = s.letters[0].position();
    let s = jump(&tick(&s, 0, &tuning), &tuning);

    let r = reset(&s);
    assert!(!r.is_playing);
    assert!(!r.game_won);
    assert!(!r.game_over);
    assert!(!r.is_jumping);
    assert_eq!(r.jump_ticks_left, 0);
    assert_eq!(r.score, 100);
    assert_eq!(r.letters, s.letters);
    assert_eq!(r.status(), GameStatus::Idle);
}

#[test]
fn reset_clears_victory_banner() {
    let tuning = Tuning::default();
    let mut s = jump(&boss_fight_state(), &tuning);
    s.boss.health = 1;
    let won = tick(&s, 0, &tuning);
    let r = reset(&won);
    assert!(!r.game_won);
    assert_eq!(r.score, won.score);
    assert_eq!(tick(&r, 0, &tuning), r);
}
