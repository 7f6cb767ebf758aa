//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus tuning and, where needed, an RNG handle) and returns a
//! brand-new `GameState`. Side effects are limited to the injected RNG and
//! tracing events.

use rand::Rng;
use tracing::{debug, info};

use crate::alphabet::generate_letters;
use crate::entities::{Boss, Direction, GameState, Position};
use crate::tuning::Tuning;

// ── Constructors ─────────────────────────────────────────────────────────────

/// State shown before the first game: nothing running, no letters.
pub fn idle_state(tuning: &Tuning) -> GameState {
    GameState {
        is_playing: false,
        score: 0,
        lives: tuning.starting_lives,
        level: 1,
        player_position: tuning.player_start,
        is_jumping: false,
        jump_ticks_left: 0,
        letters: Vec::new(),
        boss: fresh_boss(tuning),
        game_won: false,
        game_over: false,
        tick: 0,
    }
}

fn fresh_boss(tuning: &Tuning) -> Boss {
    Boss {
        x: tuning.boss_start.x,
        y: tuning.boss_start.y,
        health: tuning.boss_health,
        is_active: false,
        hit_cooldown: 0,
    }
}

/// Build a full new game for `level`. Nothing from a previous game survives.
pub fn start(level: u32, tuning: &Tuning, rng: &mut impl Rng) -> GameState {
    let level = level.max(1);
    let letters = generate_letters(level, tuning, rng);
    info!(
        level,
        glyphs = %letters.iter().map(|l| l.glyph).collect::<String>(),
        "game started"
    );
    GameState {
        is_playing: true,
        level,
        letters,
        ..idle_state(tuning)
    }
}

/// Back to the start screen. Score and letters are kept for display; any
/// pending jump is cancelled so nothing lands on the next game.
pub fn reset(state: &GameState) -> GameState {
    info!(score = state.score, "game reset");
    GameState {
        is_playing: false,
        is_jumping: false,
        jump_ticks_left: 0,
        game_won: false,
        game_over: false,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player(state: &GameState, direction: Direction, tuning: &Tuning) -> GameState {
    if !state.is_playing {
        return state.clone();
    }
    let x = state.player_position.x;
    let new_x = match direction {
        Direction::Left => (x - tuning.move_step).max(0.0),
        Direction::Right => (x + tuning.move_step).min(tuning.max_x),
    };
    GameState {
        player_position: Position {
            x: new_x,
            ..state.player_position
        },
        ..state.clone()
    }
}

/// Leave the ground. Debounced: a request while airborne changes nothing.
pub fn jump(state: &GameState, tuning: &Tuning) -> GameState {
    if !state.is_playing {
        return state.clone();
    }
    if state.is_jumping {
        debug!(ticks_left = state.jump_ticks_left, "jump ignored, already airborne");
        return state.clone();
    }
    GameState {
        is_jumping: true,
        jump_ticks_left: tuning.jump_ticks,
        ..state.clone()
    }
}

// ── Per-tick update ─────────────────────────────────────────────────────────

/// Horizontal boss drift for the tick at `elapsed_ms`.
pub fn boss_sway(elapsed_ms: u64, tuning: &Tuning) -> f32 {
    ((elapsed_ms as f64 * tuning.boss_sway_frequency).sin() as f32) * tuning.boss_sway_amplitude
}

/// Advance the game by one tick. `elapsed_ms` is wall-clock time and only
/// drives the boss sway.
pub fn tick(state: &GameState, elapsed_ms: u64, tuning: &Tuning) -> GameState {
    if !state.is_playing {
        return state.clone();
    }

    let player = state.player_position;
    let mut score = state.score;

    // ── 1. Letter pickup ─────────────────────────────────────────────────────
    let mut letters = state.letters.clone();
    for letter in letters.iter_mut().filter(|l| !l.collected) {
        if player.within(&letter.position(), tuning.pickup_range) {
            letter.collected = true;
            score += tuning.letter_reward;
            debug!(id = letter.id, glyph = %letter.glyph, score, "letter collected");
        }
    }

    // ── 2. Boss activation ───────────────────────────────────────────────────
    let mut boss = state.boss.clone();
    if !boss.is_active && letters.iter().all(|l| l.collected) {
        boss.is_active = true;
        info!(tick = state.tick + 1, "all letters collected, boss awake");
    }

    let mut game_won = state.game_won;
    if boss.is_active {
        // ── 3. Boss sway ─────────────────────────────────────────────────────
        boss.x += boss_sway(elapsed_ms, tuning);

        // ── 4. Boss damage ───────────────────────────────────────────────────
        let can_hit = boss.hit_cooldown == 0;
        boss.hit_cooldown = boss.hit_cooldown.saturating_sub(1);
        if state.is_jumping
            && can_hit
            && boss.health > 0
            && player.within(&boss.position(), tuning.boss_hit_range)
        {
            boss.health -= 1;
            boss.hit_cooldown = tuning.boss_hit_cooldown_ticks;
            score += tuning.boss_hit_reward;
            info!(health = boss.health, score, "boss hit");
        }

        // ── 5. Win check ─────────────────────────────────────────────────────
        if boss.health == 0 {
            game_won = true;
            info!(score, "boss defeated");
        }
    }

    // ── 6. Jump countdown (cancelled outright on a win) ──────────────────────
    let (is_jumping, jump_ticks_left) = if game_won {
        (false, 0)
    } else {
        let left = state.jump_ticks_left.saturating_sub(1);
        (state.is_jumping && left > 0, left)
    };

    GameState {
        is_playing: !game_won,
        score,
        letters,
        boss,
        game_won,
        is_jumping,
        jump_ticks_left,
        tick: state.tick + 1,
        ..state.clone()
    }
}
