//! Gameplay tuning.
//!
//! Keep this separate from runtime configuration (tick cadence, log paths).

use crate::entities::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Letters generated per level.
    pub letter_count: u32,
    /// x of the first letter.
    pub letter_start_x: f32,
    /// Horizontal gap between consecutive letters.
    pub letter_stride_x: f32,
    /// Ground-level letter height.
    pub letter_low_y: f32,
    /// Raised-platform letter height.
    pub letter_high_y: f32,
    /// Pickup window on each axis (exclusive).
    pub pickup_range: f32,
    pub letter_reward: u32,

    pub player_start: Position,
    pub starting_lives: u32,
    /// Units per move event.
    pub move_step: f32,
    /// Rightmost reachable x; the leftmost is 0.
    pub max_x: f32,
    /// Airborne time in ticks (600 ms at the default 100 ms tick).
    pub jump_ticks: u32,

    pub boss_start: Position,
    pub boss_health: u32,
    /// Hit window on each axis (exclusive).
    pub boss_hit_range: f32,
    pub boss_hit_reward: u32,
    /// Per-tick sway is `sin(t_ms * frequency) * amplitude`.
    pub boss_sway_amplitude: f32,
    pub boss_sway_frequency: f64,
    /// Ticks after a hit during which the boss ignores further hits.
    /// 0 lets one sustained jump land a hit on every tick.
    pub boss_hit_cooldown_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            letter_count: 8,
            letter_start_x: 150.0,
            letter_stride_x: 80.0,
            letter_low_y: 400.0,
            letter_high_y: 375.0,
            pickup_range: 30.0,
            letter_reward: 100,

            player_start: Position::new(50.0, 400.0),
            starting_lives: 3,
            move_step: 20.0,
            max_x: 750.0,
            jump_ticks: 6,

            boss_start: Position::new(700.0, 400.0),
            boss_health: 3,
            boss_hit_range: 40.0,
            boss_hit_reward: 500,
            boss_sway_amplitude: 2.0,
            boss_sway_frequency: 0.002,
            boss_hit_cooldown_ticks: 0,
        }
    }
}
