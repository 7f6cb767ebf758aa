//! All game entity types — pure data, no rules.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// World-space position. x grows to the right, y grows downward (ground ≈ 400).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both axis distances are strictly below `range`.
    pub fn within(&self, other: &Position, range: f32) -> bool {
        (self.x - other.x).abs() < range && (self.y - other.y).abs() < range
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

// ── Collectibles & boss ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Letter {
    /// Unique within a level; equals the index in `GameState::letters`.
    pub id: u32,
    pub glyph: char,
    pub x: f32,
    pub y: f32,
    /// Only ever flips false → true.
    pub collected: bool,
}

impl Letter {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub is_active: bool,
    /// Ticks left before the boss can be hit again. Stays 0 with default tuning.
    pub hit_cooldown: u32,
}

impl Boss {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Presentation-facing summary of the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Start screen: no game running and no banner to show.
    Idle,
    Playing,
    Won,
    /// Declared for the HUD; no rule currently leads here.
    GameOver,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub is_playing: bool,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub player_position: Position,
    pub is_jumping: bool,
    /// Ticks until `is_jumping` reverts to false. Zero when grounded.
    pub jump_ticks_left: u32,
    pub letters: Vec<Letter>,
    pub boss: Boss,
    pub game_won: bool,
    pub game_over: bool,
    /// Ticks processed since the last start.
    pub tick: u64,
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        if self.game_won {
            GameStatus::Won
        } else if self.game_over {
            GameStatus::GameOver
        } else if self.is_playing {
            GameStatus::Playing
        } else {
            GameStatus::Idle
        }
    }

    pub fn letters_collected(&self) -> usize {
        self.letters.iter().filter(|l| l.collected).count()
    }

    pub fn all_letters_collected(&self) -> bool {
        self.letters.iter().all(|l| l.collected)
    }
}
