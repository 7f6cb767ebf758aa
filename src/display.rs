//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use aybuben::alphabet::{ARMENIAN_LETTERS, BOSS_GLYPH, PLAYER_GLYPH};
use aybuben::entities::{Boss, GameState, GameStatus, Letter};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_GROUND: Color = Color::DarkGreen;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Magenta;
const C_PLAYER: Color = Color::Red;
const C_LETTER: Color = Color::Yellow;
const C_BOSS: Color = Color::DarkRed;
const C_HINT: Color = Color::DarkGrey;

// ── World → screen ────────────────────────────────────────────────────────────

/// World units spanned by the playfield width.
const WORLD_WIDTH: f32 = 800.0;
/// World y of the ground line the player walks on.
const WORLD_GROUND_Y: f32 = 400.0;
/// World units per terminal row above the ground.
const UNITS_PER_ROW: f32 = 12.5;
/// Rows the player rises while airborne.
const JUMP_ROWS: u16 = 2;

fn ground_row(height: u16) -> u16 {
    height.saturating_sub(4)
}

fn col_for_x(x: f32, width: u16) -> u16 {
    let inner = width.saturating_sub(3) as f32;
    let col = 1.0 + (x / WORLD_WIDTH).clamp(0.0, 1.0) * inner;
    col as u16
}

fn row_for_y(y: f32, height: u16) -> u16 {
    let above = ((WORLD_GROUND_Y - y) / UNITS_PER_ROW).round().max(0.0) as u16;
    ground_row(height).saturating_sub(above).max(2)
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_ground(out, width, height)?;
    draw_hud(out, state, width)?;

    for letter in state.letters.iter().filter(|l| !l.collected) {
        draw_letter(out, letter, width, height)?;
    }
    if state.boss.is_active {
        draw_boss(out, &state.boss, width, height)?;
    }

    draw_player(out, state, width, height)?;
    draw_controls_hint(out, height)?;

    if state.status() == GameStatus::Won {
        draw_victory(out, state, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Draw the "Ready to Play?" screen.
pub fn render_start_screen<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = width / 2;
    let cy = height / 2;

    let title = "Ա  ARMENIAN ALPHABET QUEST  Ֆ";
    centred(out, title, Color::Cyan, cx, cy.saturating_sub(8))?;

    // reset() keeps the last score around; show it until the next start
    if state.score > 0 {
        let last = format!("Last Score: {}", state.score);
        centred(out, &last, Color::Yellow, cx, cy.saturating_sub(7))?;
    }

    centred(out, "Ready to Play?", Color::White, cx, cy.saturating_sub(5))?;
    centred(
        out,
        &format!("Help {} collect letters and defeat the boss {}!", PLAYER_GLYPH, BOSS_GLYPH),
        Color::DarkGrey,
        cx,
        cy.saturating_sub(4),
    )?;
    centred(out, "ENTER / S : Start    Q : Quit", Color::Green, cx, cy.saturating_sub(2))?;

    // Alphabet reference, ten glyphs per row
    centred(out, "Armenian Alphabet", Color::White, cx, cy)?;
    for (i, row) in ARMENIAN_LETTERS.chunks(10).enumerate() {
        let line: String = row
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        centred(out, &line, Color::Blue, cx, cy + 1 + i as u16)?;
    }

    centred(
        out,
        "← → : Move   ↑ / SPACE : Jump   Jump on the boss to damage it",
        C_HINT,
        cx,
        cy + 6,
    )?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn centred<W: Write>(out: &mut W, msg: &str, color: Color, cx: u16, row: u16) -> std::io::Result<()> {
    let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

// ── Border & ground ───────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_ground<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_GROUND))?;
    out.queue(cursor::MoveTo(1, ground_row(height) + 1))?;
    out.queue(Print("▀".repeat(width.saturating_sub(2) as usize)))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> std::io::Result<()> {
    // Score and letters — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>6}  Letters: {}/{}",
        state.score,
        state.letters_collected(),
        state.letters.len()
    )))?;

    // Level — centre
    let level_str = format!("[ LEVEL {} ]", state.level);
    let lx = (width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Lives — right
    let hearts: String = "♥".repeat(state.lives as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let p = state.player_position;
    let mut row = row_for_y(p.y, height);
    if state.is_jumping {
        row = row.saturating_sub(JUMP_ROWS).max(2);
    }
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col_for_x(p.x, width), row))?;
    out.queue(Print(PLAYER_GLYPH))?;
    Ok(())
}

fn draw_letter<W: Write>(
    out: &mut W,
    letter: &Letter,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_LETTER))?;
    out.queue(cursor::MoveTo(col_for_x(letter.x, width), row_for_y(letter.y, height)))?;
    out.queue(Print(letter.glyph))?;
    Ok(())
}

fn draw_boss<W: Write>(out: &mut W, boss: &Boss, width: u16, height: u16) -> std::io::Result<()> {
    let col = col_for_x(boss.x, width);
    let row = row_for_y(boss.y, height);

    out.queue(style::SetForegroundColor(C_BOSS))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(BOSS_GLYPH))?;

    // Health bar one row above
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1).max(2)))?;
    out.queue(Print("♥".repeat(boss.health as usize)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   ↑ / SPACE : Jump   Q : Quit"))?;
    Ok(())
}

// ── Victory overlay ───────────────────────────────────────────────────────────

fn draw_victory<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let defeated = format!("You defeated boss {} and learned the alphabet!", BOSS_GLYPH);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Yellow),
        ("║     VICTORY!     ║", Color::Yellow),
        ("╚══════════════════╝", Color::Yellow),
        (defeated.as_str(), Color::White),
        (score_line.as_str(), Color::Green),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        centred(out, msg, *color, cx, start_row + i as u16)?;
    }

    Ok(())
}
