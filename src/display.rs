//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game world.  No game logic is performed; this module only maps playfield
//! coordinates onto the terminal grid and translates state into terminal
//! commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::assets::AssetSet;
use crate::entities::{Asteroid, Boss, Bullet, Explosion, GameStatus, GameWorld};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Green;
const C_EXPLOSION: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

// ── Sprites ───────────────────────────────────────────────────────────────────
// Visual identifiers come from `AssetSet::for_level`, so the look shifts at
// the level-2 and level-6 tiers without the simulation knowing about glyphs.

fn ship_sprite(id: &str) -> (&'static str, &'static str, Color) {
    match id {
        "ship2" => ("◭", "/|\\", Color::Magenta),
        _ => ("▲", "/|\\", Color::White),
    }
}

fn bullet_sprite(id: &str) -> (&'static str, Color) {
    match id {
        "bullet2" => ("╿", Color::Yellow),
        _ => ("║", Color::Cyan),
    }
}

fn asteroid_sprite(id: &str) -> (&'static str, Color) {
    match id {
        "asteroid2" => ("{◆}", Color::Red),
        _ => ("(●)", Color::DarkGrey),
    }
}

fn boss_sprite(id: &str) -> (&'static str, Color) {
    match id {
        "boss2" => ("[═▣═]", Color::Red),
        _ => ("[═◈═]", Color::DarkMagenta),
    }
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Map a playfield point to a terminal cell inside the border, or `None` if
/// it falls outside the visible play area (spawning asteroids start above
/// the top edge, for instance).
fn cell(world: &GameWorld, cols: u16, rows: u16, x: f64, y: f64) -> Option<(u16, u16)> {
    let play_w = cols.saturating_sub(2) as f64;
    let play_h = rows.saturating_sub(4) as f64;
    if play_w < 1.0 || play_h < 1.0 {
        return None;
    }
    let cx = x / world.width * play_w;
    let cy = y / world.height * play_h;
    if cx < 0.0 || cy < 0.0 || cx >= play_w || cy >= play_h {
        return None;
    }
    Some((1 + cx as u16, 2 + cy as u16))
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, cols, rows)?;
    draw_hud(out, world, cols)?;

    let assets = AssetSet::for_level(world.level);

    for asteroid in &world.asteroids {
        draw_asteroid(out, world, asteroid, cols, rows, assets.asteroid)?;
    }
    for bullet in &world.bullets {
        draw_bullet(out, world, bullet, cols, rows, assets.bullet)?;
    }
    if let Some(boss) = &world.boss {
        draw_boss(out, world, boss, cols, rows, assets.boss)?;
    }
    for explosion in &world.explosions {
        draw_explosion(out, world, explosion, cols, rows)?;
    }

    draw_player(out, world, cols, rows, assets.ship)?;
    draw_controls_hint(out, world, rows)?;

    if world.status == GameStatus::LevelComplete {
        draw_level_complete(out, world, cols, rows)?;
    }
    if world.status == GameStatus::GameOver {
        draw_game_over(out, world, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let w = cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row rows-2 — bottom bar
    out.queue(cursor::MoveTo(0, rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &GameWorld, cols: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>8}", world.score)))?;

    // Level — centre
    let level_str = format!("[ LEVEL {} ]", world.level);
    let lx = (cols / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Lives — right
    let hearts: String = "♥".repeat(world.lives as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = cols.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    world: &GameWorld,
    cols: u16,
    rows: u16,
    asset: &str,
) -> std::io::Result<()> {
    let p = &world.player;
    let (tip, wings, color) = ship_sprite(asset);

    if let Some((col, row)) = cell(world, cols, rows, p.rect().x + p.rect().w / 2.0, p.y) {
        out.queue(style::SetForegroundColor(color))?;
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(tip))?;

        // Wings — one row below the tip when there is room
        if row + 1 < rows.saturating_sub(2) {
            out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
            out.queue(Print(wings))?;
        }
    }
    Ok(())
}

fn draw_bullet<W: Write>(
    out: &mut W,
    world: &GameWorld,
    bullet: &Bullet,
    cols: u16,
    rows: u16,
    asset: &str,
) -> std::io::Result<()> {
    let (glyph, color) = bullet_sprite(asset);
    let r = bullet.rect();
    if let Some((col, row)) = cell(world, cols, rows, r.x + r.w / 2.0, r.y + r.h / 2.0) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_asteroid<W: Write>(
    out: &mut W,
    world: &GameWorld,
    asteroid: &Asteroid,
    cols: u16,
    rows: u16,
    asset: &str,
) -> std::io::Result<()> {
    let (glyph, color) = asteroid_sprite(asset);
    let r = asteroid.rect();
    if let Some((col, row)) = cell(world, cols, rows, r.x + r.w / 2.0, r.y + r.h / 2.0) {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_boss<W: Write>(
    out: &mut W,
    world: &GameWorld,
    boss: &Boss,
    cols: u16,
    rows: u16,
    asset: &str,
) -> std::io::Result<()> {
    let (glyph, color) = boss_sprite(asset);
    let r = boss.rect();
    if let Some((col, row)) = cell(world, cols, rows, r.x + r.w / 2.0, r.y + r.h / 2.0) {
        out.queue(cursor::MoveTo(col.saturating_sub(2).max(1), row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    world: &GameWorld,
    explosion: &Explosion,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    if let Some((col, row)) = cell(
        world,
        cols,
        rows,
        explosion.x + explosion.w / 2.0,
        explosion.y + explosion.h / 2.0,
    ) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_EXPLOSION))?;
        out.queue(Print("✸"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, world: &GameWorld, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    if world.status == GameStatus::GameOver {
        out.queue(Print("R : Restart   Q : Quit"))?;
    } else {
        out.queue(Print("← ↑ ↓ → / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered_lines<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

fn draw_level_complete<W: Write>(
    out: &mut W,
    world: &GameWorld,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let next = format!("Get ready for level {}…", world.level + 1);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", Color::Green),
        ("║   LEVEL  COMPLETE!   ║", Color::Green),
        ("╚══════════════════════╝", Color::Green),
        (&next, Color::White),
    ];
    draw_centered_lines(out, cols, rows, lines)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    world: &GameWorld,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", world.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    draw_centered_lines(out, cols, rows, lines)
}
