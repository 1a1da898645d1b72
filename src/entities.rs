//! All game entity types — plain data plus the geometry they share.

use std::time::Duration;

// ── Playfield & tuning constants ─────────────────────────────────────────────

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 50.0;
/// Vertical gap between the bottom edge and the player's start position.
pub const PLAYER_START_MARGIN: f64 = 100.0;

/// Units per tick, per axis, while a direction is held.
pub const PLAYER_SPEED: f64 = 5.0;
/// Units per tick a bullet climbs.
pub const BULLET_SPEED: f64 = 10.0;
/// Units per tick an asteroid falls.
pub const ASTEROID_SPEED: f64 = 3.0;

pub const BULLET_WIDTH: f64 = 5.0;
pub const BULLET_HEIGHT: f64 = 15.0;

/// Asteroid width and height are sampled independently from this range.
pub const ASTEROID_MIN_SIZE: f64 = 30.0;
pub const ASTEROID_MAX_SIZE: f64 = 60.0;

pub const BOSS_WIDTH: f64 = 100.0;
pub const BOSS_HEIGHT: f64 = 80.0;
pub const BOSS_START_Y: f64 = 50.0;
/// Peak horizontal sway the boss gains per tick.
pub const BOSS_SWAY: f64 = 2.0;

/// Minimum wall-clock interval between two successful shots.
pub const FIRE_COOLDOWN: Duration = Duration::from_millis(300);
/// How long an explosion stays on screen before its removal timer fires.
pub const EXPLOSION_LIFETIME: Duration = Duration::from_millis(300);
/// Pause between the level-complete banner appearing and play resuming.
pub const LEVEL_ADVANCE_DELAY: Duration = Duration::from_millis(500);

pub const ASTEROID_SCORE: u32 = 100;
pub const BOSS_SCORE: u32 = 100;
pub const STARTING_LIVES: u32 = 3;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// An axis-aligned box. Overlap is strict — rectangles that merely share an
/// edge do not intersect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Handle for addressing bullets, asteroids and explosions after the fact
/// (timers, removals). Allocated once per entity, never reused.
pub type EntityId = u32;

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f64,
    pub y: f64,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: PLAYER_WIDTH, h: PLAYER_HEIGHT }
    }
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: BULLET_WIDTH, h: BULLET_HEIGHT }
    }
}

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Asteroid {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.w, h: self.h }
    }
}

/// At most one boss is alive at a time; the world holds it in an `Option`.
/// Health stays above zero for as long as the boss lives.
#[derive(Clone, Debug)]
pub struct Boss {
    pub x: f64,
    pub y: f64,
    pub health: u32,
}

impl Boss {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: BOSS_WIDTH, h: BOSS_HEIGHT }
    }
}

/// Short-lived visual left where something was destroyed, sized like the
/// entity it replaced. Removed by a scheduled timer.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// The five logical controls the input provider can report. Anything else a
/// terminal delivers simply has no `Control` and never reaches the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

/// Polled snapshot of the held controls, consumed once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

impl InputState {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
            Control::Up => self.up = pressed,
            Control::Down => self.down = pressed,
            Control::Fire => self.fire = pressed,
        }
    }
}

// ── Scheduled timers ──────────────────────────────────────────────────────────

/// Deferred action waiting on the wall clock, drained by the tick. Actions
/// address entities by id, so firing one late (or twice) is harmless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Remove one explosion; a no-op if it is already gone.
    RemoveExplosion(EntityId),
    /// Leave `LevelComplete` and start the next level.
    AdvanceLevel,
}

#[derive(Clone, Debug)]
pub struct TimerEvent {
    pub due: Duration,
    pub action: TimerAction,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Simulation frozen while the level-complete banner shows.
    LevelComplete,
    /// Simulation stopped until an explicit reset.
    GameOver,
}

/// The entire simulation state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub width: f64,
    pub height: f64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub explosions: Vec<Explosion>,
    pub boss: Option<Boss>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub status: GameStatus,
    /// Wall-clock time of the last successful shot, if any.
    pub last_shot: Option<Duration>,
    /// Pending deferred actions in scheduling order.
    pub timers: Vec<TimerEvent>,
    /// Next entity id to hand out.
    pub next_id: EntityId,
}
