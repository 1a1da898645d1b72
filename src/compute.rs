//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameWorld` (and, where needed, an RNG handle and the wall-clock time
//! elapsed since the simulation started) and returns a brand-new `GameWorld`.
//! Side effects are limited to the injected RNG.
//!
//! Time never comes from `Instant::now()` in here: the driver passes the
//! elapsed `Duration` in, so tests control the clock the same way they
//! control the RNG seed.

use std::time::Duration;

use rand::Rng;

use crate::entities::{
    Asteroid, Boss, Bullet, EntityId, Explosion, GameStatus, GameWorld, InputState, Player, Rect,
    TimerAction, TimerEvent, ASTEROID_MAX_SIZE, ASTEROID_MIN_SIZE, ASTEROID_SCORE, ASTEROID_SPEED,
    BOSS_SCORE, BOSS_START_Y, BOSS_SWAY, BOSS_WIDTH, BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH,
    EXPLOSION_LIFETIME, FIRE_COOLDOWN, LEVEL_ADVANCE_DELAY, PLAYER_HEIGHT, PLAYER_SPEED,
    PLAYER_START_MARGIN, PLAYER_WIDTH, STARTING_LIVES,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial world for a playfield of the given dimensions.
pub fn init_world(width: f64, height: f64) -> GameWorld {
    GameWorld {
        width,
        height,
        player: Player {
            x: width / 2.0 - PLAYER_WIDTH / 2.0,
            y: height - PLAYER_START_MARGIN,
        },
        bullets: Vec::new(),
        asteroids: Vec::new(),
        explosions: Vec::new(),
        boss: None,
        score: 0,
        lives: STARTING_LIVES,
        level: 1,
        status: GameStatus::Playing,
        last_shot: None,
        timers: Vec::new(),
        next_id: 1,
    }
}

/// Start over, keeping only the playfield dimensions. Permitted only from
/// the game-over screen; any other time this is a no-op clone. Dropping the
/// timer queue here is what invalidates deferred removals that were still in
/// flight when the game ended.
pub fn reset(world: &GameWorld) -> GameWorld {
    if world.status != GameStatus::GameOver {
        return world.clone();
    }
    init_world(world.width, world.height)
}

// ── Idempotent removal operations ────────────────────────────────────────────
// Every removal is a no-op when the target is already gone, so overlapping
// collision sweeps and stale timers can never double-remove. Each returns
// whether anything was actually removed.

pub fn remove_bullet(world: &mut GameWorld, id: EntityId) -> bool {
    let before = world.bullets.len();
    world.bullets.retain(|b| b.id != id);
    world.bullets.len() != before
}

pub fn remove_asteroid(world: &mut GameWorld, id: EntityId) -> bool {
    let before = world.asteroids.len();
    world.asteroids.retain(|a| a.id != id);
    world.asteroids.len() != before
}

pub fn remove_explosion(world: &mut GameWorld, id: EntityId) -> bool {
    let before = world.explosions.len();
    world.explosions.retain(|e| e.id != id);
    world.explosions.len() != before
}

pub fn clear_boss(world: &mut GameWorld) -> bool {
    world.boss.take().is_some()
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick. `now` is the wall clock elapsed since
/// the simulation started; the fire cooldown, the boss sway and every
/// deferred removal derive from it.
pub fn tick(world: &GameWorld, input: &InputState, now: Duration, rng: &mut impl Rng) -> GameWorld {
    let mut world = world.clone();

    // ── 1. Fire due timers ───────────────────────────────────────────────────
    // Runs in every status: the level-complete delay has to elapse while the
    // simulation itself is frozen.
    drain_timers(&mut world, now);

    // Nothing else moves outside `Playing`.
    if world.status != GameStatus::Playing {
        return world;
    }

    // ── 2. Player movement & firing ──────────────────────────────────────────
    move_player(&mut world, input);
    try_fire(&mut world, input, now);

    // ── 3. Projectiles, asteroids, boss ──────────────────────────────────────
    move_bullets(&mut world);
    move_asteroids(&mut world);
    move_boss(&mut world, now);

    // ── 4. Spawning ──────────────────────────────────────────────────────────
    spawn_enemies(&mut world, rng);

    // ── 5. Collision sweeps ──────────────────────────────────────────────────
    collide_bullets_asteroids(&mut world, now);
    collide_bullets_boss(&mut world, now);
    collide_player_asteroids(&mut world, now);

    // ── 6. Level completion ──────────────────────────────────────────────────
    check_level_completion(&mut world, now);

    world
}

// ── Timers ───────────────────────────────────────────────────────────────────

fn alloc_id(world: &mut GameWorld) -> EntityId {
    let id = world.next_id;
    world.next_id += 1;
    id
}

fn schedule(world: &mut GameWorld, due: Duration, action: TimerAction) {
    world.timers.push(TimerEvent { due, action });
}

fn drain_timers(world: &mut GameWorld, now: Duration) {
    let mut due = Vec::new();
    world.timers.retain(|ev| {
        if ev.due <= now {
            due.push(ev.action.clone());
            false
        } else {
            true
        }
    });
    for action in due {
        match action {
            TimerAction::RemoveExplosion(id) => {
                remove_explosion(world, id);
            }
            TimerAction::AdvanceLevel => advance_level(world),
        }
    }
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Held directions apply independently, so diagonals work; each axis clamps
/// to the playfield on its own.
fn move_player(world: &mut GameWorld, input: &InputState) {
    let p = &mut world.player;
    if input.left {
        p.x -= PLAYER_SPEED;
    }
    if input.right {
        p.x += PLAYER_SPEED;
    }
    if input.up {
        p.y -= PLAYER_SPEED;
    }
    if input.down {
        p.y += PLAYER_SPEED;
    }
    p.x = p.x.clamp(0.0, world.width - PLAYER_WIDTH);
    p.y = p.y.clamp(0.0, world.height - PLAYER_HEIGHT);
}

/// Fire while the trigger is held, at most once per `FIRE_COOLDOWN` of wall
/// clock. A rate-limited request is ignored, not an error. The bullet leaves
/// centred on the player, just above its top edge.
fn try_fire(world: &mut GameWorld, input: &InputState, now: Duration) {
    if !input.fire {
        return;
    }
    if let Some(last) = world.last_shot {
        if now.saturating_sub(last) < FIRE_COOLDOWN {
            return;
        }
    }
    let id = alloc_id(world);
    let p = &world.player;
    world.bullets.push(Bullet {
        id,
        x: p.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
        y: p.y - BULLET_HEIGHT,
    });
    world.last_shot = Some(now);
}

fn move_bullets(world: &mut GameWorld) {
    for b in &mut world.bullets {
        b.y -= BULLET_SPEED;
    }
    // Gone once the bottom edge clears the top of the field.
    world.bullets.retain(|b| b.y >= -BULLET_HEIGHT);
}

fn move_asteroids(world: &mut GameWorld) {
    for a in &mut world.asteroids {
        a.y += ASTEROID_SPEED;
    }
    // Purged once the top edge drops below the bottom of the field.
    let bottom = world.height;
    world.asteroids.retain(|a| a.y <= bottom);
}

/// The boss sways horizontally on a sinusoid of the wall clock, pinned to
/// the field.
fn move_boss(world: &mut GameWorld, now: Duration) {
    let width = world.width;
    if let Some(boss) = world.boss.as_mut() {
        boss.x += now.as_secs_f64().sin() * BOSS_SWAY;
        boss.x = boss.x.clamp(0.0, width - BOSS_WIDTH);
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Two independent gates, evaluated every tick.
fn spawn_enemies(world: &mut GameWorld, rng: &mut impl Rng) {
    // Asteroid gate: 5-in-200 per tick, random size, anywhere it fits along
    // the top, fully above the field.
    if rng.gen_ratio(5, 200) {
        let w = rng.gen_range(ASTEROID_MIN_SIZE..=ASTEROID_MAX_SIZE);
        let h = rng.gen_range(ASTEROID_MIN_SIZE..=ASTEROID_MAX_SIZE);
        let x = rng.gen_range(0.0..=(world.width - w));
        let id = alloc_id(world);
        world.asteroids.push(Asteroid { id, x, y: -h, w, h });
    }

    // Boss gate: every third level, once the score clears the bar, and only
    // while no boss is alive.
    if world.boss.is_none() && world.level % 3 == 0 && world.score > world.level * 500 {
        world.boss = Some(Boss {
            x: world.width / 2.0 - BOSS_WIDTH / 2.0,
            y: BOSS_START_Y,
            health: world.level * 10,
        });
    }
}

// ── Collision sweeps ─────────────────────────────────────────────────────────
// All sweeps use strict AABB overlap. The two bullet sweeps run newest-first
// (creation order reversed), so when several candidates overlap at once the
// most recently spawned one wins — a fixed policy rather than an accident of
// storage order. The player sweep runs oldest-first.

fn collide_bullets_asteroids(world: &mut GameWorld, now: Duration) {
    let bullets: Vec<(EntityId, Rect)> =
        world.bullets.iter().rev().map(|b| (b.id, b.rect())).collect();

    for (bullet_id, bullet_rect) in bullets {
        let hit = world
            .asteroids
            .iter()
            .rev()
            .find(|a| bullet_rect.intersects(&a.rect()))
            .map(|a| (a.id, a.rect()));

        // One kill per bullet per tick.
        if let Some((asteroid_id, asteroid_rect)) = hit {
            spawn_explosion(world, asteroid_rect, now);
            remove_bullet(world, bullet_id);
            remove_asteroid(world, asteroid_id);
            world.score += ASTEROID_SCORE;
        }
    }
}

fn collide_bullets_boss(world: &mut GameWorld, now: Duration) {
    let boss_rect = match &world.boss {
        Some(boss) => boss.rect(),
        None => return,
    };

    // Only bullets that survived the asteroid sweep are candidates.
    let bullets: Vec<(EntityId, Rect)> =
        world.bullets.iter().rev().map(|b| (b.id, b.rect())).collect();

    for (bullet_id, bullet_rect) in bullets {
        if !bullet_rect.intersects(&boss_rect) {
            continue;
        }
        remove_bullet(world, bullet_id);
        let dead = match world.boss.as_mut() {
            Some(boss) => {
                boss.health -= 1;
                boss.health == 0
            }
            None => return,
        };
        if dead {
            spawn_explosion(world, boss_rect, now);
            clear_boss(world);
            world.score += BOSS_SCORE;
            return;
        }
    }
}

fn collide_player_asteroids(world: &mut GameWorld, now: Duration) {
    let player_rect = world.player.rect();

    // Snapshot in creation order; the oldest overlapping asteroid is the one
    // that connects. At most one life is lost per tick no matter how many
    // overlap simultaneously.
    let hit = world
        .asteroids
        .iter()
        .find(|a| player_rect.intersects(&a.rect()))
        .map(|a| (a.id, a.rect()));

    if let Some((asteroid_id, asteroid_rect)) = hit {
        spawn_explosion(world, asteroid_rect, now);
        remove_asteroid(world, asteroid_id);
        world.lives = world.lives.saturating_sub(1);
        if world.lives == 0 {
            world.status = GameStatus::GameOver;
        }
    }
}

fn spawn_explosion(world: &mut GameWorld, at: Rect, now: Duration) {
    let id = alloc_id(world);
    world.explosions.push(Explosion { id, x: at.x, y: at.y, w: at.w, h: at.h });
    schedule(world, now + EXPLOSION_LIFETIME, TimerAction::RemoveExplosion(id));
}

// ── Level completion ─────────────────────────────────────────────────────────

fn check_level_completion(world: &mut GameWorld, now: Duration) {
    if world.status == GameStatus::Playing && world.score >= world.level * 1000 {
        world.status = GameStatus::LevelComplete;
        schedule(world, now + LEVEL_ADVANCE_DELAY, TimerAction::AdvanceLevel);
    }
}

/// Leave `LevelComplete`: bump the level and resume play. Guarded so a stale
/// timer cannot advance a world that is no longer waiting.
fn advance_level(world: &mut GameWorld) {
    if world.status != GameStatus::LevelComplete {
        return;
    }
    world.level += 1;
    world.status = GameStatus::Playing;
}
