use space_shooter::assets::AssetSet;
use space_shooter::entities::*;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[test]
fn rect_overlap_is_strict() {
    let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };

    // Sharing an edge is not an overlap
    let right_neighbour = Rect { x: 10.0, y: 0.0, w: 10.0, h: 10.0 };
    let below_neighbour = Rect { x: 0.0, y: 10.0, w: 10.0, h: 10.0 };
    assert!(!a.intersects(&right_neighbour));
    assert!(!a.intersects(&below_neighbour));

    // Any real penetration is
    let overlapping = Rect { x: 9.9, y: 9.9, w: 10.0, h: 10.0 };
    assert!(a.intersects(&overlapping));
    assert!(overlapping.intersects(&a));
}

#[test]
fn rect_containment_counts_as_overlap() {
    let outer = Rect { x: 0.0, y: 0.0, w: 100.0, h: 100.0 };
    let inner = Rect { x: 40.0, y: 40.0, w: 10.0, h: 10.0 };
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn rect_corner_touch_is_not_overlap() {
    let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
    let diagonal = Rect { x: 10.0, y: 10.0, w: 10.0, h: 10.0 };
    assert!(!a.intersects(&diagonal));
}

#[test]
fn entity_rects_use_their_sizes() {
    let player = Player { x: 10.0, y: 20.0 };
    assert_eq!(player.rect(), Rect { x: 10.0, y: 20.0, w: PLAYER_WIDTH, h: PLAYER_HEIGHT });

    let bullet = Bullet { id: 1, x: 5.0, y: 6.0 };
    assert_eq!(bullet.rect(), Rect { x: 5.0, y: 6.0, w: BULLET_WIDTH, h: BULLET_HEIGHT });

    // Asteroids carry their own sampled dimensions
    let asteroid = Asteroid { id: 2, x: 0.0, y: 0.0, w: 33.0, h: 57.0 };
    assert_eq!(asteroid.rect().w, 33.0);
    assert_eq!(asteroid.rect().h, 57.0);

    let boss = Boss { x: 350.0, y: 50.0, health: 30 };
    assert_eq!(boss.rect().w, BOSS_WIDTH);
    assert_eq!(boss.rect().h, BOSS_HEIGHT);
}

// ── Input state ───────────────────────────────────────────────────────────────

#[test]
fn input_state_starts_released() {
    let input = InputState::default();
    assert!(!input.left && !input.right && !input.up && !input.down && !input.fire);
}

#[test]
fn input_state_tracks_press_and_release() {
    let mut input = InputState::default();

    input.set(Control::Left, true);
    input.set(Control::Fire, true);
    assert!(input.left);
    assert!(input.fire);
    assert!(!input.right);

    input.set(Control::Left, false);
    assert!(!input.left);
    assert!(input.fire); // other controls unaffected
}

// ── Asset sets ────────────────────────────────────────────────────────────────

#[test]
fn asset_set_base_tier() {
    let set = AssetSet::for_level(1);
    assert_eq!(set.ship, "ship1");
    assert_eq!(set.bullet, "bullet1");
    assert_eq!(set.asteroid, "asteroid1");
    assert_eq!(set.boss, "boss1");
}

#[test]
fn asset_set_switches_at_level_two() {
    let set = AssetSet::for_level(2);
    assert_eq!(set.ship, "ship2");
    assert_eq!(set.bullet, "bullet2");
    assert_eq!(set.asteroid, "asteroid2");
    assert_eq!(set.boss, "boss1"); // boss keeps its base look until level 6
}

#[test]
fn asset_set_persists_across_mid_levels() {
    assert_eq!(AssetSet::for_level(3), AssetSet::for_level(2));
    assert_eq!(AssetSet::for_level(5), AssetSet::for_level(2));
}

#[test]
fn asset_set_boss_switches_at_level_six() {
    assert_eq!(AssetSet::for_level(6).boss, "boss2");
    assert_eq!(AssetSet::for_level(9).boss, "boss2"); // and stays switched
    assert_eq!(AssetSet::for_level(6).ship, "ship2");
}

// ── World ─────────────────────────────────────────────────────────────────────

#[test]
fn game_world_clone_is_independent() {
    let original = GameWorld {
        width: 800.0,
        height: 600.0,
        player: Player { x: 375.0, y: 500.0 },
        bullets: Vec::new(),
        asteroids: Vec::new(),
        explosions: Vec::new(),
        boss: None,
        score: 0,
        lives: 3,
        level: 1,
        status: GameStatus::Playing,
        last_shot: None,
        timers: Vec::new(),
        next_id: 1,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.asteroids.push(Asteroid { id: 1, x: 5.0, y: 5.0, w: 30.0, h: 30.0 });

    assert_eq!(original.player.x, 375.0);
    assert_eq!(original.score, 0);
    assert!(original.asteroids.is_empty());
}

#[test]
fn status_equality() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(GameStatus::LevelComplete, GameStatus::GameOver);
    assert_eq!(Control::Fire, Control::Fire);
    assert_ne!(Control::Left, Control::Right);
}
