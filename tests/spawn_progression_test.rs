//! Integration test: obstacle cadence, scrolling, scoring and difficulty
//! across many ticks of a real session.

use flying_squirrel::audio::AudioLog;
use flying_squirrel::constants::{
    OBSTACLE_GAP, SCREEN_HEIGHT, SCREEN_WIDTH, SPAWN_SPACING, SPEED_INCREMENT,
};
use flying_squirrel::game::{process_tick, Game, GameMode, TickEvent};
use flying_squirrel::sprites::Assets;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_game() -> Game<AudioLog> {
    let assets = Assets::load(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32).unwrap();
    Game::new(assets, AudioLog::default(), SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Park the character in the middle of the gap of the next obstacle it has
/// not yet passed, so it never touches a segment.
fn steer_through_gap(game: &mut Game<AudioLog>) {
    let character_x = game.session().character().x();
    let target = game
        .session()
        .obstacles()
        .iter()
        .find(|obstacle| obstacle.x() + obstacle.width() >= character_x)
        .map(|obstacle| obstacle.top() as f64 + OBSTACLE_GAP as f64 / 2.0 - 21.5);
    if let Some(y) = target {
        game.place_character(y, 0.0);
    }
}

#[test]
fn test_one_obstacle_after_75_ticks_and_two_after_150() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..75 {
        process_tick(&mut game, &mut rng);
    }
    assert_eq!(game.session().obstacles().len(), 1);

    for _ in 0..75 {
        process_tick(&mut game, &mut rng);
    }
    assert_eq!(game.session().obstacles().len(), 2);
    assert_eq!(game.mode(), GameMode::Playing);
}

#[test]
fn test_spawn_positions_advance_by_spacing() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut spawned_at = Vec::new();

    for _ in 0..300 {
        for event in process_tick(&mut game, &mut rng).events {
            if let TickEvent::Spawned { x, top } = event {
                assert!((50..=SCREEN_HEIGHT - OBSTACLE_GAP - 50).contains(&top));
                spawned_at.push(x);
            }
        }
    }

    let first = SCREEN_WIDTH as f64 + SPAWN_SPACING;
    let expected: Vec<f64> = (0..4).map(|i| first + i as f64 * SPAWN_SPACING).collect();
    assert_eq!(spawned_at, expected);
}

#[test]
fn test_same_seed_spawns_same_obstacles() {
    let tops = |seed: u64| {
        let mut game = new_game();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..400 {
            process_tick(&mut game, &mut rng);
        }
        game.session()
            .obstacles()
            .iter()
            .map(|obstacle| obstacle.top())
            .collect::<Vec<_>>()
    };
    assert_eq!(tops(99), tops(99));
}

#[test]
fn test_character_in_the_gaps_never_crashes() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut removed = 0;

    for _ in 0..3000 {
        steer_through_gap(&mut game);
        let report = process_tick(&mut game, &mut rng);
        assert!(!report.collided());
        for event in report.events {
            if let TickEvent::Removed { count } = event {
                removed += count;
            }
        }
    }

    assert_eq!(game.mode(), GameMode::Playing);
    assert!(game.score() > 0);
    assert!(removed > 0);
    let expected_speed = 3.0 + game.score() as f64 * SPEED_INCREMENT;
    assert!((game.session().difficulty().speed() - expected_speed).abs() < 1e-9);
}

#[test]
fn test_every_obstacle_is_scored_once_and_leaves_once() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut passes = 0;

    for _ in 0..2000 {
        steer_through_gap(&mut game);
        let report = process_tick(&mut game, &mut rng);
        passes += report.passes();
        for obstacle in game.session().obstacles() {
            assert!(obstacle.x() + obstacle.width() >= 0.0);
        }
    }

    assert_eq!(passes as u32, game.score());
}
