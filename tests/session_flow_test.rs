//! Integration test: the PLAYING / GAME_OVER cycle driven through input
//! events, including restart via the posted restart request and the
//! high score carrying across sessions.

use flying_squirrel::audio::{AudioCall, AudioLog, Track};
use flying_squirrel::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use flying_squirrel::game::{
    drain_events, process_input, process_tick, ButtonAction, Control, Game, GameMode, Obstacle,
};
use flying_squirrel::input::InputEvent;
use flying_squirrel::render::{render_frame, CommandRecorder};
use flying_squirrel::sprites::Assets;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_game() -> Game<AudioLog> {
    let assets = Assets::load(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32).unwrap();
    Game::new(assets, AudioLog::default(), SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Queue `count` obstacles that the character clears on the next tick.
fn queue_passes(game: &mut Game<AudioLog>, count: usize) {
    let tiles = game.assets().obstacle.clone();
    let width = tiles.width() as f64;
    for i in 0..count {
        let x = 64.0 - width + 1.0 - i as f64;
        let obstacle = Obstacle::new(x, 300, SCREEN_HEIGHT, &tiles);
        game.insert_obstacle(obstacle);
    }
}

/// Put a full-height wall on the character so the next tick collides.
fn crash(game: &mut Game<AudioLog>, rng: &mut ChaCha8Rng) {
    let wall = Obstacle::new(64.0, 500, SCREEN_HEIGHT, &game.assets().obstacle);
    game.place_character(100.0, 0.0);
    game.insert_obstacle(wall);
    let report = process_tick(game, rng);
    assert!(report.collided());
    assert_eq!(game.mode(), GameMode::GameOver);
}

fn click_button(game: &mut Game<AudioLog>, action: ButtonAction) -> Control {
    let button = game
        .buttons()
        .iter()
        .find(|button| button.action() == action)
        .cloned()
        .unwrap();
    let (x, y) = button.rect().center();
    drain_events(game, [InputEvent::Click { x, y }])
}

#[test]
fn test_fall_and_flap_from_start() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let start = game.session().character().y();
    assert_eq!(start, (SCREEN_HEIGHT / 2) as f64);
    assert_eq!(game.session().character().x(), 64.0);

    process_tick(&mut game, &mut rng);
    assert_eq!(game.session().character().velocity(), 0.5);
    assert_eq!(game.session().character().y(), start + 0.5);

    drain_events(&mut game, [InputEvent::Jump]);
    process_tick(&mut game, &mut rng);
    assert_eq!(game.session().character().velocity(), -8.5);
}

#[test]
fn test_high_score_is_best_of_sessions() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    queue_passes(&mut game, 2);
    game.place_character(380.0, -0.5);
    process_tick(&mut game, &mut rng);
    assert_eq!(game.score(), 2);
    crash(&mut game, &mut rng);
    assert_eq!(game.high_score(), 2);

    assert_eq!(click_button(&mut game, ButtonAction::Restart), Control::Continue);
    drain_events(&mut game, []);
    assert_eq!(game.mode(), GameMode::Playing);
    assert_eq!(game.score(), 0);

    queue_passes(&mut game, 1);
    game.place_character(380.0, -0.5);
    process_tick(&mut game, &mut rng);
    crash(&mut game, &mut rng);
    assert_eq!(game.score(), 1);
    assert_eq!(game.high_score(), 2);

    let mut recorder = CommandRecorder::new();
    render_frame(&game, &mut recorder);
    let texts = recorder.texts();
    assert!(texts.contains(&"Score: 1"));
    assert!(texts.contains(&"High Score: 2"));
}

#[test]
fn test_restart_takes_effect_on_next_drain() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    crash(&mut game, &mut rng);

    click_button(&mut game, ButtonAction::Restart);
    assert_eq!(game.mode(), GameMode::GameOver);

    // A tick in between does nothing while the request waits.
    process_tick(&mut game, &mut rng);
    assert_eq!(game.mode(), GameMode::GameOver);

    drain_events(&mut game, []);
    assert_eq!(game.mode(), GameMode::Playing);
    assert!(game.session().obstacles().is_empty());
    assert_eq!(game.session().difficulty().speed(), 3.0);
}

#[test]
fn test_music_follows_sessions() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    crash(&mut game, &mut rng);
    process_input(&mut game, InputEvent::Activate(ButtonAction::Restart));
    drain_events(&mut game, []);

    assert_eq!(
        game.audio().calls,
        vec![
            AudioCall::Play(Track::Background),
            AudioCall::Stop,
            AudioCall::Play(Track::Background),
        ]
    );
}

#[test]
fn test_quit_button_and_ctrl_c() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    assert_eq!(drain_events(&mut game, [InputEvent::Quit]), Control::Quit);

    crash(&mut game, &mut rng);
    assert_eq!(click_button(&mut game, ButtonAction::Quit), Control::Quit);
}

#[test]
fn test_game_over_ignores_flaps_and_stray_clicks() {
    let mut game = new_game();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    crash(&mut game, &mut rng);
    let velocity = game.session().character().velocity();

    let control = drain_events(
        &mut game,
        [InputEvent::Jump, InputEvent::Click { x: 10.0, y: 10.0 }],
    );
    assert_eq!(control, Control::Continue);
    assert_eq!(game.session().character().velocity(), velocity);
    assert_eq!(game.pending_events(), 0);
    assert_eq!(game.mode(), GameMode::GameOver);
}
