//! Session orchestration: the per-tick simulation and the
//! PLAYING / GAME_OVER state machine.
//!
//! [`process_tick`] runs one fixed-rate tick and returns a [`TickReport`]
//! describing what happened, so the binary decides what to log and the core
//! stays free of presentation concerns.

use super::button::{Button, ButtonAction};
use super::character::Character;
use super::obstacle::Obstacle;
use super::scoring::{Difficulty, Scoreboard};
use super::spawner::Spawner;
use crate::audio::{AudioSink, Track};
use crate::core::constants::SPEED_INCREMENT;
use crate::input::InputEvent;
use crate::sprites::Assets;
use rand::Rng;
use std::collections::VecDeque;
use tracing::info;

/// Session-scoped mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Playing,
    GameOver,
}

/// Whether the outer loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    Spawned { x: f64, top: i32 },
    Passed { score: u32, speed: f64 },
    Removed { count: usize },
    Collided { score: u32, high_score: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<TickEvent>,
}

impl TickReport {
    pub fn collided(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, TickEvent::Collided { .. }))
    }

    pub fn passes(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TickEvent::Passed { .. }))
            .count()
    }
}

/// One playthrough: from spawn to game over.
#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    character: Character,
    obstacles: Vec<Obstacle>,
    spawner: Spawner,
    difficulty: Difficulty,
    frame: u64,
}

impl Session {
    pub fn new(assets: &Assets, screen_height: i32) -> Self {
        Self {
            mode: GameMode::Playing,
            character: Character::new(
                screen_height,
                assets.character.clone(),
                assets.character_mask.clone(),
            ),
            obstacles: Vec::new(),
            spawner: Spawner::new(),
            difficulty: Difficulty::new(),
            frame: 0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Live obstacles in spawn order, which is also left-to-right order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Ticks played so far in this session.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// Everything that outlives a single session.
pub struct Game<A: AudioSink> {
    assets: Assets,
    screen_width: i32,
    screen_height: i32,
    session: Session,
    scoreboard: Scoreboard,
    buttons: [Button; 2],
    pending: VecDeque<InputEvent>,
    audio: A,
}

impl<A: AudioSink> Game<A> {
    /// Create the game and start the first session.
    pub fn new(assets: Assets, audio: A, screen_width: i32, screen_height: i32) -> Self {
        let session = Session::new(&assets, screen_height);
        let mut game = Self {
            assets,
            screen_width,
            screen_height,
            session,
            scoreboard: Scoreboard::new(),
            buttons: [
                Button::restart(screen_width, screen_height),
                Button::quit(screen_width, screen_height),
            ],
            pending: VecDeque::new(),
            audio,
        };
        game.audio.play_looping(Track::Background);
        info!("session started");
        game
    }

    pub fn mode(&self) -> GameMode {
        self.session.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Stage the character at `y` with `velocity`, clamped to its bounds.
    #[doc(hidden)]
    pub fn place_character(&mut self, y: f64, velocity: f64) {
        self.session.character.place(y, velocity);
    }

    /// Stage an extra obstacle in the current session.
    #[doc(hidden)]
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.session.obstacles.push(obstacle);
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn screen_size(&self) -> (i32, i32) {
        (self.screen_width, self.screen_height)
    }

    /// Events posted by the game itself, delivered on the next drain.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Replace the session with a fresh one. The high score carries over.
    pub fn restart(&mut self) {
        self.session = Session::new(&self.assets, self.screen_height);
        self.scoreboard.reset_for_new_session();
        self.audio.play_looping(Track::Background);
        info!(high_score = self.scoreboard.high_score(), "session restarted");
    }

    fn end_session(&mut self) {
        self.session.mode = GameMode::GameOver;
        self.audio.stop();
        self.scoreboard.finish_session();
        info!(
            score = self.scoreboard.score(),
            high_score = self.scoreboard.high_score(),
            frame = self.session.frame,
            "game over"
        );
    }

    fn activate(&mut self, action: ButtonAction) -> Control {
        match action {
            ButtonAction::Restart => {
                self.pending.push_back(InputEvent::RestartRequested);
                Control::Continue
            }
            ButtonAction::Quit => Control::Quit,
        }
    }
}

/// React to a single input event.
pub fn process_input<A: AudioSink>(game: &mut Game<A>, event: InputEvent) -> Control {
    let playing = game.mode() == GameMode::Playing;

    match event {
        InputEvent::Quit => Control::Quit,
        InputEvent::Jump => {
            if playing {
                game.session.character.impulse();
            }
            Control::Continue
        }
        InputEvent::Click { x, y } if !playing => {
            let clicked = game
                .buttons
                .iter()
                .find_map(|button| button.handle_click(x, y));
            match clicked {
                Some(action) => game.activate(action),
                None => Control::Continue,
            }
        }
        InputEvent::Activate(action) if !playing => game.activate(action),
        InputEvent::RestartRequested if !playing => {
            game.restart();
            Control::Continue
        }
        _ => Control::Continue,
    }
}

/// Deliver events posted by the game on the previous pass, then `events`.
/// Stops at the first event that asks to quit.
pub fn drain_events<A, I>(game: &mut Game<A>, events: I) -> Control
where
    A: AudioSink,
    I: IntoIterator<Item = InputEvent>,
{
    let mut batch: Vec<InputEvent> = game.pending.drain(..).collect();
    batch.extend(events);

    for event in batch {
        if process_input(game, event) == Control::Quit {
            return Control::Quit;
        }
    }
    Control::Continue
}

/// Run one simulation tick. Does nothing outside PLAYING.
///
/// Order: character physics, spawn check, then for every obstacle move,
/// collision test and pass test; off-screen obstacles are dropped and the
/// speed increase for this tick's passes is applied once every obstacle has
/// moved. A collision ends the session after the whole tick is resolved.
pub fn process_tick<A: AudioSink, R: Rng>(game: &mut Game<A>, rng: &mut R) -> TickReport {
    let mut report = TickReport::default();
    if game.mode() != GameMode::Playing {
        return report;
    }

    let session = &mut game.session;
    session.character.update();

    if let Some(obstacle) =
        session
            .spawner
            .maybe_spawn(session.frame, rng, game.screen_height, &game.assets.obstacle)
    {
        report.events.push(TickEvent::Spawned {
            x: obstacle.x(),
            top: obstacle.top(),
        });
        session.obstacles.push(obstacle);
    }

    let speed = session.difficulty.speed();
    let character_x = session.character.x();
    let mut collided = false;
    let mut passes = 0;

    for obstacle in &mut session.obstacles {
        obstacle.update(speed);
        if obstacle.hits(&session.character) {
            collided = true;
        }
        if obstacle.try_pass(character_x) {
            passes += 1;
            let score = game.scoreboard.record_pass();
            report.events.push(TickEvent::Passed {
                score,
                speed: speed + passes as f64 * SPEED_INCREMENT,
            });
        }
    }

    let before = session.obstacles.len();
    session.obstacles.retain(|obstacle| !obstacle.is_offscreen());
    let removed = before - session.obstacles.len();
    if removed > 0 {
        report.events.push(TickEvent::Removed { count: removed });
    }

    for _ in 0..passes {
        session.difficulty.on_obstacle_passed();
    }
    session.frame += 1;

    if collided {
        game.end_session();
        report.events.push(TickEvent::Collided {
            score: game.scoreboard.score(),
            high_score: game.scoreboard.high_score(),
        });
    }

    report
}
