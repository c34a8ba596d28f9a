use anyhow::{Context, Result};
use crossterm::event;
use flying_squirrel::audio::{AudioSink, SilentAudio};
use flying_squirrel::core::{FramePacer, SCREEN_HEIGHT, SCREEN_WIDTH, TICKS_PER_SECOND};
use flying_squirrel::game::{drain_events, process_tick, Control, Game, TickEvent};
use flying_squirrel::input::translate;
use flying_squirrel::sprites::Assets;
use flying_squirrel::terminal::{self, Term};
use flying_squirrel::{build_info, logging, ui};
use std::time::Duration;
use tracing::{debug, info};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flying Squirrel - flap between the trees\n");
                println!("Usage: flying-squirrel [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls: Space/Up flaps, Ctrl+C quits.");
                println!("After a crash: click Restart or press R, click Quit or press Q.\n");
                println!(
                    "Set {} to a file path to write a debug log there.",
                    logging::LOG_ENV
                );
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flying-squirrel --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    logging::init()?;
    info!(version = build_info::VERSION, "starting");

    let assets = Assets::load(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .context("built-in artwork is malformed")?;
    let mut game = Game::new(assets, open_audio(), SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut terminal = terminal::setup()?;
    terminal::install_panic_hook();
    let result = run(&mut terminal, &mut game);
    let restored = terminal::restore(&mut terminal);

    info!(
        score = game.score(),
        high_score = game.high_score(),
        "exiting"
    );
    terminal::finish(result, restored)
}

#[cfg(feature = "audio")]
fn open_audio() -> Box<dyn AudioSink> {
    match flying_squirrel::audio::RodioAudio::new() {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            tracing::warn!("no audio output, playing silently: {e}");
            Box::new(SilentAudio)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_audio() -> Box<dyn AudioSink> {
    debug!("built without audio");
    Box::new(SilentAudio)
}

/// Fixed-rate loop: input, one tick, draw, wait for the next frame.
fn run<A: AudioSink>(terminal: &mut Term, game: &mut Game<A>) -> Result<()> {
    let mut pacer = FramePacer::new(TICKS_PER_SECOND);
    let mut rng = rand::thread_rng();

    loop {
        let viewport = ui::viewport_for(terminal.size()?);
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            events.push(translate(&event::read()?, &viewport));
        }
        if drain_events(game, events) == Control::Quit {
            info!("quit requested");
            return Ok(());
        }

        let report = process_tick(game, &mut rng);
        for tick_event in &report.events {
            match tick_event {
                TickEvent::Spawned { x, top } => debug!(x, top, "obstacle spawned"),
                TickEvent::Passed { score, speed } => debug!(score, speed, "obstacle passed"),
                TickEvent::Removed { count } => debug!(count, "obstacles removed"),
                TickEvent::Collided { .. } => {}
            }
        }

        terminal.draw(|frame| ui::draw(frame, game))?;
        pacer.wait();
    }
}
