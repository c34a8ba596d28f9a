//! Flying Squirrel - a side-scrolling flapping game for the terminal.
//!
//! The simulation runs at a fixed 60 ticks per second on a 1280×720 logical
//! screen. This library exposes the simulation, the rendering boundary and
//! the terminal front end so that the binary stays a thin loop.

pub mod audio;
pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod sprites;
pub mod terminal;
pub mod ui;

pub use crate::core::constants;
pub use game::{Control, Game, GameMode, TickEvent, TickReport};
