//! Game entities and the session state machine.

pub mod button;
pub mod character;
pub mod collision;
pub mod logic;
pub mod obstacle;
pub mod scoring;
pub mod spawner;

pub use button::{Button, ButtonAction};
pub use character::Character;
pub use logic::{
    drain_events, process_input, process_tick, Control, Game, GameMode, Session, TickEvent,
    TickReport,
};
pub use obstacle::Obstacle;
pub use scoring::{Difficulty, Scoreboard};
pub use spawner::Spawner;
