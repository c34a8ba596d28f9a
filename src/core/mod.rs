//! Constants and frame pacing shared by the simulation and the binary.

pub mod constants;
pub mod pacing;

pub use constants::*;
pub use pacing::FramePacer;
