//! Time-triggered obstacle spawning with position-based placement.
//!
//! The trigger fires every `SPAWN_INTERVAL_TICKS` frames counted from the
//! start of the session. Placement ignores how far earlier obstacles have
//! scrolled: each new obstacle goes `SPAWN_SPACING` to the right of the
//! previous spawn point.

use super::obstacle::{top_height_range, Obstacle};
use crate::core::constants::{FIRST_SPAWN_REFERENCE_X, SPAWN_INTERVAL_TICKS, SPAWN_SPACING};
use crate::sprites::ObstacleTiles;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Spawner {
    last_spawn_x: f64,
    interval: u64,
    spacing: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            last_spawn_x: FIRST_SPAWN_REFERENCE_X,
            interval: SPAWN_INTERVAL_TICKS,
            spacing: SPAWN_SPACING,
        }
    }

    pub fn last_spawn_x(&self) -> f64 {
        self.last_spawn_x
    }

    pub fn should_spawn(&self, frame: u64) -> bool {
        frame % self.interval == 0
    }

    /// Uniformly random top-segment height, margins inclusive.
    pub fn random_top<R: Rng>(rng: &mut R, screen_height: i32) -> i32 {
        let (min, max) = top_height_range(screen_height);
        rng.gen_range(min..=max)
    }

    /// Create the next obstacle and move the spawn point along.
    pub fn spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        screen_height: i32,
        tiles: &ObstacleTiles,
    ) -> Obstacle {
        let x = self.last_spawn_x + self.spacing;
        self.last_spawn_x = x;
        Obstacle::new(x, Self::random_top(rng, screen_height), screen_height, tiles)
    }

    pub fn maybe_spawn<R: Rng>(
        &mut self,
        frame: u64,
        rng: &mut R,
        screen_height: i32,
        tiles: &ObstacleTiles,
    ) -> Option<Obstacle> {
        self.should_spawn(frame)
            .then(|| self.spawn(rng, screen_height, tiles))
    }
}
