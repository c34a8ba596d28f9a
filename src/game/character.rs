//! The falling character and its per-tick physics.

use crate::core::constants::{
    CHARACTER_START_X, GRAVITY, LIFT, TERMINAL_VELOCITY, VERTICAL_MARGIN,
};
use crate::render::{Renderable, Renderer};
use crate::sprites::{Mask, Sprite};

/// Player-controlled body. Only the vertical axis moves.
#[derive(Debug, Clone)]
pub struct Character {
    x: f64,
    y: f64,
    velocity: f64,
    min_y: f64,
    max_y: f64,
    sprite: Sprite,
    mask: Mask,
}

impl Character {
    /// Place a fresh character at the start position for a screen of the
    /// given height.
    pub fn new(screen_height: i32, sprite: Sprite, mask: Mask) -> Self {
        Self {
            x: CHARACTER_START_X,
            y: (screen_height / 2) as f64,
            velocity: 0.0,
            min_y: VERTICAL_MARGIN,
            max_y: screen_height as f64 - VERTICAL_MARGIN,
            sprite,
            mask,
        }
    }

    /// Advance one tick: gravity, terminal velocity, move, clamp.
    ///
    /// Hitting either bound zeroes the velocity.
    pub fn update(&mut self) {
        self.velocity = (self.velocity + GRAVITY).min(TERMINAL_VELOCITY);
        self.y += self.velocity;

        if self.y > self.max_y {
            self.y = self.max_y;
            self.velocity = 0.0;
        }
        if self.y < self.min_y {
            self.y = self.min_y;
            self.velocity = 0.0;
        }
    }

    /// Replace the current velocity with the upward lift.
    pub fn impulse(&mut self) {
        self.velocity = LIFT;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Move the character, clamped to its bounds.
    pub(crate) fn place(&mut self, y: f64, velocity: f64) {
        self.y = y.clamp(self.min_y, self.max_y);
        self.velocity = velocity;
    }
}

impl Renderable for Character {
    fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.blit(&self.sprite, self.x, self.y);
    }
}
