//! Obstacle pairs: a top and a bottom segment around a fixed gap.

use super::character::Character;
use super::collision::{hits_segments, Segments};
use crate::core::constants::{OBSTACLE_GAP, OBSTACLE_MARGIN};
use crate::render::{Renderable, Renderer};
use crate::sprites::ObstacleTiles;

/// Valid range of top-segment heights for a screen of the given height.
pub fn top_height_range(screen_height: i32) -> (i32, i32) {
    let min = OBSTACLE_MARGIN;
    let max = (screen_height - OBSTACLE_GAP - OBSTACLE_MARGIN).max(min);
    (min, max)
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    x: f64,
    top: i32,
    bottom: i32,
    gap: i32,
    screen_height: i32,
    passed: bool,
    segments: Segments,
}

impl Obstacle {
    /// Create an obstacle at `x` whose top segment is `top` pixels tall.
    ///
    /// `top` is pulled into the valid range so that
    /// `top + gap + bottom == screen_height` always holds.
    pub fn new(x: f64, top: i32, screen_height: i32, tiles: &ObstacleTiles) -> Self {
        let (min_top, max_top) = top_height_range(screen_height);
        let top = top.max(min_top).min(max_top);
        let bottom = screen_height - top - OBSTACLE_GAP;

        Self {
            x,
            top,
            bottom,
            gap: OBSTACLE_GAP,
            screen_height,
            passed: false,
            segments: Segments::build(tiles, top, bottom),
        }
    }

    /// Scroll left by the session's current speed.
    pub fn update(&mut self, speed: f64) {
        self.x -= speed;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn gap(&self) -> i32 {
        self.gap
    }

    pub fn width(&self) -> f64 {
        self.segments.bottom.image.width() as f64
    }

    /// Screen y where the bottom segment begins.
    pub fn bottom_y(&self) -> i32 {
        self.screen_height - self.bottom
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Right edge is past the left edge of the screen.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width() < 0.0
    }

    /// Mark the obstacle passed the first time its right edge is left of
    /// `character_x`. Returns true only on that first transition.
    pub fn try_pass(&mut self, character_x: f64) -> bool {
        if !self.passed && self.x + self.width() < character_x {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn hits(&self, character: &Character) -> bool {
        hits_segments(
            character.mask(),
            (character.x(), character.y()),
            &self.segments,
            self.x,
            self.bottom_y() as f64,
        )
    }
}

impl Renderable for Obstacle {
    fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.blit(&self.segments.top.image, self.x, 0.0);
        renderer.blit(&self.segments.bottom.image, self.x, self.bottom_y() as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandRecorder, DrawCommand};
    use crate::sprites::{Mask, Rgba, Sprite};

    const HEIGHT: i32 = 720;

    fn tiles() -> ObstacleTiles {
        ObstacleTiles::new(Sprite::filled(80, 48, Rgba::WHITE))
    }

    fn character_at(y: f64) -> Character {
        let mut c = Character::new(HEIGHT, Sprite::transparent(43, 43), Mask::filled(43, 43));
        c.place(y, 0.0);
        c
    }

    #[test]
    fn test_heights_add_up() {
        let obstacle = Obstacle::new(500.0, 200, HEIGHT, &tiles());
        assert_eq!(obstacle.top() + obstacle.gap() + obstacle.bottom(), HEIGHT);
        assert_eq!(obstacle.bottom(), 350);
        assert_eq!(obstacle.bottom_y(), 370);
    }

    #[test]
    fn test_top_is_clamped_into_range() {
        let low = Obstacle::new(0.0, 0, HEIGHT, &tiles());
        assert_eq!(low.top(), 50);
        let high = Obstacle::new(0.0, 10_000, HEIGHT, &tiles());
        assert_eq!(high.top(), HEIGHT - OBSTACLE_GAP - 50);
        assert_eq!(high.bottom(), 50);
    }

    #[test]
    fn test_update_scrolls_left() {
        let mut obstacle = Obstacle::new(500.0, 200, HEIGHT, &tiles());
        obstacle.update(3.0);
        obstacle.update(3.065);
        assert!((obstacle.x() - 493.935).abs() < 1e-9);
    }

    #[test]
    fn test_offscreen_only_after_right_edge_leaves() {
        let mut obstacle = Obstacle::new(0.0, 200, HEIGHT, &tiles());
        obstacle.update(80.0);
        assert!(!obstacle.is_offscreen());
        obstacle.update(0.5);
        assert!(obstacle.is_offscreen());
    }

    #[test]
    fn test_try_pass_fires_once() {
        let mut obstacle = Obstacle::new(0.0, 200, HEIGHT, &tiles());
        assert!(!obstacle.try_pass(80.0));
        assert!(obstacle.try_pass(80.5));
        assert!(obstacle.passed());
        assert!(!obstacle.try_pass(1000.0));
    }

    #[test]
    fn test_hits_top_and_bottom_but_not_gap() {
        let obstacle = Obstacle::new(40.0, 200, HEIGHT, &tiles());
        assert!(obstacle.hits(&character_at(100.0)));
        assert!(obstacle.hits(&character_at(360.0)));
        assert!(!obstacle.hits(&character_at(250.0)));
    }

    #[test]
    fn test_no_hit_when_horizontally_clear() {
        let obstacle = Obstacle::new(400.0, 200, HEIGHT, &tiles());
        assert!(!obstacle.hits(&character_at(100.0)));
    }

    #[test]
    fn test_renders_both_segments() {
        let obstacle = Obstacle::new(300.0, 200, HEIGHT, &tiles());
        let mut recorder = CommandRecorder::new();
        obstacle.render(&mut recorder);
        assert_eq!(
            recorder.commands,
            vec![
                DrawCommand::Blit {
                    width: 80,
                    height: 200,
                    x: 300.0,
                    y: 0.0
                },
                DrawCommand::Blit {
                    width: 80,
                    height: 350,
                    x: 300.0,
                    y: 370.0
                },
            ]
        );
    }
}
