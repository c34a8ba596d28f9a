//! Rendering boundary.
//!
//! The simulation never draws directly. Entities implement [`Renderable`]
//! and emit draw commands into any [`Renderer`]: the terminal canvas in
//! `ui`, or the [`CommandRecorder`] used by tests and headless runs.

pub mod hud;
pub mod recorder;
pub mod scene;

pub use hud::{GameOverPanel, Hud};
pub use recorder::{CommandRecorder, DrawCommand};
pub use scene::render_frame;

use crate::sprites::{Rgba, Sprite};

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl LogicalRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left/top edges inclusive, right/bottom edges exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && x < (self.x + self.width) as f64
            && y >= self.y as f64
            && y < (self.y + self.height) as f64
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }
}

/// The two font sizes the game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Small,
}

/// Where a text position sits relative to the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Rgba,
    pub size: FontSize,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub const fn small(color: Rgba) -> Self {
        Self {
            color,
            size: FontSize::Small,
            anchor: TextAnchor::TopLeft,
        }
    }

    pub const fn large(color: Rgba) -> Self {
        Self {
            color,
            size: FontSize::Large,
            anchor: TextAnchor::TopLeft,
        }
    }

    pub const fn centered(self) -> Self {
        Self {
            anchor: TextAnchor::Center,
            ..self
        }
    }
}

/// Fill and outline of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub fill: Rgba,
    pub outline: Rgba,
    pub radius: u32,
}

/// Draw-command sink. Coordinates are logical pixels.
pub trait Renderer {
    /// Draw `sprite` with its top-left corner at (x, y).
    fn blit(&mut self, sprite: &Sprite, x: f64, y: f64);

    fn rounded_rect(&mut self, rect: LogicalRect, style: PanelStyle);

    fn text(&mut self, x: f64, y: f64, text: &str, style: TextStyle);
}

/// Something that knows how to draw itself.
pub trait Renderable {
    fn render<R: Renderer>(&self, renderer: &mut R);
}
