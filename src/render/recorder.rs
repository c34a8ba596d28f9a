//! A [`Renderer`] that just remembers what it was asked to draw.

use super::{LogicalRect, PanelStyle, Renderer, TextStyle};
use crate::sprites::Sprite;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Blit {
        width: u32,
        height: u32,
        x: f64,
        y: f64,
    },
    RoundedRect {
        rect: LogicalRect,
        style: PanelStyle,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text strings drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn blit_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Blit { .. }))
            .count()
    }
}

impl Renderer for CommandRecorder {
    fn blit(&mut self, sprite: &Sprite, x: f64, y: f64) {
        self.commands.push(DrawCommand::Blit {
            width: sprite.width(),
            height: sprite.height(),
            x,
            y,
        });
    }

    fn rounded_rect(&mut self, rect: LogicalRect, style: PanelStyle) {
        self.commands.push(DrawCommand::RoundedRect { rect, style });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
    }
}
