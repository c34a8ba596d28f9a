//! Half-block terminal implementation of [`Renderer`].
//!
//! Sprites are rasterised into a pixel grid at viewport resolution. Panel
//! outlines and text are kept as cell overlays and drawn on top, in the
//! order they were issued.

use super::viewport::Viewport;
use crate::render::{FontSize, LogicalRect, PanelStyle, Renderer, TextAnchor, TextStyle};
use crate::sprites::{Rgba, Sprite};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

/// Upper half block: fg paints the top pixel, bg the bottom one.
const UPPER_HALF: &str = "▀";

#[derive(Debug, Clone)]
enum Overlay {
    Border { area: Rect, color: Rgba },
    Text {
        column: i32,
        row: i32,
        text: String,
        style: Style,
    },
}

pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[derive(Debug, Clone)]
pub struct FrameCanvas {
    viewport: Viewport,
    pixels: Vec<Rgba>,
    overlays: Vec<Overlay>,
}

impl FrameCanvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pixels: vec![Rgba::BLACK; viewport.pixel_width() * viewport.pixel_height()],
            viewport,
            overlays: Vec::new(),
        }
    }

    /// Colour of a grid pixel; black outside the grid.
    pub fn pixel(&self, px: usize, py: usize) -> Rgba {
        if px < self.viewport.pixel_width() && py < self.viewport.pixel_height() {
            self.pixels[py * self.viewport.pixel_width() + px]
        } else {
            Rgba::BLACK
        }
    }

    fn fill_logical(&mut self, rect: LogicalRect, color: Rgba) {
        let width = self.viewport.pixel_width();
        let height = self.viewport.pixel_height();
        for py in self.viewport.pixel_span(rect.y as f64, rect.height as f64, height) {
            for px in self.viewport.pixel_span(rect.x as f64, rect.width as f64, width) {
                let idx = py * width + px;
                self.pixels[idx] = color.over(self.pixels[idx]);
            }
        }
    }

    /// Smallest cell rectangle covering `rect`, clipped to the viewport.
    fn cell_rect(&self, rect: LogicalRect) -> Rect {
        let scale = self.viewport.scale();
        let cells = self.viewport.cells();
        let left = (rect.x as f64 / scale).floor().max(0.0) as u16;
        let top = (rect.y as f64 / scale / 2.0).floor().max(0.0) as u16;
        let right = ((rect.x + rect.width) as f64 / scale).ceil().max(0.0) as u16;
        let bottom = ((rect.y + rect.height) as f64 / scale / 2.0).ceil().max(0.0) as u16;
        Rect::new(
            cells.x + left,
            cells.y + top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
        .intersection(cells)
    }
}

impl Renderer for FrameCanvas {
    fn blit(&mut self, sprite: &Sprite, x: f64, y: f64) {
        let width = self.viewport.pixel_width();
        let height = self.viewport.pixel_height();
        for py in self.viewport.pixel_span(y, sprite.height() as f64, height) {
            for px in self.viewport.pixel_span(x, sprite.width() as f64, width) {
                let (lx, ly) = self.viewport.pixel_center(px, py);
                let (sx, sy) = ((lx - x).floor(), (ly - y).floor());
                if sx < 0.0 || sy < 0.0 {
                    continue;
                }
                let color = sprite.pixel(sx as u32, sy as u32);
                if !color.is_transparent() {
                    let idx = py * width + px;
                    self.pixels[idx] = color.over(self.pixels[idx]);
                }
            }
        }
    }

    fn rounded_rect(&mut self, rect: LogicalRect, style: PanelStyle) {
        self.fill_logical(rect, style.fill);
        let area = self.cell_rect(rect);
        if !area.is_empty() {
            self.overlays.push(Overlay::Border {
                area,
                color: style.outline,
            });
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, style: TextStyle) {
        let scale = self.viewport.scale();
        let cells = self.viewport.cells();
        let width = text.chars().count() as i32;
        let mut column = cells.x as i32 + (x / scale).floor() as i32;
        let row = cells.y as i32 + (y / scale / 2.0).floor() as i32;
        if style.anchor == TextAnchor::Center {
            column -= width / 2;
        }

        let mut cell_style = Style::default().fg(to_color(style.color));
        if style.size == FontSize::Large {
            cell_style = cell_style.add_modifier(Modifier::BOLD);
        }
        self.overlays.push(Overlay::Text {
            column,
            row,
            text: text.to_string(),
            style: cell_style,
        });
    }
}

/// Write `text` starting at (column, row), dropping whatever falls outside
/// `bounds`.
fn put_text(buf: &mut Buffer, bounds: Rect, column: i32, row: i32, text: &str, style: Style) {
    if row < bounds.y as i32 || row >= bounds.bottom() as i32 {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let x = column + i as i32;
        if x < bounds.x as i32 || x >= bounds.right() as i32 {
            continue;
        }
        buf.get_mut(x as u16, row as u16).set_char(ch).set_style(style);
    }
}

impl Widget for &FrameCanvas {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let bounds = self.viewport.cells().intersection(buf.area);
        if bounds.is_empty() {
            return;
        }
        let cells = self.viewport.cells();

        for y in bounds.top()..bounds.bottom() {
            for x in bounds.left()..bounds.right() {
                let px = (x - cells.x) as usize;
                let py = (y - cells.y) as usize * 2;
                let top = self.pixel(px, py);
                let bottom = self.pixel(px, py + 1);
                buf.get_mut(x, y)
                    .set_symbol(UPPER_HALF)
                    .set_fg(to_color(top))
                    .set_bg(to_color(bottom));
            }
        }

        for overlay in &self.overlays {
            match overlay {
                Overlay::Border { area, color } => {
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(to_color(*color)))
                        .render(area.intersection(bounds), buf);
                }
                Overlay::Text {
                    column,
                    row,
                    text,
                    style,
                } => put_text(buf, bounds, *column, *row, text, *style),
            }
        }
    }
}
