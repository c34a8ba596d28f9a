//! Mapping between the logical screen and terminal cells.
//!
//! Each terminal cell shows two stacked pixels (`▀` with separate fg/bg
//! colours), so a cell area of `w × h` is a pixel grid of `w × 2h`. The
//! logical screen is scaled uniformly to fit that grid and centred.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Terminal cells actually covered by the logical screen.
    cells: Rect,
    /// Pixel rows of the grid (may be odd; the last cell row is then half used).
    pixel_rows: u16,
    /// Logical pixels per grid pixel.
    scale: f64,
}

impl Viewport {
    /// Largest centred viewport for a `logical_width × logical_height`
    /// screen inside `area`.
    pub fn fit(area: Rect, logical_width: i32, logical_height: i32) -> Self {
        let grid_width = area.width as f64;
        let grid_height = area.height as f64 * 2.0;

        if area.width == 0 || area.height == 0 || logical_width <= 0 || logical_height <= 0 {
            return Self {
                cells: Rect::new(area.x, area.y, 0, 0),
                pixel_rows: 0,
                scale: 1.0,
            };
        }

        let scale = (logical_width as f64 / grid_width).max(logical_height as f64 / grid_height);
        let columns = ((logical_width as f64 / scale).round() as u16).min(area.width);
        let pixel_rows = ((logical_height as f64 / scale).round() as u16).min(area.height * 2);
        let rows = pixel_rows.div_ceil(2);

        Self {
            cells: Rect::new(
                area.x + (area.width - columns) / 2,
                area.y + (area.height - rows) / 2,
                columns,
                rows,
            ),
            pixel_rows,
            scale,
        }
    }

    pub fn cells(&self) -> Rect {
        self.cells
    }

    pub fn pixel_width(&self) -> usize {
        self.cells.width as usize
    }

    pub fn pixel_height(&self) -> usize {
        self.pixel_rows as usize
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.cells.width == 0 || self.pixel_rows == 0
    }

    /// Logical position of a grid pixel's centre.
    pub fn pixel_center(&self, px: usize, py: usize) -> (f64, f64) {
        ((px as f64 + 0.5) * self.scale, (py as f64 + 0.5) * self.scale)
    }

    /// Grid pixel span covering logical `[start, start + length)` on one axis,
    /// clipped to `limit` pixels.
    pub fn pixel_span(&self, start: f64, length: f64, limit: usize) -> std::ops::Range<usize> {
        let first = (start / self.scale).floor().max(0.0) as usize;
        let last = ((start + length) / self.scale).ceil().max(0.0) as usize;
        first.min(limit)..last.min(limit)
    }

    /// Logical position at the centre of a terminal cell, if the cell is
    /// inside the viewport.
    pub fn to_logical(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let inside = column >= self.cells.x
            && column < self.cells.x + self.cells.width
            && row >= self.cells.y
            && row < self.cells.y + self.cells.height;
        if !inside {
            return None;
        }
        let x = ((column - self.cells.x) as f64 + 0.5) * self.scale;
        let y = ((row - self.cells.y) as f64 * 2.0 + 1.0) * self.scale;
        Some((x, y))
    }
}
