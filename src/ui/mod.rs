//! Terminal presentation: a bordered playfield drawn with half blocks and a
//! status strip underneath.

pub mod canvas;
pub mod status_bar;
pub mod viewport;

pub use canvas::FrameCanvas;
pub use viewport::Viewport;

use crate::audio::AudioSink;
use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Game;
use crate::render::render_frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub const TITLE: &str = " Flying Squirrel ";
const STATUS_HEIGHT: u16 = 2;

fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(TITLE)
}

/// Split the terminal into the playfield and the status strip.
pub fn layout(area: Rect) -> (Rect, Rect) {
    let inner = frame_block().inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
        .split(inner);
    (chunks[0], chunks[1])
}

/// Where the logical screen lands for a terminal of size `area`.
pub fn viewport_for(area: Rect) -> Viewport {
    let (play, _) = layout(area);
    Viewport::fit(play, SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Draw one frame of the game.
pub fn draw<A: AudioSink>(frame: &mut Frame, game: &Game<A>) {
    let area = frame.size();
    frame.render_widget(frame_block(), area);

    let (_, status_area) = layout(area);
    let viewport = viewport_for(area);
    if !viewport.is_empty() {
        let mut canvas = FrameCanvas::new(viewport);
        render_frame(game, &mut canvas);
        frame.render_widget(&canvas, viewport.cells());
    }

    let (text, color) = status_bar::status_for(game.mode(), game.score(), game.high_score());
    status_bar::render_status_bar(
        frame,
        status_area,
        &text,
        color,
        status_bar::controls_for(game.mode()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_border_and_status() {
        let (play, status) = layout(Rect::new(0, 0, 130, 40));
        assert_eq!(play, Rect::new(1, 1, 128, 36));
        assert_eq!(status, Rect::new(1, 37, 128, 2));
    }

    #[test]
    fn test_viewport_fills_playfield_width() {
        let viewport = viewport_for(Rect::new(0, 0, 130, 40));
        assert_eq!(viewport.cells(), Rect::new(1, 1, 128, 36));
        assert_eq!(viewport.scale(), 10.0);
    }

    #[test]
    fn test_tiny_terminal_has_empty_viewport() {
        assert!(viewport_for(Rect::new(0, 0, 4, 4)).is_empty());
    }
}
