//! Two-line status strip under the playfield.

use crate::game::GameMode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const PLAYING_CONTROLS: &[(&str, &str)] = &[("[Space/Up]", "Flap"), ("[Ctrl+C]", "Quit")];
pub const GAME_OVER_CONTROLS: &[(&str, &str)] =
    &[("[Click/R]", "Restart"), ("[Q/Esc]", "Quit")];

/// Status message and colour for the current mode.
pub fn status_for(mode: GameMode, score: u32, high_score: u32) -> (String, Color) {
    match mode {
        GameMode::Playing => (
            format!("Score {score}   High {high_score}"),
            Color::Yellow,
        ),
        GameMode::GameOver => (
            format!("Crashed with {score}. Best so far: {high_score}"),
            Color::LightRed,
        ),
    }
}

pub fn controls_for(mode: GameMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        GameMode::Playing => PLAYING_CONTROLS,
        GameMode::GameOver => GAME_OVER_CONTROLS,
    }
}

/// Status message on the first line, key hints on the second. Lines that
/// do not fit in `area` are dropped.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    let lines = status_lines(status_text, status_color, controls, area.height);
    if lines.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn status_lines<'a>(
    status_text: &'a str,
    status_color: Color,
    controls: &[(&'a str, &'a str)],
    height: u16,
) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled(status_text, Style::default().fg(status_color))];
    if !controls.is_empty() {
        lines.push(controls_line(controls));
    }
    lines.truncate(height as usize);
    lines
}

fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_follow_mode() {
        assert_eq!(controls_for(GameMode::Playing)[0].1, "Flap");
        assert_eq!(controls_for(GameMode::GameOver)[0].1, "Restart");
    }

    #[test]
    fn test_status_mentions_scores() {
        let (text, color) = status_for(GameMode::Playing, 4, 10);
        assert_eq!(text, "Score 4   High 10");
        assert_eq!(color, Color::Yellow);

        let (text, _) = status_for(GameMode::GameOver, 4, 10);
        assert!(text.contains('4') && text.contains("10"));
    }

    #[test]
    fn test_controls_line_layout() {
        let line = controls_line(PLAYING_CONTROLS);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "[Space/Up] Flap  [Ctrl+C] Quit");
    }

    #[test]
    fn test_status_lines_fit_the_strip() {
        assert_eq!(status_lines("Score 1", Color::Yellow, PLAYING_CONTROLS, 2).len(), 2);
        assert_eq!(status_lines("Score 1", Color::Yellow, PLAYING_CONTROLS, 1).len(), 1);
        assert!(status_lines("Score 1", Color::Yellow, PLAYING_CONTROLS, 0).is_empty());
        assert_eq!(status_lines("Score 1", Color::Yellow, &[], 2).len(), 1);
    }
}
