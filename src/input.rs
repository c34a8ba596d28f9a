//! Terminal input translated into game events.
//!
//! The core only reacts to [`InputEvent`]s; crossterm specifics stay here.

use crate::game::button::ButtonAction;
use crate::ui::viewport::Viewport;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// A discrete input the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close the game from any state.
    Quit,
    /// Upward impulse (Space or Up).
    Jump,
    /// Pointer press at a logical screen position.
    Click { x: f64, y: f64 },
    /// Keyboard shortcut for a game-over control.
    Activate(ButtonAction),
    /// Posted by the Restart control; starts a new session.
    RestartRequested,
    /// Anything the game ignores.
    Other,
}

/// Map a key press to an input event.
pub fn translate_key(key: &KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::Other;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            InputEvent::Quit
        }
        KeyCode::Char(' ') | KeyCode::Up => InputEvent::Jump,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            InputEvent::Activate(ButtonAction::Restart)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            InputEvent::Activate(ButtonAction::Quit)
        }
        _ => InputEvent::Other,
    }
}

/// Map any terminal event to an input event. Mouse positions are converted
/// to logical coordinates through `viewport`; clicks outside it are ignored.
pub fn translate(event: &Event, viewport: &Viewport) -> InputEvent {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => viewport
            .to_logical(mouse.column, mouse.row)
            .map(|(x, y)| InputEvent::Click { x, y })
            .unwrap_or(InputEvent::Other),
        _ => InputEvent::Other,
    }
}
