//! Clickable game-over controls.

use crate::render::{LogicalRect, PanelStyle, Renderable, Renderer, TextStyle};
use crate::sprites::Rgba;

const BUTTON_WIDTH: i32 = 100;
const BUTTON_HEIGHT: i32 = 40;
const BUTTON_FILL: Rgba = Rgba::rgb(70, 70, 70);
const BUTTON_RADIUS: u32 = 10;

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Start a new session.
    Restart,
    /// Leave the game.
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    label: &'static str,
    rect: LogicalRect,
    action: ButtonAction,
}

impl Button {
    pub fn new(label: &'static str, rect: LogicalRect, action: ButtonAction) -> Self {
        Self {
            label,
            rect,
            action,
        }
    }

    pub fn restart(screen_width: i32, screen_height: i32) -> Self {
        Self::new(
            "Restart",
            LogicalRect::new(
                screen_width / 2 - 110,
                screen_height / 2 + 60,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            ButtonAction::Restart,
        )
    }

    pub fn quit(screen_width: i32, screen_height: i32) -> Self {
        Self::new(
            "Quit",
            LogicalRect::new(
                screen_width / 2 + 10,
                screen_height / 2 + 60,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            ButtonAction::Quit,
        )
    }

    pub fn rect(&self) -> LogicalRect {
        self.rect
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// The button's action if (x, y) is inside it.
    pub fn handle_click(&self, x: f64, y: f64) -> Option<ButtonAction> {
        self.rect.contains(x, y).then_some(self.action)
    }
}

impl Renderable for Button {
    fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.rounded_rect(
            self.rect,
            PanelStyle {
                fill: BUTTON_FILL,
                outline: Rgba::WHITE,
                radius: BUTTON_RADIUS,
            },
        );
        let (cx, cy) = self.rect.center();
        renderer.text(cx, cy, self.label, TextStyle::small(Rgba::WHITE).centered());
    }
}
