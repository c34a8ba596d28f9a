//! Score readout while playing and the game-over panel.

use super::{LogicalRect, PanelStyle, Renderable, Renderer, TextStyle};
use crate::game::Button;
use crate::sprites::Rgba;

const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
const RED: Rgba = Rgba::rgb(255, 0, 0);

const PANEL_WIDTH: i32 = 300;
const PANEL_HEIGHT: i32 = 200;
const PANEL_RADIUS: u32 = 15;

/// Current and best score in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
}

impl Renderable for Hud {
    fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.text(
            10.0,
            10.0,
            &format!("Score: {}", self.score),
            TextStyle::small(Rgba::WHITE),
        );
        renderer.text(
            10.0,
            35.0,
            &format!("High: {}", self.high_score),
            TextStyle::small(YELLOW),
        );
    }
}

/// Centered panel shown after a collision, with the restart and quit buttons.
#[derive(Debug, Clone, Copy)]
pub struct GameOverPanel<'a> {
    pub score: u32,
    pub high_score: u32,
    pub screen_width: i32,
    pub screen_height: i32,
    pub buttons: &'a [Button],
}

impl GameOverPanel<'_> {
    pub fn rect(&self) -> LogicalRect {
        LogicalRect::new(
            self.screen_width / 2 - PANEL_WIDTH / 2,
            self.screen_height / 2 - 120,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        )
    }
}

impl Renderable for GameOverPanel<'_> {
    fn render<R: Renderer>(&self, renderer: &mut R) {
        let panel = self.rect();
        renderer.rounded_rect(
            panel,
            PanelStyle {
                fill: Rgba::BLACK,
                outline: Rgba::WHITE,
                radius: PANEL_RADIUS,
            },
        );

        let center_x = f64::from(self.screen_width / 2);
        let top = f64::from(panel.y);
        renderer.text(
            center_x - 100.0,
            top + 20.0,
            "GAME OVER",
            TextStyle::large(RED),
        );
        renderer.text(
            center_x - 60.0,
            top + 70.0,
            &format!("Score: {}", self.score),
            TextStyle::small(Rgba::WHITE),
        );
        renderer.text(
            center_x - 80.0,
            top + 100.0,
            &format!("High Score: {}", self.high_score),
            TextStyle::small(YELLOW),
        );

        for button in self.buttons {
            button.render(renderer);
        }
    }
}
