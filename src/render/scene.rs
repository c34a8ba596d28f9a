//! Draw order for one frame.

use super::{GameOverPanel, Hud, Renderable, Renderer};
use crate::audio::AudioSink;
use crate::game::{Game, GameMode};

/// Background first, then either the playfield with the score readout or
/// the game-over panel.
pub fn render_frame<A: AudioSink, R: Renderer>(game: &Game<A>, renderer: &mut R) {
    renderer.blit(&game.assets().background, 0.0, 0.0);

    match game.mode() {
        GameMode::Playing => {
            let session = game.session();
            session.character().render(renderer);
            for obstacle in session.obstacles() {
                obstacle.render(renderer);
            }
            Hud {
                score: game.score(),
                high_score: game.high_score(),
            }
            .render(renderer);
        }
        GameMode::GameOver => {
            let (screen_width, screen_height) = game.screen_size();
            GameOverPanel {
                score: game.score(),
                high_score: game.high_score(),
                screen_width,
                screen_height,
                buttons: game.buttons(),
            }
            .render(renderer);
        }
    }
}
