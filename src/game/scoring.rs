//! Score, high score and obstacle speed progression.

use crate::core::constants::{INITIAL_OBSTACLE_SPEED, SPEED_INCREMENT};

/// Session-wide obstacle speed. Every obstacle reads the same value each
/// tick; it only ever increases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    speed: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

impl Difficulty {
    pub fn new() -> Self {
        Self {
            speed: INITIAL_OBSTACLE_SPEED,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn on_obstacle_passed(&mut self) {
        self.speed += SPEED_INCREMENT;
    }
}

/// Current score plus the best score seen since the process started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    high_score: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Count one passed obstacle; returns the new score.
    pub fn record_pass(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Fold the finished session's score into the high score.
    pub fn finish_session(&mut self) {
        self.high_score = self.high_score.max(self.score);
    }

    pub fn reset_for_new_session(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_starts_at_initial_value() {
        assert_eq!(Difficulty::new().speed(), 3.0);
    }

    #[test]
    fn test_speed_increment_per_pass() {
        let mut difficulty = Difficulty::new();
        difficulty.on_obstacle_passed();
        assert!((difficulty.speed() - 3.065).abs() < 1e-12);
        for _ in 0..9 {
            difficulty.on_obstacle_passed();
        }
        assert!((difficulty.speed() - 3.65).abs() < 1e-9);
    }

    #[test]
    fn test_high_score_is_max_of_sessions() {
        let mut board = Scoreboard::new();
        for _ in 0..5 {
            board.record_pass();
        }
        board.finish_session();
        assert_eq!(board.high_score(), 5);

        board.reset_for_new_session();
        assert_eq!(board.score(), 0);
        board.record_pass();
        board.finish_session();
        assert_eq!(board.high_score(), 5);

        board.reset_for_new_session();
        for _ in 0..8 {
            board.record_pass();
        }
        board.finish_session();
        assert_eq!(board.high_score(), 8);
    }

    #[test]
    fn test_record_pass_returns_running_score() {
        let mut board = Scoreboard::new();
        assert_eq!(board.record_pass(), 1);
        assert_eq!(board.record_pass(), 2);
    }
}
