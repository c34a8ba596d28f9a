//! Fixed tuning constants. Every per-tick value assumes `TICKS_PER_SECOND`.

// Frame pacing
pub const TICKS_PER_SECOND: u32 = 60;

// Logical screen (pixels)
pub const SCREEN_WIDTH: i32 = 1280;
pub const SCREEN_HEIGHT: i32 = 720;

// Character
pub const CHARACTER_START_X: f64 = 64.0;
pub const CHARACTER_SIZE: u32 = 43;
pub const GRAVITY: f64 = 0.5;
pub const LIFT: f64 = -9.0;
pub const TERMINAL_VELOCITY: f64 = 10.0;
/// Distance kept between the character and the top/bottom screen edges.
pub const VERTICAL_MARGIN: f64 = 20.0;

// Obstacles
pub const OBSTACLE_GAP: i32 = 170;
/// Minimum height of either segment, so the gap never touches a screen edge.
pub const OBSTACLE_MARGIN: i32 = 50;
pub const SPAWN_INTERVAL_TICKS: u64 = 75;
pub const SPAWN_SPACING: f64 = 220.0;
/// Reference x the first spawn is offset from.
pub const FIRST_SPAWN_REFERENCE_X: f64 = SCREEN_WIDTH as f64;

// Difficulty
pub const INITIAL_OBSTACLE_SPEED: f64 = 3.0;
pub const SPEED_INCREMENT: f64 = 0.065;

// Audio
pub const MUSIC_VOLUME: f32 = 0.4;
