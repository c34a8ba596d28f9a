//! Built-in artwork. Everything is drawn in-source, so the game needs no
//! files at runtime.

use super::mask::Mask;
use super::sprite::{Rgba, Sprite, SpriteError};
use crate::core::constants::CHARACTER_SIZE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SQUIRREL_ART: [&str; 16] = [
    "................",
    "......dd........",
    ".....dbbd.......",
    "....dbbbbd..dd..",
    "...dbkwbbbddbbd.",
    "..pbbkkbbbbbbbd.",
    "..dbbllbbbbbbd..",
    ".dbbllllbbbbbd..",
    "dbbbllllbbbbbbd.",
    "dbbbllllbbbbbbbd",
    ".dbbbllbbbbbbbd.",
    "..dbbbbbbbbbbd..",
    "...dbbbbbbbbd...",
    "....dbb..dbbd...",
    "....dd....dd....",
    "................",
];

const SQUIRREL_PALETTE: [(char, Rgba); 6] = [
    ('b', Rgba::rgb(150, 98, 52)),
    ('d', Rgba::rgb(92, 58, 30)),
    ('l', Rgba::rgb(226, 196, 150)),
    ('k', Rgba::rgb(20, 16, 12)),
    ('w', Rgba::rgb(250, 250, 250)),
    ('p', Rgba::rgb(230, 120, 130)),
];

const PIPE_ART: [&str; 8] = [
    ".DDDDDDDDDDDDDD.",
    ".DgGGHHGGGGGgdD.",
    ".DgGGHHGGGGGgdD.",
    ".DgGGHHGGGGGgdD.",
    ".DgGGHHGGGGGgdD.",
    ".DgGGHHGGGGGgdD.",
    ".DgGGHHGGGGGgdD.",
    ".DddddddddddddD.",
];

const PIPE_PALETTE: [(char, Rgba); 5] = [
    ('D', Rgba::rgb(40, 70, 14)),
    ('d', Rgba::rgb(60, 100, 20)),
    ('g', Rgba::rgb(74, 122, 26)),
    ('G', Rgba::rgb(100, 170, 40)),
    ('H', Rgba::rgb(145, 215, 62)),
];

/// Logical pixels per pipe art pixel.
pub const PIPE_SCALE: u32 = 5;

const SKY_TOP: Rgba = Rgba::rgb(8, 10, 32);
const SKY_BOTTOM: Rgba = Rgba::rgb(38, 30, 78);
const STAR: Rgba = Rgba::rgb(235, 235, 200);
const STAR_COUNT: usize = 140;
const STAR_SEED: u64 = 0x5EED_5747;

/// Obstacle tile in both orientations.
#[derive(Debug, Clone)]
pub struct ObstacleTiles {
    /// Tile for the bottom segment, stacked downward.
    pub bottom: Sprite,
    /// Vertically flipped tile for the top segment, stacked upward.
    pub top: Sprite,
}

impl ObstacleTiles {
    pub fn new(tile: Sprite) -> Self {
        Self {
            top: tile.flipped_vertical(),
            bottom: tile,
        }
    }

    pub fn width(&self) -> u32 {
        self.bottom.width()
    }

    pub fn height(&self) -> u32 {
        self.bottom.height()
    }
}

/// All images the game draws.
#[derive(Debug, Clone)]
pub struct Assets {
    pub character: Sprite,
    pub character_mask: Mask,
    pub obstacle: ObstacleTiles,
    pub background: Sprite,
}

impl Assets {
    pub fn load(screen_width: u32, screen_height: u32) -> Result<Self, SpriteError> {
        let character = Sprite::from_art(&SQUIRREL_ART, &SQUIRREL_PALETTE)?
            .scaled(CHARACTER_SIZE, CHARACTER_SIZE);
        let character_mask = Mask::from_sprite(&character);

        let tile = Sprite::from_art(&PIPE_ART, &PIPE_PALETTE)?;
        let tile = tile.scaled(tile.width() * PIPE_SCALE, tile.height() * PIPE_SCALE);

        Ok(Self {
            character,
            character_mask,
            obstacle: ObstacleTiles::new(tile),
            background: night_sky(screen_width, screen_height),
        })
    }
}

/// Vertical night gradient sprinkled with stars.
pub fn night_sky(width: u32, height: u32) -> Sprite {
    let mut sky = Sprite::transparent(width, height);
    let span = height.saturating_sub(1).max(1) as f64;
    let lerp = |a: u8, b: u8, t: f64| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

    for y in 0..height {
        let t = y as f64 / span;
        let color = Rgba::rgb(
            lerp(SKY_TOP.r, SKY_BOTTOM.r, t),
            lerp(SKY_TOP.g, SKY_BOTTOM.g, t),
            lerp(SKY_TOP.b, SKY_BOTTOM.b, t),
        );
        for x in 0..width {
            sky.set_pixel(x, y, color);
        }
    }

    if width > 0 && height > 0 {
        let mut rng = StdRng::seed_from_u64(STAR_SEED);
        for _ in 0..STAR_COUNT {
            let x = rng.gen_range(0..width);
            // Stars thin out towards the horizon
            let y = rng.gen_range(0..height.div_ceil(3) * 2).min(height - 1);
            let size = rng.gen_range(2..=4);
            for dy in 0..size {
                for dx in 0..size {
                    sky.set_pixel(x + dx, y + dy, STAR);
                }
            }
        }
    }

    sky
}
