//! RGBA sprites: construction from pixel art, scaling, flipping and
//! alpha compositing.

use thiserror::Error;

/// Palette symbol that is always fully transparent.
pub const TRANSPARENT_SYMBOL: char = '.';

/// A single straight-alpha RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Composite `self` over `dst` ("source over").
    pub fn over(self, dst: Rgba) -> Rgba {
        match self.a {
            0 => dst,
            255 => self,
            sa => {
                let sa = sa as u32;
                let da = dst.a as u32 * (255 - sa) / 255;
                let out_a = sa + da;
                let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da) / out_a.max(1)) as u8;
                Rgba::new(
                    mix(self.r, dst.r),
                    mix(self.g, dst.g),
                    mix(self.b, dst.b),
                    out_a as u8,
                )
            }
        }
    }
}

/// Errors raised while building a sprite from pixel art.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteError {
    #[error("sprite art has no pixels")]
    Empty,
    #[error("art row {row} is {found} pixels wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown palette symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
}

/// Row-major RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// A fully transparent sprite, used as a compositing target.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a sprite from rows of palette symbols.
    ///
    /// `.` is always transparent; every other symbol must appear in
    /// `palette`. All rows must have the same width.
    pub fn from_art(rows: &[&str], palette: &[(char, Rgba)]) -> Result<Self, SpriteError> {
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(SpriteError::Empty);
        }

        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(SpriteError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let pixel = if symbol == TRANSPARENT_SYMBOL {
                    Rgba::TRANSPARENT
                } else {
                    palette
                        .iter()
                        .find(|(s, _)| *s == symbol)
                        .map(|(_, color)| *color)
                        .ok_or(SpriteError::UnknownSymbol {
                            symbol,
                            row,
                            column,
                        })?
                };
                pixels.push(pixel);
            }
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y); transparent outside the sprite.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Rgba::TRANSPARENT
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Nearest-neighbour resize.
    pub fn scaled(&self, width: u32, height: u32) -> Sprite {
        let mut out = Sprite::transparent(width, height);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height {
            let src_y = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let src_x = (x as u64 * self.width as u64 / width as u64) as u32;
                out.set_pixel(x, y, self.pixel(src_x, src_y));
            }
        }
        out
    }

    /// Mirror top-to-bottom.
    pub fn flipped_vertical(&self) -> Sprite {
        let row = self.width as usize;
        let pixels = self
            .pixels
            .chunks(row.max(1))
            .rev()
            .flatten()
            .copied()
            .collect();
        Sprite {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Composite `src` onto this sprite with its top-left corner at (x, y).
    /// Parts of `src` outside this sprite are clipped.
    pub fn blit(&mut self, src: &Sprite, x: i32, y: i32) {
        for sy in 0..src.height as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width as i32 {
                let dx = x + sx;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let idx = (dy as u32 * self.width + dx as u32) as usize;
                self.pixels[idx] = src.pixel(sx as u32, sy as u32).over(self.pixels[idx]);
            }
        }
    }
}
