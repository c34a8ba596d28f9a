//! Obstacle segment compositing and pixel-accurate hit tests.
//!
//! A segment's image is the obstacle tile repeated vertically until it covers
//! the segment's height: the top segment stacks the flipped tile upward from
//! the gap boundary, the bottom segment stacks the tile downward from it.
//! The silhouette is the solid-pixel mask of that composite.

use crate::sprites::{Mask, ObstacleTiles, Sprite};

/// Composited image and silhouette of one obstacle segment.
#[derive(Debug, Clone)]
pub struct Segment {
    pub image: Sprite,
    pub mask: Mask,
}

impl Segment {
    fn from_image(image: Sprite) -> Self {
        let mask = Mask::from_sprite(&image);
        Self { image, mask }
    }
}

/// Both segments of an obstacle, composited once at spawn.
#[derive(Debug, Clone)]
pub struct Segments {
    pub top: Segment,
    pub bottom: Segment,
}

impl Segments {
    pub fn build(tiles: &ObstacleTiles, top_height: i32, bottom_height: i32) -> Self {
        Self {
            top: Segment::from_image(composite_top(&tiles.top, top_height)),
            bottom: Segment::from_image(composite_bottom(&tiles.bottom, bottom_height)),
        }
    }
}

/// Stack `tile` upward so its lowest copy ends exactly at `height`.
pub fn composite_top(tile: &Sprite, height: i32) -> Sprite {
    let mut surface = Sprite::transparent(tile.width(), height.max(0) as u32);
    let tile_height = tile.height() as i32;
    if tile_height == 0 {
        return surface;
    }
    let mut y = height - tile_height;
    while y > -tile_height {
        surface.blit(tile, 0, y);
        y -= tile_height;
    }
    surface
}

/// Stack `tile` downward from the top edge until `height` is covered.
pub fn composite_bottom(tile: &Sprite, height: i32) -> Sprite {
    let mut surface = Sprite::transparent(tile.width(), height.max(0) as u32);
    let tile_height = tile.height() as i32;
    if tile_height == 0 {
        return surface;
    }
    let mut y = 0;
    while y < height {
        surface.blit(tile, 0, y);
        y += tile_height;
    }
    surface
}

/// Offset of a segment relative to the character, truncated toward zero.
pub fn relative_offset(
    segment_x: f64,
    segment_y: f64,
    character_x: f64,
    character_y: f64,
) -> (i32, i32) {
    ((segment_x - character_x) as i32, (segment_y - character_y) as i32)
}

/// True when the character's silhouette touches either segment.
pub fn hits_segments(
    character: &Mask,
    character_pos: (f64, f64),
    segments: &Segments,
    obstacle_x: f64,
    bottom_top_y: f64,
) -> bool {
    let (cx, cy) = character_pos;
    let top_offset = relative_offset(obstacle_x, 0.0, cx, cy);
    let bottom_offset = relative_offset(obstacle_x, bottom_top_y, cx, cy);

    character.overlaps(&segments.top.mask, top_offset)
        || character.overlaps(&segments.bottom.mask, bottom_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::Rgba;

    /// 4x3 tile whose middle row is transparent.
    fn striped_tile() -> Sprite {
        let mut tile = Sprite::transparent(4, 3);
        for x in 0..4 {
            tile.set_pixel(x, 0, Rgba::WHITE);
            tile.set_pixel(x, 2, Rgba::WHITE);
        }
        tile
    }

    #[test]
    fn test_composite_bottom_repeats_from_top_edge() {
        let surface = composite_bottom(&striped_tile(), 7);
        assert_eq!(surface.height(), 7);
        let solid: Vec<bool> = (0..7)
            .map(|y| !surface.pixel(0, y).is_transparent())
            .collect();
        assert_eq!(solid, vec![true, false, true, true, false, true, true]);
    }

    #[test]
    fn test_composite_top_repeats_from_bottom_edge() {
        let mut tile = Sprite::transparent(2, 3);
        tile.set_pixel(0, 2, Rgba::WHITE);
        let surface = composite_top(&tile, 7);
        let solid: Vec<bool> = (0..7)
            .map(|y| !surface.pixel(0, y).is_transparent())
            .collect();
        // Copies end at y = 7, 4 and 1 (exclusive); their last row is solid
        assert_eq!(solid, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_composites_handle_degenerate_sizes() {
        assert_eq!(composite_top(&striped_tile(), 0).height(), 0);
        assert_eq!(composite_bottom(&striped_tile(), -5).height(), 0);
        let empty_tile = Sprite::transparent(3, 0);
        assert_eq!(composite_bottom(&empty_tile, 10).height(), 10);
    }

    #[test]
    fn test_relative_offset_truncates_toward_zero() {
        assert_eq!(relative_offset(100.9, 0.0, 64.0, 360.5), (36, -360));
        assert_eq!(relative_offset(10.0, 500.0, 64.5, 0.0), (-54, 500));
    }

    #[test]
    fn test_hits_segments_either_segment() {
        let tiles = ObstacleTiles::new(Sprite::filled(10, 10, Rgba::WHITE));
        let segments = Segments::build(&tiles, 50, 50);
        let character = Mask::filled(5, 5);

        // Inside the top segment
        assert!(hits_segments(&character, (0.0, 10.0), &segments, 0.0, 150.0));
        // Inside the bottom segment
        assert!(hits_segments(&character, (0.0, 160.0), &segments, 0.0, 150.0));
        // In the gap
        assert!(!hits_segments(&character, (0.0, 90.0), &segments, 0.0, 150.0));
        // Left of the obstacle
        assert!(!hits_segments(&character, (-20.0, 10.0), &segments, 0.0, 150.0));
    }
}
