//! Images, silhouettes and the built-in artwork.

pub mod assets;
pub mod mask;
pub mod sprite;

pub use assets::{Assets, ObstacleTiles};
pub use mask::Mask;
pub use sprite::{Rgba, Sprite, SpriteError};
