//! Sprite collision queries.
//!
//! Three entry points, cheapest first:
//! - [`compute_aabb`]: axis-aligned box around a rotated sprite
//! - [`oriented_overlap`]: exact test between two rotated rectangles
//! - [`pixel_overlap`]: alpha-channel test inside the overlap of the two boxes
//!
//! All of them are pure functions over the sprites they are handed.

pub mod aabb;
pub mod oriented;
pub mod pixel;

pub use aabb::compute_aabb;
pub use oriented::oriented_overlap;
pub use pixel::pixel_overlap;

use glam::Vec2;

use crate::geometry::{Rect, Transform};

/// The part of a sprite the collision queries look at.
pub trait SpriteGeometry {
    fn position(&self) -> Vec2;

    /// Rotation in degrees.
    fn rotation(&self) -> f32;

    /// Extent of the sprite in texture space. Local coordinates run from
    /// `(0, 0)` to `(w, h)` regardless of the rect's position in the texture.
    fn source_rect(&self) -> Rect;

    /// Local to world mapping.
    fn transform(&self) -> Transform;
}

/// Read-only pixel access in sprite-local coordinates.
pub trait AlphaSource {
    /// Alpha at local pixel `(x, y)`, `None` when outside the pixel data.
    fn alpha(&self, x: u32, y: u32) -> Option<u8>;
}

/// Clamps an alpha threshold read from untrusted input into `0..=255`.
pub fn alpha_threshold_from(value: i64) -> u8 {
    value.clamp(0, u8::MAX as i64) as u8
}
