use glam::Vec2;

use crate::geometry::{rect, rotate, Rect};

use super::SpriteGeometry;

/// Smallest axis-aligned rectangle containing the rotated sprite.
pub fn compute_aabb<S: SpriteGeometry + ?Sized>(sprite: &S) -> Rect {
    let anchor = sprite.transform().transform_point(Vec2::ZERO);
    let size = sprite.source_rect().size();
    let angle = sprite.rotation();

    if angle == 0.0 {
        return rect(anchor.x, anchor.y, size.x, size.y);
    }

    // rotation is about the local origin, which stays at (0, 0)
    let corners = [
        Vec2::ZERO,
        rotate(Vec2::new(size.x, 0.0), angle),
        rotate(size, angle),
        rotate(Vec2::new(0.0, size.y), angle),
    ];
    let min = corners.iter().fold(Vec2::ZERO, |acc, &c| acc.min(c));
    let max = corners.iter().fold(Vec2::ZERO, |acc, &c| acc.max(c));

    rect(min.x, min.y, max.x - min.x, max.y - min.y).translated(anchor)
}
