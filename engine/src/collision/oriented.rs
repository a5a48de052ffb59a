use glam::Vec2;

use crate::geometry::rotate;

use super::SpriteGeometry;

/// Tests whether two rotated rectangular sprites overlap.
///
/// Works in the frame of `second`, where it is axis aligned and `first` is
/// rotated by the difference of the two rotations. `first` is rejected when its
/// horizontal extent misses `second`, otherwise its vertical extent inside the
/// horizontal span of `second` is compared against `second`'s vertical span.
///
/// Rectangles that merely touch may be reported as overlapping.
pub fn oriented_overlap<A, B>(first: &A, second: &B) -> bool
where
    A: SpriteGeometry + ?Sized,
    B: SpriteGeometry + ?Sized,
{
    let half_first = first.source_rect().size() / 2.0;
    let half_second = second.source_rect().size() / 2.0;

    let (sin, cos) = (first.rotation() - second.rotation()).to_radians().sin_cos();

    let center = rotate(world_center(second) - world_center(first), -second.rotation());
    let bottom_left = center - half_second;
    let top_right = center + half_second;

    // corners of `first` as seen from its center
    let a = Vec2::new(
        half_first.x * cos - half_first.y * sin,
        half_first.x * sin + half_first.y * cos,
    );
    let b = Vec2::new(
        -half_first.x * cos - half_first.y * sin,
        -half_first.x * sin + half_first.y * cos,
    );

    // `a` ends up as a vertical extreme and `b` as the leftmost corner
    let skew = sin * cos;
    let (a, b) = if skew < 0.0 { (b, a) } else { (a, b) };
    let b = if sin < 0.0 { -b } else { b };

    if b.x > top_right.x || b.x > -bottom_left.x {
        return false;
    }

    let (ext1, ext2) = if skew == 0.0 {
        (a.y, -a.y)
    } else {
        (
            vertical_extreme(a, b, bottom_left.x, top_right.x),
            vertical_extreme(-a, b, bottom_left.x, top_right.x),
        )
    };

    let below = ext1 < bottom_left.y && ext2 < bottom_left.y;
    let above = ext1 > top_right.y && ext2 > top_right.y;
    !(below || above)
}

/// Height reached by the rectangle around `vertex` within `left..right`.
///
/// If `vertex` lies outside the span, the edge running from it towards the
/// span is evaluated at the nearest span boundary.
fn vertical_extreme(vertex: Vec2, leftmost: Vec2, left: f32, right: f32) -> f32 {
    let to_left = left - vertex.x;
    let to_right = right - vertex.x;
    if !(to_left * to_right > 0.0) {
        return vertex.y;
    }

    let (run, rise, offset) = if to_left < 0.0 {
        (vertex.x - leftmost.x, vertex.y - leftmost.y, to_right)
    } else {
        (vertex.x + leftmost.x, vertex.y + leftmost.y, to_left)
    };
    rise * offset / run + vertex.y
}

fn world_center<S: SpriteGeometry + ?Sized>(sprite: &S) -> Vec2 {
    let half = sprite.source_rect().size() / 2.0;
    sprite.transform().transform_point(half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collision::compute_aabb,
        geometry::{rect, Rect, Transform},
    };

    #[derive(Debug)]
    struct Frame {
        position: Vec2,
        rotation: f32,
        origin: Vec2,
        size: Vec2,
    }

    /// Square frame of `size` centered on `(x, y)`.
    fn centered(x: f32, y: f32, size: f32, rotation: f32) -> Frame {
        Frame {
            position: Vec2::new(x, y),
            rotation,
            origin: Vec2::splat(size / 2.0),
            size: Vec2::splat(size),
        }
    }

    impl SpriteGeometry for Frame {
        fn position(&self) -> Vec2 {
            self.position
        }

        fn rotation(&self) -> f32 {
            self.rotation
        }

        fn source_rect(&self) -> Rect {
            rect(0.0, 0.0, self.size.x, self.size.y)
        }

        fn transform(&self) -> Transform {
            Transform::from_position_rotation_origin(self.position, self.rotation, self.origin)
        }
    }

    #[test]
    fn identical_unrotated_sprites_overlap() {
        let first = centered(0.0, 0.0, 10.0, 0.0);
        let second = centered(0.0, 0.0, 10.0, 0.0);

        assert!(oriented_overlap(&first, &second));
    }

    #[test]
    fn identical_sprites_with_corner_origin_overlap() {
        let mut first = centered(3.0, 4.0, 10.0, 0.0);
        first.origin = Vec2::ZERO;
        let mut second = centered(3.0, 4.0, 10.0, 0.0);
        second.origin = Vec2::ZERO;

        assert!(oriented_overlap(&first, &second));
    }

    #[test]
    fn far_apart_sprites_do_not_overlap() {
        let first = centered(5.0, 5.0, 10.0, 0.0);
        let second = centered(105.0, 105.0, 10.0, 0.0);

        assert!(!oriented_overlap(&first, &second));
        assert!(!oriented_overlap(&second, &first));
    }

    #[test]
    fn rotated_corner_reaches_neighbour() {
        // the 45° diamond reaches x = 7.07, the neighbour starts at x = 7
        let diamond = centered(0.0, 0.0, 10.0, 45.0);
        let neighbour = centered(12.0, 0.0, 10.0, 0.0);

        assert!(oriented_overlap(&diamond, &neighbour));
        assert!(oriented_overlap(&neighbour, &diamond));
    }

    #[test]
    fn unrotated_sprite_misses_neighbour() {
        let square = centered(0.0, 0.0, 10.0, 0.0);
        let neighbour = centered(12.0, 0.0, 10.0, 0.0);

        assert!(!oriented_overlap(&square, &neighbour));
    }

    #[test]
    fn diamond_misses_diagonal_neighbour_even_though_boxes_intersect() {
        //  ◇ ┌──┐
        //    └──┘
        let diamond = centered(0.0, 0.0, 10.0, 45.0);
        let neighbour = centered(10.0, 10.0, 10.0, 0.0);

        assert!(compute_aabb(&diamond).intersects(&compute_aabb(&neighbour)));
        assert!(!oriented_overlap(&diamond, &neighbour));
        assert!(!oriented_overlap(&neighbour, &diamond));
    }

    /// 40x4 bar centered on `(x, y)`.
    fn bar(x: f32, y: f32, rotation: f32) -> Frame {
        Frame {
            position: Vec2::new(x, y),
            rotation,
            origin: Vec2::new(20.0, 2.0),
            size: Vec2::new(40.0, 4.0),
        }
    }

    #[test]
    fn crossed_bars_overlap() {
        //    │
        //  ──┼──
        //    │
        let horizontal = bar(0.0, 0.0, 0.0);
        let vertical = bar(0.0, 0.0, 90.0);

        assert!(oriented_overlap(&horizontal, &vertical));
        assert!(oriented_overlap(&vertical, &horizontal));
    }

    #[test]
    fn parallel_rotated_bars_do_not_overlap() {
        // shifted along the bars' shared normal
        let offset = rotate(Vec2::new(0.0, 10.0), 30.0);
        let lower = bar(0.0, 0.0, 30.0);
        let upper = bar(offset.x, offset.y, 30.0);

        assert!(!oriented_overlap(&lower, &upper));
        assert!(!oriented_overlap(&upper, &lower));
    }

    #[parameterized(x = {
        0.0, 6.0, 9.0, 12.0, -8.0, 0.5, 14.0, 3.0
    }, y = {
        0.0, 6.0, -9.0, 1.0, 8.0, 11.0, 0.0, -3.0
    }, rotation1 = {
        0.0, 30.0, 45.0, 60.0, 135.0, 200.0, 10.0, -75.0
    }, rotation2 = {
        0.0, 0.0, 20.0, 90.0, 45.0, 330.0, 80.0, 15.0
    })]
    fn overlap_is_symmetric(x: f32, y: f32, rotation1: f32, rotation2: f32) {
        let first = centered(0.0, 0.0, 10.0, rotation1);
        let second = centered(x, y, 8.0, rotation2);

        assert_eq!(
            oriented_overlap(&first, &second),
            oriented_overlap(&second, &first)
        );
    }

    #[parameterized(x = {
        0.0, 6.0, 9.0, 12.0, -8.0, 0.5, 14.0, 3.0
    }, y = {
        0.0, 6.0, -9.0, 1.0, 8.0, 11.0, 0.0, -3.0
    }, rotation1 = {
        0.0, 30.0, 45.0, 60.0, 135.0, 200.0, 10.0, -75.0
    }, rotation2 = {
        0.0, 0.0, 20.0, 90.0, 45.0, 330.0, 80.0, 15.0
    })]
    fn overlap_implies_aabb_overlap(x: f32, y: f32, rotation1: f32, rotation2: f32) {
        let first = centered(0.0, 0.0, 10.0, rotation1);
        let second = centered(x, y, 8.0, rotation2);

        if oriented_overlap(&first, &second) {
            assert!(compute_aabb(&first).intersects(&compute_aabb(&second)));
        }
    }
}
