pub mod intersection;
pub mod transform;

pub use transform::Transform;

/// Axis-aligned rectangle, `(x, y)` being the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

pub type Point = glam::Vec2;

#[inline(always)]
pub const fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect { x, y, w, h }
}

#[inline(always)]
pub const fn point(x: f32, y: f32) -> Point {
    glam::Vec2::new(x, y)
}

impl Rect {
    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Point {
        point(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn translated(&self, offset: glam::Vec2) -> Rect {
        rect(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Returns the overlapping part of the two rectangles, if any.
    ///
    /// Rectangles that only share an edge, as well as zero-area rectangles,
    /// never intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        intersection::rect_intersection(*self, *other)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}

/// Rotates `v` about the origin by `degrees`.
///
/// Positive angles follow the sprite rotation convention, which on a y-down
/// screen is clockwise.
pub fn rotate(v: glam::Vec2, degrees: f32) -> glam::Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    glam::Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
