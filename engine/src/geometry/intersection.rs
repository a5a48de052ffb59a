use super::{rect, Point, Rect};

pub fn point_is_inside_rect(point: Point, rect: Rect) -> bool {
    let horizontal_overlap = rect.left() <= point.x && point.x <= rect.right();
    let vertical_overlap = rect.top() <= point.y && point.y <= rect.bottom();

    horizontal_overlap && vertical_overlap
}

pub fn rect_intersection(lhs: Rect, rhs: Rect) -> Option<Rect> {
    let left = f32::max(lhs.left(), rhs.left());
    let top = f32::max(lhs.top(), rhs.top());
    let right = f32::min(lhs.right(), rhs.right());
    let bottom = f32::min(lhs.bottom(), rhs.bottom());

    if left < right && top < bottom {
        Some(rect(left, top, right - left, bottom - top))
    } else {
        None
    }
}
