use glam::Vec2;
use itertools::Itertools;

use super::{compute_aabb, AlphaSource, SpriteGeometry};

/// Tests whether two sprites have pixels more opaque than `alpha_threshold`
/// at the same world position.
///
/// Only the intersection of the two bounding boxes is scanned, one world
/// pixel at a time, stopping at the first hit. A threshold of zero skips the
/// scan and reports any bounding box overlap as a hit.
///
/// Sample points are truncated, not filtered. Local coordinates of exactly
/// zero are rejected, so the first row and column of a sprite never collide.
pub fn pixel_overlap<A, B>(first: &A, second: &B, alpha_threshold: u8) -> bool
where
    A: SpriteGeometry + AlphaSource + ?Sized,
    B: SpriteGeometry + AlphaSource + ?Sized,
{
    let overlap = match compute_aabb(first).intersection(&compute_aabb(second)) {
        Some(overlap) => overlap,
        None => return false,
    };

    if alpha_threshold == 0 {
        return true;
    }

    let first_transform = first.transform().inverse();
    let second_transform = second.transform().inverse();
    let first_size = first.source_rect().size();
    let second_size = second.source_rect().size();

    let columns = overlap.left().ceil() as i32..overlap.right().ceil() as i32;
    let rows = overlap.top().ceil() as i32..overlap.bottom().ceil() as i32;

    let hit = columns.cartesian_product(rows).find(|&(i, j)| {
        let world = Vec2::new(i as f32, j as f32);
        let first_local = first_transform.transform_point(world);
        let second_local = second_transform.transform_point(world);

        if !is_sampleable(first_local, first_size) || !is_sampleable(second_local, second_size) {
            return false;
        }

        let first_alpha = first.alpha(first_local.x as u32, first_local.y as u32);
        let second_alpha = second.alpha(second_local.x as u32, second_local.y as u32);
        match (first_alpha, second_alpha) {
            (Some(a), Some(b)) => a > alpha_threshold && b > alpha_threshold,
            _ => false,
        }
    });

    if let Some((i, j)) = hit {
        log::trace!("pixel overlap at ({}, {}) inside {:?}", i, j, overlap);
    }
    hit.is_some()
}

fn is_sampleable(local: Vec2, size: Vec2) -> bool {
    local.x > 0.0 && local.y > 0.0 && local.x < size.x && local.y < size.y
}
