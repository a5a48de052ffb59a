#[cfg(test)]
#[macro_use]
extern crate parameterized;

pub mod collision;
pub mod geometry;
pub mod graphics;

pub use collision::{compute_aabb, oriented_overlap, pixel_overlap};
